use std::fmt;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a symbol that is not in the alphabet
    InvalidCharacter {
        byte: u8,
        position: usize,
        input: String,
    },
    /// The decoded value does not fit in 64 bits
    Overflow { input: String },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(byte: u8, position: usize, input: &[u8]) -> Self {
        DecodeError::InvalidCharacter {
            byte,
            position,
            input: display_input(input),
        }
    }

    /// Create an Overflow error with context
    pub fn overflow(input: &[u8]) -> Self {
        DecodeError::Overflow {
            input: display_input(input),
        }
    }
}

// Truncate long inputs
fn display_input(input: &[u8]) -> String {
    let lossy = String::from_utf8_lossy(input);
    if lossy.chars().count() > 60 {
        format!("{}...", lossy.chars().take(60).collect::<String>())
    } else {
        lossy.into_owned()
    }
}

fn display_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                byte,
                position,
                input,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character {} at position {}",
                        display_byte(*byte),
                        position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid character {} at position {}",
                        display_byte(*byte),
                        position
                    )?;
                }
                writeln!(f)?;

                // Caret only lines up when everything before it is single-byte
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m only symbols of the selected alphabet are allowed"
                    )?;
                } else {
                    write!(f, "hint: only symbols of the selected alphabet are allowed")?;
                }
                Ok(())
            }
            DecodeError::Overflow { input } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m overflow decoding '{}' as a 64-bit integer",
                        input
                    )?;
                } else {
                    writeln!(f, "error: overflow decoding '{}' as a 64-bit integer", input)?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m values above 18446744073709551615 need the arbitrary-length codec"
                    )?;
                } else {
                    write!(
                        f,
                        "hint: values above 18446744073709551615 need the arbitrary-length codec"
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors from validating a user-supplied alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet does not have exactly 62 symbols
    InvalidLength { actual: usize },
    /// A symbol appears more than once
    DuplicateSymbol(char),
    /// Symbols must be single ASCII bytes
    NonAscii(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::InvalidLength { actual } => {
                write!(f, "alphabet must have exactly 62 symbols, got {}", actual)
            }
            AlphabetError::DuplicateSymbol(c) => {
                write!(f, "duplicate symbol '{}' in alphabet", c)
            }
            AlphabetError::NonAscii(c) => {
                write!(f, "non-ASCII symbol '{}' in alphabet", c)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when an alphabet is not found in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
    /// Every name the registry does know, sorted
    pub available: Vec<String>,
}

impl AlphabetNotFoundError {
    /// Builds the error, picking the closest known name as a suggestion.
    pub fn new(name: impl Into<String>, available: Vec<String>) -> Self {
        let name = name.into();
        let suggestion = find_closest_alphabet(&name, &available);
        Self {
            name,
            suggestion,
            available,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        let hint = if use_color {
            "\x1b[1;36mhint:\x1b[0m"
        } else {
            "hint:"
        };
        if let Some(suggestion) = &self.suggestion {
            writeln!(f, "{} did you mean '{}'?", hint, suggestion)?;
        }
        if self.available.is_empty() {
            write!(f, "{} no alphabets are configured", hint)
        } else {
            write!(f, "{} known alphabets: {}", hint, self.available.join(", "))
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("standard", "standard"), 0);
        assert_eq!(levenshtein_distance("standrd", "standard"), 1);
        assert_eq!(levenshtein_distance("", "inverted"), 8);
        assert_eq!(levenshtein_distance("inverted", ""), 8);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "standard".to_string(),
            "inverted".to_string(),
            "letters_first".to_string(),
        ];

        assert_eq!(
            find_closest_alphabet("standrad", &names),
            Some("standard".to_string())
        );
        assert_eq!(
            find_closest_alphabet("invert", &names),
            Some("inverted".to_string())
        );
        assert_eq!(find_closest_alphabet("base64", &names), None);
        assert_eq!(find_closest_alphabet("standard", &[]), None);
    }

    #[test]
    fn test_display_input_truncates() {
        let long = vec![b'a'; 100];
        let shown = display_input(&long);
        assert_eq!(shown.len(), 63);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_error_display_no_color() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::invalid_character(b'?', 4, b"3mJr?");
        let display = format!("{}", err);
        assert!(display.contains("invalid character '?' at position 4"));
        assert!(display.contains("3mJr?"));
        assert!(display.contains("    ^"));
        assert!(display.contains("hint:"));

        let err = DecodeError::invalid_character(0x00, 0, b"\0abc");
        assert!(format!("{}", err).contains("invalid character 0x00"));

        let err = DecodeError::overflow(b"lYGhA16ahyg");
        let display = format!("{}", err);
        assert!(display.contains("overflow decoding 'lYGhA16ahyg'"));

        let err = AlphabetNotFoundError::new(
            "standrad",
            vec!["inverted".to_string(), "standard".to_string()],
        );
        let display = format!("{}", err);
        assert!(display.contains("alphabet 'standrad' not found"));
        assert!(display.contains("did you mean 'standard'?"));
        assert!(display.contains("known alphabets: inverted, standard"));

        let err = AlphabetNotFoundError::new("zzz", Vec::new());
        let display = format!("{}", err);
        assert!(!display.contains("did you mean"));
        assert!(display.contains("no alphabets are configured"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_alphabet_error_display() {
        assert_eq!(
            AlphabetError::InvalidLength { actual: 10 }.to_string(),
            "alphabet must have exactly 62 symbols, got 10"
        );
        assert_eq!(
            AlphabetError::DuplicateSymbol('x').to_string(),
            "duplicate symbol 'x' in alphabet"
        );
    }
}
