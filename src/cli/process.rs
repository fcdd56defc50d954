use base62::{DecodeError, Encoding};
use std::io::{self, BufRead, Write};

/// What to do with each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    /// Invalid tokens decode to nothing
    Decode,
    /// Invalid tokens fail the line
    DecodeStrict,
}

/// Applies the codec to every whitespace-separated token of each line,
/// copying the whitespace between tokens through unchanged.
pub struct LineProcessor<'a> {
    encoding: &'a Encoding,
    mode: Mode,
}

/// Byte length of the Unicode whitespace character at the start of `bytes`.
///
/// Invalid UTF-8 is never whitespace.
fn space_len(bytes: &[u8]) -> Option<usize> {
    let width = match *bytes.first()? {
        b if b < 0x80 => 1,
        b if b & 0xE0 == 0xC0 => 2,
        b if b & 0xF0 == 0xE0 => 3,
        b if b & 0xF8 == 0xF0 => 4,
        _ => return None,
    };
    let c = std::str::from_utf8(bytes.get(..width)?)
        .ok()?
        .chars()
        .next()?;
    c.is_whitespace().then_some(width)
}

impl<'a> LineProcessor<'a> {
    pub fn new(encoding: &'a Encoding, mode: Mode) -> Self {
        Self { encoding, mode }
    }

    fn transform(&self, token: &[u8]) -> Result<Vec<u8>, DecodeError> {
        match self.mode {
            Mode::Encode => Ok(self.encoding.encode_to_vec(token)),
            Mode::Decode => Ok(self.encoding.decode(token)),
            Mode::DecodeStrict => self.encoding.decode_checked(token),
        }
    }

    /// Transforms one line (without its terminator).
    pub fn process_line(&self, line: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut result = Vec::with_capacity(line.len() * 2);
        let mut rest = line;

        while !rest.is_empty() {
            let token_len = (0..rest.len())
                .find(|&i| space_len(&rest[i..]).is_some())
                .unwrap_or(rest.len());
            let (token, tail) = rest.split_at(token_len);
            if !token.is_empty() {
                result.extend_from_slice(&self.transform(token)?);
            }

            let mut spaces = 0;
            while let Some(n) = space_len(&tail[spaces..]) {
                spaces += n;
            }
            result.extend_from_slice(&tail[..spaces]);
            rest = &tail[spaces..];
        }

        Ok(result)
    }

    /// Processes every line of `input`, writing one output line per input line.
    ///
    /// A line with a failing token is reported on `errors` and produces no
    /// output; later lines are still processed. Returns `false` if any line
    /// failed.
    pub fn process<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        output: &mut W,
        errors: &mut E,
    ) -> io::Result<bool> {
        let mut ok = true;

        for (number, line) in input.split(b'\n').enumerate() {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            match self.process_line(&line) {
                Ok(result) => {
                    output.write_all(&result)?;
                    output.write_all(b"\n")?;
                }
                Err(e) => {
                    log::debug!("line {} failed: {:?}", number + 1, e);
                    writeln!(errors, "{}", e)?;
                    ok = false;
                }
            }
        }

        Ok(ok)
    }
}
