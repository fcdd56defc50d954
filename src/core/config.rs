use crate::core::encoding::Encoding;
use crate::encoders::algorithms::errors::AlphabetNotFoundError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Name used when neither the caller nor the settings pick an alphabet.
pub const FALLBACK_ALPHABET: &str = "standard";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 62 symbols, zero digit first
    pub chars: String,
    /// Shown by `--list`
    #[serde(default)]
    pub description: Option<String>,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is given on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base62/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// Files that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("base62").join("alphabets.toml"));
        }
        config.merge_file(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                log::debug!("loaded alphabet overrides from {:?}", path);
                self.merge(other);
            }
            Err(e) => {
                log::warn!("failed to load alphabet config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`;
    /// a default alphabet set in `other` replaces the current one.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// The configured default alphabet name.
    pub fn default_alphabet(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(FALLBACK_ALPHABET)
    }

    /// Builds a validated [`Encoding`] for the named alphabet.
    pub fn build_encoding(&self, name: &str) -> Result<Encoding, Box<dyn std::error::Error>> {
        let alphabet = self
            .get_alphabet(name)
            .ok_or_else(|| AlphabetNotFoundError::new(name, self.names()))?;

        let encoding = Encoding::from_alphabet(&alphabet.chars)
            .map_err(|e| format!("invalid alphabet '{}': {}", name, e))?;
        Ok(encoding)
    }
}
