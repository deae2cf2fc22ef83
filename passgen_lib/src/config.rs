use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: usize = 12;

/// Options for a single generation call.
///
/// All character classes are enabled by default and nothing is excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerationConfig {
    pub length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    #[serde(with = "exclusions")]
    pub exclude_chars: BTreeSet<char>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_chars: BTreeSet::new(),
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.use_lowercase = enabled;
        self
    }

    #[must_use]
    pub fn uppercase(mut self, enabled: bool) -> Self {
        self.use_uppercase = enabled;
        self
    }

    #[must_use]
    pub fn digits(mut self, enabled: bool) -> Self {
        self.use_digits = enabled;
        self
    }

    #[must_use]
    pub fn symbols(mut self, enabled: bool) -> Self {
        self.use_symbols = enabled;
        self
    }

    /// Adds characters to the exclusion set. Repeated characters are ignored.
    #[must_use]
    pub fn exclude(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.exclude_chars.extend(chars);
        self
    }

    #[must_use]
    pub fn exclusions(&self) -> String {
        self.exclude_chars.iter().collect()
    }
}

// NOTE: Stored as a plain string so preference files stay readable
mod exclusions {
    use std::collections::BTreeSet;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(set: &BTreeSet<char>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&set.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<char>, D::Error> {
        let s = String::deserialize(deserializer)?;

        Ok(s.chars().collect())
    }
}
