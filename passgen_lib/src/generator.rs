use std::fmt::{Debug, Display};

use rand::distr::Distribution;
use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

use crate::charset::CharacterPool;
use crate::config::GenerationConfig;
use crate::error::ConfigurationError;

/// A generated password. Nothing keeps a copy once it is returned.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

/// Draws passwords from a cryptographically secure generator.
///
/// Each position is an independent uniform draw over the whole pool. There is
/// no guarantee that every enabled class shows up in a short password.
pub struct Generator<R> {
    rng: R,
}

impl Generator<ThreadRng> {
    /// Uses the thread local generator, which is reseeded from the OS and is
    /// never shared between threads.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + CryptoRng> Generator<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Password, ConfigurationError> {
        let pool = Self::prepare(config)?;

        Ok(self.draw(&pool, config.length))
    }

    /// Either every password is produced or none is.
    pub fn generate_multiple(
        &mut self,
        config: &GenerationConfig,
        count: usize,
    ) -> Result<Vec<Password>, ConfigurationError> {
        if count < 1 {
            return Err(ConfigurationError::InvalidCount);
        }

        let pool = Self::prepare(config)?;

        log::debug!("Generating {count} passwords of length {}", config.length);

        Ok((0..count).map(|_| self.draw(&pool, config.length)).collect())
    }

    fn prepare(config: &GenerationConfig) -> Result<CharacterPool, ConfigurationError> {
        if config.length < 1 {
            return Err(ConfigurationError::InvalidLength);
        }

        CharacterPool::build(config)
    }

    fn draw(&mut self, pool: &CharacterPool, length: usize) -> Password {
        let chars = pool.as_chars();

        let password = pool
            .index()
            .sample_iter(&mut self.rng)
            .take(length)
            .map(|i| chars[i])
            .collect();

        Password(password)
    }
}

pub fn generate(config: &GenerationConfig) -> Result<Password, ConfigurationError> {
    Generator::new().generate(config)
}

pub fn generate_multiple(
    config: &GenerationConfig,
    count: usize,
) -> Result<Vec<Password>, ConfigurationError> {
    Generator::new().generate_multiple(config, count)
}
