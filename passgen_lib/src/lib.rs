pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod strength;

#[cfg(feature = "full")]
pub mod fs;
#[cfg(feature = "full")]
pub mod parser;

pub use charset::{CharacterClass, CharacterPool};
pub use config::GenerationConfig;
pub use error::ConfigurationError;
pub use generator::{generate, generate_multiple, Generator, Password};
pub use strength::{score, Strength, StrengthReport};
