use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::Parser;

pub mod config;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Config directory not found")]
    Config,

    #[error("Invalid preferences file: {0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug)]
struct FileManager {
    path: PathBuf,
}

impl FileManager {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn write_ser<P: Parser>(&self, input: &P) -> Result<(), Error> {
        let buffer = input.serialize_to()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, buffer)?;

        Ok(())
    }

    pub fn read_ser<P: Parser>(&self) -> Result<P, Error> {
        let buffer = std::fs::read_to_string(&self.path)?;

        let deserialized = P::deserialize_from(&buffer)?;

        Ok(deserialized)
    }
}

fn path() -> Result<PathBuf, Error> {
    let dirs = directories::ProjectDirs::from("dev", "passgen", "passgen").ok_or(Error::Config)?;

    Ok(dirs.config_dir().to_path_buf())
}

impl Display for FileManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
