use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::parser::Parser;

use super::FileManager;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_COUNT: usize = 1;

static PREFERENCES: OnceLock<Preferences> = OnceLock::new();

/// Defaults used by front ends when an option is not given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub count: usize,
    pub generation: GenerationConfig,
}

impl Parser for Preferences {}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            generation: GenerationConfig::default(),
        }
    }
}

impl Preferences {
    pub fn get() -> &'static Self {
        PREFERENCES.get_or_init(|| match Self::path() {
            Ok(path) => Self::load(path),
            Err(e) => {
                log::warn!("{e}, using default preferences");
                Self::default()
            }
        })
    }

    pub fn save(&self) -> Result<PathBuf, super::Error> {
        let path = Self::path()?;

        self.save_to(path.clone())?;

        Ok(path)
    }

    fn save_to(&self, path: PathBuf) -> Result<(), super::Error> {
        let manager = FileManager::new(path);

        manager.write_ser(self)?;

        log::info!("Preferences saved in {manager}");

        Ok(())
    }

    fn path() -> Result<PathBuf, super::Error> {
        let mut path = super::path()?;

        path.push(CONFIG_FILE_NAME);

        Ok(path)
    }

    /// Reads the file at `path`, creating it with defaults only when missing.
    /// An unreadable file is left untouched.
    fn load(path: PathBuf) -> Self {
        let manager = FileManager::new(path);

        match manager.read_ser() {
            Ok(preferences) => preferences,
            Err(super::Error::IO(e)) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default preferences");
                log::warn!("Could not find preferences file, creating");

                let preferences = Self::default();

                if let Err(e) = manager.write_ser(&preferences) {
                    log::warn!("Error creating preferences file {manager}: {e}");
                }

                preferences
            }
            Err(e) => {
                log::warn!("Ignoring preferences in {manager}: {e}");
                Self::default()
            }
        }
    }
}
