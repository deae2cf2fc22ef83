use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::fs::Error;

pub trait Parser: Serialize + DeserializeOwned {
    fn serialize_to(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn deserialize_from(input: &str) -> Result<Self, Error> {
        Ok(toml::from_str(input)?)
    }
}
