use std::error::Error;
use std::fmt;
use std::io::Error as IOError;
use std::string::String;
use toml::de::Error as TomlDeError;

/// Error returned when a configuration cannot be read or is invalid.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration is not in a proper `toml` format.
    TomlFormatError(TomlDeError),
    /// The configuration does not describe a valid selector.
    ConfigFormatError(String),
    /// The configuration file could not be read.
    IOError(IOError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::TomlFormatError(e) => {
                write!(f, "Invalid toml format: {}", e)
            }
            ConfigError::ConfigFormatError(s) => {
                write!(f, "Invalid configuration: {}", s)
            }
            ConfigError::IOError(e) => {
                write!(f, "Failed to read configuration: {}", e)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::TomlFormatError(e) => Some(e),
            ConfigError::ConfigFormatError(_) => None,
            ConfigError::IOError(e) => Some(e),
        }
    }
}
