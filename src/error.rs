// SPDX-License-Identifier: MPL-2.0
use crate::tour::TourError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Manifest(String),
    Tour(TourError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Tour(e) => write!(f, "Tour Error: {}", e),
        }
    }
}

impl From<TourError> for Error {
    fn from(err: TourError) -> Self {
        Error::Tour(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
