use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum MdocImageError {
    #[error("File name {0} does not match the <name>_<###>[<angle>] frame pattern")]
    MalformedFilename(String),
    #[error("File name {0} contains a tilt angle that is not a valid number")]
    BadTiltAngle(String),
}

#[derive(Debug, Error)]
pub enum MdocError {
    #[error("Mdoc was constructed with no images")]
    NoImages,
    #[error("Mdoc failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Could not scan frames directory {0:?} because it does not exist")]
    BadFramesPath(PathBuf),
    #[error("Processor failed due to MdocImage error: {0}")]
    ImageError(#[from] MdocImageError),
    #[error("Processor failed due to Mdoc error: {0}")]
    MdocError(#[from] MdocError),
    #[error("Processor failed due to configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Processor failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
}
