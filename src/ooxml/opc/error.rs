//! Packaging errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid part name '{0}'")]
    InvalidPackUri(String),

    #[error("No part named {0} in package")]
    PartNotFound(String),

    #[error("Part {0} already exists in package")]
    DuplicatePart(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
