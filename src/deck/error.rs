//! Error types for deck export and generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::deck::datauri::DataUriError;
use crate::ooxml::error::OoxmlError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Presentation error: {0}")]
    Ooxml(#[from] OoxmlError),

    /// `slide` is 1-based and counts the title slide.
    #[error("Invalid image on slide {slide}: {source}")]
    Image {
        slide: usize,
        #[source]
        source: DataUriError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, ExportError>;
