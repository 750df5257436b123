/// Errors raised while writing PresentationML parts.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Packaging failed
    #[error("Package error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// A part could not be generated, e.g. a picture without a relationship
    #[error("Cannot generate part XML: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// `write!` into a `String` only fails if a `Display` impl does.
impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
