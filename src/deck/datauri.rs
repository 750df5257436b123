//! `data:` URI decoding for generated slide images.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageReader;
use thiserror::Error;

use crate::ooxml::pptx::ImageFormat;

#[derive(Error, Debug)]
pub enum DataUriError {
    #[error("Not a data URI: missing 'data:' prefix")]
    MissingPrefix,

    #[error("Data URI is not base64 encoded")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Cannot read image dimensions: {0}")]
    Dimensions(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DataUriError>;

/// A decoded `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Declared media type, empty when the URI omits it
    pub mime: String,
    pub data: Vec<u8>,
}

/// Decoded picture ready for embedding.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode a base64 `data:` URI.
///
/// ```
/// use slideforge::deck::datauri::decode;
///
/// let uri = decode("data:text/plain;base64,aGk=").unwrap();
/// assert_eq!(uri.mime, "text/plain");
/// assert_eq!(uri.data, b"hi");
/// ```
pub fn decode(uri: &str) -> Result<DataUri> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or(DataUriError::MissingPrefix)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUriError::NotBase64)?;

    let mut params = header.split(';');
    let mime = params.next().unwrap_or_default().trim().to_ascii_lowercase();
    if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(DataUriError::NotBase64);
    }

    // Generators occasionally wrap long payloads
    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let data = STANDARD.decode(payload)?;

    Ok(DataUri { mime, data })
}

/// Decode a `data:` URI holding a picture in a format PowerPoint can embed.
///
/// The format comes from the payload's magic bytes, not the declared type.
pub fn decode_image(uri: &str) -> Result<DecodedImage> {
    let DataUri { mime, data } = decode(uri)?;

    let format = ImageFormat::detect_from_bytes(&data).ok_or_else(|| {
        DataUriError::UnsupportedFormat(if mime.is_empty() { "unknown".to_string() } else { mime })
    })?;

    let (width, height) = ImageReader::new(Cursor::new(&data))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .into_dimensions()?;

    Ok(DecodedImage {
        format,
        data,
        width,
        height,
    })
}

/// Encode bytes as a base64 `data:` URI.
pub fn encode(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}
