//! Format types for PPTX presentations.

use crate::common::unit::inches_to_emu;
use crate::ooxml::opc::constants::content_type as ct;

/// Image format types supported by PPTX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// Get the MIME type for this image format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
            Self::Gif => ct::GIF,
            Self::Bmp => ct::BMP,
            Self::Tiff => ct::TIFF,
        }
    }

    /// Get the file extension for this image format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }

    /// Detect image format from bytes (magic number detection).
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // GIF: 47 49 46 38 (GIF8)
        if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Some(Self::Gif);
        }

        // BMP: 42 4D (BM)
        if bytes.starts_with(&[0x42, 0x4D]) {
            return Some(Self::Bmp);
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some(Self::Tiff);
        }

        None
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Value of the `algn` attribute on `<a:pPr>`.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Value of the `anchor` attribute on `<a:bodyPr>`.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Text formatting properties for shapes.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
    /// Paragraph alignment
    pub align: Option<TextAlign>,
    /// Vertical anchor
    pub valign: Option<VerticalAnchor>,
    /// Bullet character prefixed to every paragraph
    pub bullet: Option<char>,
    /// Write `{slideNumber}` as a slide-number field instead of literal text
    pub slide_number_fields: bool,
}

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a frame from coordinates in inches.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(x),
            inches_to_emu(y),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    /// Largest frame with the aspect ratio of a `px_width` x `px_height`
    /// image that fits inside this one, centered on both axes.
    ///
    /// Degenerate image sizes return this frame unchanged.
    pub fn contain(&self, px_width: u32, px_height: u32) -> Frame {
        if px_width == 0 || px_height == 0 || self.width <= 0 || self.height <= 0 {
            return *self;
        }

        let box_ratio = self.width as f64 / self.height as f64;
        let img_ratio = px_width as f64 / px_height as f64;

        let (width, height) = if img_ratio > box_ratio {
            (self.width, (self.width as f64 / img_ratio).round() as i64)
        } else {
            ((self.height as f64 * img_ratio).round() as i64, self.height)
        };

        Frame::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_formats() {
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0x89, b'P', b'N', b'G', 0x0D]),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::detect_from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::detect_from_bytes(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect_from_bytes(b"<svg"), None);
        assert_eq!(ImageFormat::detect_from_bytes(b"BM"), None);
    }

    #[test]
    fn test_contain_wide_image() {
        let frame = Frame::from_inches(5.0, 2.0, 4.5, 2.53);
        let fitted = frame.contain(1600, 400);

        assert_eq!(fitted.width, frame.width);
        assert_eq!(fitted.height, (frame.width as f64 / 4.0).round() as i64);
        assert_eq!(fitted.x, frame.x);
        assert!(fitted.y > frame.y);
        assert!(fitted.y + fitted.height <= frame.y + frame.height);
    }

    #[test]
    fn test_contain_tall_image() {
        let frame = Frame::from_inches(5.0, 2.0, 4.5, 2.53);
        let fitted = frame.contain(300, 600);

        assert_eq!(fitted.height, frame.height);
        assert!(fitted.width < frame.width);
        assert_eq!(fitted.y, frame.y);
        assert_eq!(fitted.x - frame.x, (frame.width - fitted.width) / 2);
    }

    #[test]
    fn test_contain_degenerate() {
        let frame = Frame::from_inches(0.0, 0.0, 1.0, 1.0);
        assert_eq!(frame.contain(0, 100), frame);
    }
}
