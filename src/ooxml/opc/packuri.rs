//! Part names within an OPC package.

use std::fmt;

use crate::ooxml::opc::error::{OpcError, Result};

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// An absolute part name such as `/ppt/slides/slide1.xml`.
///
/// Part names start with `/`, use `/` as the only separator and never contain
/// empty segments. Ordering is plain string ordering, which is also the order
/// parts are written to the archive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackURI(String);

impl PackURI {
    /// Validate and wrap a part name.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        let valid = uri == PACKAGE_URI
            || (uri.starts_with('/')
                && !uri.ends_with('/')
                && !uri.contains("//")
                && !uri.contains('\\'));
        if !valid {
            return Err(OpcError::InvalidPackUri(uri));
        }
        Ok(Self(uri))
    }

    /// Directory of the part: `/ppt/slides` for `/ppt/slides/slide1.xml`.
    ///
    /// Top-level parts and the package itself live in `/`.
    pub fn base_uri(&self) -> &str {
        match self.0.rfind('/') {
            Some(0) | None => PACKAGE_URI,
            Some(pos) => &self.0[..pos],
        }
    }

    /// Last segment, empty for the package itself.
    pub fn filename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Extension without the dot, empty when there is none.
    pub fn ext(&self) -> &str {
        self.filename().rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default()
    }

    /// ZIP member name: the part name without its leading slash.
    pub fn membername(&self) -> &str {
        &self.0[1..]
    }

    /// Reference to this part relative to the directory `base_uri`.
    ///
    /// ```
    /// use slideforge::ooxml::opc::PackURI;
    ///
    /// let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
    /// assert_eq!(layout.relative_ref("/ppt/slides"), "../slideLayouts/slideLayout1.xml");
    /// ```
    pub fn relative_ref(&self, base_uri: &str) -> String {
        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.0.split('/').filter(|s| !s.is_empty()).collect();

        let shared = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let mut segments = vec![".."; from.len() - shared];
        segments.extend_from_slice(&to[shared..]);
        segments.join("/")
    }

    /// Part name of the relationships part belonging to this part.
    ///
    /// `/ppt/slides/slide1.xml` maps to `/ppt/slides/_rels/slide1.xml.rels`
    /// and the package itself to `/_rels/.rels`.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base = self.base_uri().trim_end_matches('/');
        Self::new(format!("{}/_rels/{}.rels", base, self.filename()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
