/// Open Packaging Conventions (OPC) writer.
///
/// This module assembles the structure defined by the Open Packaging
/// Conventions for Office Open XML documents:
///
/// - Package structure (parts, relationships)
/// - Content type management (`[Content_Types].xml`)
/// - ZIP-based physical packaging
///
/// Output is deterministic. Parts are emitted in partname order, relationship
/// ids are allocated sequentially and every ZIP entry carries the same fixed
/// timestamp, so identical packages serialize to identical bytes.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
