//! SlideForge - presentation generator core
//!
//! This library turns slide deck content into PowerPoint (.pptx) files.
//!
//! # Features
//!
//! - **Deck model**: title slide plus ordered body slides, exchanged as camelCase JSON
//! - **Templates**: four built-in visual templates with their own slide masters
//! - **PPTX writer**: deterministic PresentationML packages with embedded pictures
//! - **Generation seams**: async traits for content and image generators
//!
//! # Example - Exporting a deck
//!
//! ```no_run
//! use slideforge::deck::{self, AuthorDetails, PresentationDocument};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = PresentationDocument::from_json(&std::fs::read_to_string("deck.json")?)?;
//! let author = AuthorDetails::new("Jane", "Acme U", "2024-05-01");
//! let template = deck::find_template("Minimalist").unwrap_or(deck::default_template());
//!
//! let artifact = deck::export_document(&doc, template, &author)?;
//! let path = artifact.save_to(".")?;
//! println!("Saved {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Low-level presentation writing
//!
//! ```no_run
//! use slideforge::ooxml::pptx::{Frame, MutablePresentation, ShapeContainer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! pres.add_slide("BLANK")
//!     .add_text_box("Hello", Frame::from_inches(1.0, 1.0, 8.0, 1.0))
//!     .font_size(32.0);
//! pres.save("hello.pptx")?;
//! # Ok(())
//! # }
//! ```

/// Shared helpers: units and XML escaping
pub mod common;

/// Slide deck model, templates and export
pub mod deck;

/// OOXML (Office Open XML) packaging and the PresentationML writer
pub mod ooxml;

// Re-export commonly used types for convenience
pub use deck::{
    AuthorDetails, BodySlide, ExportArtifact, ExportError, PresentationDocument, SlideContent,
    Template, export_document,
};
pub use ooxml::pptx::MutablePresentation;
