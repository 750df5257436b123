//! Slide decks: content model, templates, generation seams and export.
//!
//! A [`PresentationDocument`] holds the title slide and body slides. A
//! [`Template`] supplies colors and slide masters. [`export_document`] lays
//! the content out on the template's masters and serializes it to `.pptx`.
//!
//! # Example
//!
//! ```rust,no_run
//! use slideforge::deck::{AuthorDetails, BodySlide, PresentationDocument, SlideContent};
//! use slideforge::deck::{export_document, find_template};
//!
//! let doc = PresentationDocument::new(
//!     SlideContent { title: "Climate Policy".into(), subtitle: "2024 Review".into() },
//!     vec![BodySlide::new("Intro", "Line one\nLine two")],
//! );
//! let author = AuthorDetails::new("Jane", "Acme U", "2024-05-01");
//! let template = find_template("Corporate").unwrap();
//!
//! let artifact = export_document(&doc, template, &author)?;
//! artifact.save_to("out")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod datauri;
pub mod error;
pub mod export;
pub mod generate;
pub mod layout;
pub mod model;
pub mod template;

pub use error::{ExportError, Result};
pub use export::{
    ExportArtifact, ExportOptions, build_presentation, export_document, export_to_dir,
    file_name_for,
};
pub use generate::{
    ContentGenerator, GenerationError, GenerationRequest, ImageGenerator, ValidationError,
    generate_document, populate_images,
};
pub use model::{AuthorDetails, BodySlide, PresentationDocument, SlideContent};
pub use template::{
    LayoutOffsets, MasterNames, Template, TemplateColors, default_template, find_template,
    list_templates, resolve_layout_offsets, resolve_master_names,
};
