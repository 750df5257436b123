//! PowerPoint (.pptx) presentation writer.
//!
//! The architecture mirrors the PresentationML part structure:
//!
//! - `MutablePresentation`: slide size, document properties, theme colors
//! - `SlideMaster`: a named background plus decorative shapes, written as a slide layout
//! - `MutableSlide`: shapes placed on top of one named master
//! - `package`: assembly of all parts into an OPC package
//!
//! # Example
//!
//! ```rust,no_run
//! use slideforge::ooxml::pptx::{Frame, MutablePresentation, ShapeContainer, SlideMaster, TextAlign};
//!
//! let mut pres = MutablePresentation::new();
//!
//! let mut master = SlideMaster::new("TITLE_SLIDE");
//! master.set_background("F4F3F4");
//! master.add_rectangle(Frame::from_inches(0.0, 5.1, 10.0, 0.5), Some("79579F"));
//! pres.define_master(master);
//!
//! pres.add_slide("TITLE_SLIDE")
//!     .add_text_box("Quarterly Review", Frame::from_inches(0.5, 1.5, 9.0, 1.0))
//!     .font_size(44.0)
//!     .bold(true)
//!     .align(TextAlign::Center);
//!
//! pres.save("review.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub(crate) mod package;
pub mod template;
pub mod writer;

pub use format::{Frame, ImageFormat, TextAlign, TextFormat, VerticalAnchor};
pub use template::ThemeColors;
pub use writer::{
    DocumentProperties, FALLBACK_MASTER_NAME, MutablePresentation, MutableShape, MutableSlide,
    SLIDE_NUMBER_TOKEN, ShapeContainer, ShapeTree, SlideMaster,
};
