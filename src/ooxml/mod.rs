//! Office Open XML (OOXML) writer.
//!
//! This module produces PowerPoint (.pptx) packages. It is organized in two
//! layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): presentation, slide masters, slides and shapes
//!
//! # Example
//!
//! ```rust,no_run
//! use slideforge::ooxml::pptx::{Frame, MutablePresentation, ShapeContainer};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide("BLANK")
//!     .add_text_box("Hello", Frame::from_inches(0.5, 0.5, 9.0, 1.0))
//!     .font_size(32.0);
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
