//! Mutable presentation writer components for PPTX.

pub mod master;
pub mod pres;
pub mod props;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;

// Re-export main types
pub use master::{FALLBACK_MASTER_NAME, SlideMaster};
pub use pres::MutablePresentation;
pub use props::DocumentProperties;
pub use shape::{MutableShape, SLIDE_NUMBER_TOKEN, ShapeContainer, ShapeTree};
pub use slide::MutableSlide;
