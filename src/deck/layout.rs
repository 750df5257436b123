//! Slide geometry authored in inches or percent of the slide.

use crate::common::unit::{Extent, pct};
use crate::ooxml::pptx::{Frame, MutablePresentation};

/// A box whose coordinates resolve against the slide size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: Extent,
    pub y: Extent,
    pub w: Extent,
    pub h: Extent,
}

impl Placement {
    pub const fn new(x: Extent, y: Extent, w: Extent, h: Extent) -> Self {
        Self { x, y, w, h }
    }

    /// All four coordinates in inches.
    pub const fn inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(
            Extent::Inches(x),
            Extent::Inches(y),
            Extent::Inches(w),
            Extent::Inches(h),
        )
    }

    pub const fn with_x(self, x: f64) -> Self {
        Self {
            x: Extent::Inches(x),
            ..self
        }
    }

    pub const fn with_width(self, w: Extent) -> Self {
        Self { w, ..self }
    }

    /// Resolve against a slide of the given size in EMUs.
    pub fn frame(&self, slide_width: i64, slide_height: i64) -> Frame {
        Frame::new(
            self.x.to_emu(slide_width),
            self.y.to_emu(slide_height),
            self.w.to_emu(slide_width),
            self.h.to_emu(slide_height),
        )
    }

    /// Resolve against the slide size of `pres`.
    pub fn frame_in(&self, pres: &MutablePresentation) -> Frame {
        self.frame(pres.slide_width(), pres.slide_height())
    }
}

/// Fixed text and picture boxes of exported slides.
pub mod slots {
    use super::*;

    pub const TITLE: Placement = Placement::new(Extent::Inches(0.5), Extent::Inches(1.5), pct(90.0), Extent::Inches(1.0));
    pub const SUBTITLE: Placement = Placement::new(Extent::Inches(0.5), Extent::Inches(2.6), pct(90.0), Extent::Inches(0.75));
    pub const BYLINE: Placement = Placement::new(Extent::Inches(0.5), Extent::Inches(4.0), pct(90.0), Extent::Inches(0.5));

    /// Body heading; x comes from the template's layout offsets.
    pub const HEADING: Placement = Placement::new(Extent::Inches(0.5), Extent::Inches(1.0), pct(90.0), Extent::Inches(0.75));
    /// Body content; x comes from the template, width depends on the image.
    pub const CONTENT: Placement = Placement::new(Extent::Inches(0.5), Extent::Inches(2.0), pct(90.0), Extent::Inches(3.0));
    pub const CONTENT_WIDTH_FULL: Extent = pct(90.0);
    pub const CONTENT_WIDTH_BESIDE_IMAGE: Extent = pct(45.0);
    /// Bounding box of the picture; x comes from the template.
    pub const IMAGE: Placement = Placement::inches(5.0, 2.0, 4.5, 2.53);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;

    #[test]
    fn test_percent_width_resolves_against_slide() {
        let frame = slots::TITLE.frame(inches_to_emu(10.0), inches_to_emu(5.625));
        assert_eq!(frame.x, inches_to_emu(0.5));
        assert_eq!(frame.width, inches_to_emu(9.0));
        assert_eq!(frame.height, inches_to_emu(1.0));
    }

    #[test]
    fn test_overrides() {
        let placement = slots::CONTENT
            .with_x(0.6)
            .with_width(slots::CONTENT_WIDTH_BESIDE_IMAGE);
        let frame = placement.frame(inches_to_emu(10.0), inches_to_emu(5.625));
        assert_eq!(frame.x, inches_to_emu(0.6));
        assert_eq!(frame.width, inches_to_emu(4.5));
    }
}
