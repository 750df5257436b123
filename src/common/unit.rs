//! Unit conversion utilities.
//!
//! DrawingML positions everything in EMUs (English Metric Units). Slide layouts
//! are authored in inches or as a percentage of the slide, so [`Extent`] keeps
//! the authored value until the slide size is known.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Font size in hundredths of a point, the unit of `<a:rPr sz="..">`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

/// A length along one slide axis, either absolute or relative to that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Absolute length in inches
    Inches(f64),
    /// Percentage of the slide dimension along the same axis (0-100)
    Percent(f64),
}

impl Extent {
    /// Resolve to EMUs against the slide dimension of the same axis.
    ///
    /// ```
    /// use slideforge::common::unit::Extent;
    /// assert_eq!(Extent::Percent(90.0).to_emu(9_144_000), 8_229_600);
    /// assert_eq!(Extent::Inches(0.5).to_emu(9_144_000), 457_200);
    /// ```
    #[inline]
    pub fn to_emu(self, axis_emu: i64) -> i64 {
        match self {
            Self::Inches(v) => inches_to_emu(v),
            Self::Percent(p) => (axis_emu as f64 * p / 100.0).round() as i64,
        }
    }
}

impl From<f64> for Extent {
    fn from(inches: f64) -> Self {
        Self::Inches(inches)
    }
}

/// Shorthand for [`Extent::Percent`].
#[inline]
pub const fn pct(value: f64) -> Extent {
    Extent::Percent(value)
}
