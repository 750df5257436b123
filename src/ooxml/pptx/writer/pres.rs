/// Presentation writer for PPTX.
use crate::common::unit::inches_to_emu;
use crate::ooxml::error::Result;
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::package::build_package;
use crate::ooxml::pptx::template::{SLIDE_MASTER_ID, ThemeColors};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::master::SlideMaster;
use super::props::DocumentProperties;
use super::slide::MutableSlide;

/// A mutable PowerPoint presentation for writing.
///
/// Holds named slide masters, slides, document properties and the theme
/// colors. Serialization is deterministic: the same presentation always
/// produces the same bytes.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Named masters in definition order
    pub(crate) masters: Vec<SlideMaster>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document properties
    properties: DocumentProperties,
    /// Theme colors
    theme: ThemeColors,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 5.625" (16:9 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            masters: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(5.625),
            properties: DocumentProperties::default(),
            theme: ThemeColors::default(),
        }
    }

    /// Register a named slide master.
    ///
    /// A master with the same name is replaced in place, keeping its position.
    pub fn define_master(&mut self, master: SlideMaster) {
        match self.masters.iter_mut().find(|m| m.name() == master.name()) {
            Some(existing) => *existing = master,
            None => self.masters.push(master),
        }
    }

    /// Get a master by name.
    pub fn master(&self, name: &str) -> Option<&SlideMaster> {
        self.masters.iter().find(|m| m.name() == name)
    }

    /// Get all registered masters in definition order.
    pub fn masters(&self) -> &[SlideMaster] {
        &self.masters
    }

    /// Position of a master among the layouts, if registered.
    pub(crate) fn layout_index(&self, name: &str) -> Option<usize> {
        self.masters.iter().position(|m| m.name() == name)
    }

    /// Add a new slide based on the named master.
    ///
    /// The master need not be registered yet; a slide whose master is still
    /// unknown at serialization time uses the blank layout.
    pub fn add_slide(&mut self, master_name: &str) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id, master_name));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get all slides in order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Get the document properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get mutable document properties.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Get the theme colors.
    pub fn theme(&self) -> &ThemeColors {
        &self.theme
    }

    /// Set the theme colors.
    pub fn set_theme(&mut self, theme: ThemeColors) {
        self.theme = theme;
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = build_package(self)?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = build_package(self)?;
        Ok(PackageWriter::write(path, &package)?)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::shape::ShapeContainer;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 5_143_500);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide("TITLE_SLIDE");
        assert_eq!(slide.slide_id(), 256);
        assert_eq!(pres.add_slide("BODY_SLIDE").slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_define_master_replaces_by_name() {
        let mut pres = MutablePresentation::new();
        pres.define_master(SlideMaster::new("TITLE_SLIDE"));
        pres.define_master(SlideMaster::new("BODY_SLIDE"));

        let mut replacement = SlideMaster::new("TITLE_SLIDE");
        replacement.set_background("FFFFFF");
        pres.define_master(replacement);

        assert_eq!(pres.masters().len(), 2);
        assert_eq!(pres.layout_index("TITLE_SLIDE"), Some(0));
        assert_eq!(pres.master("TITLE_SLIDE").unwrap().background(), Some("FFFFFF"));
        assert_eq!(pres.layout_index("MISSING"), None);
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = MutablePresentation::new();
        pres.add_slide("TITLE_SLIDE")
            .add_text_box("Test", Default::default());

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains("<p:presentation"));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
    }

    #[test]
    fn test_save_writes_serialized_bytes() {
        let mut pres = MutablePresentation::new();
        pres.add_slide("TITLE_SLIDE")
            .add_text_box("Saved", Default::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        pres.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), pres.to_bytes().unwrap());
    }
}
