/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{ShapeContainer, ShapeTree};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256+)
    pub(crate) slide_id: u32,
    /// Name of the slide master this slide is based on
    pub(crate) master_name: String,
    /// Shapes on the slide
    pub(crate) shapes: ShapeTree,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, master_name: &str) -> Self {
        Self {
            slide_id,
            master_name: master_name.to_string(),
            shapes: ShapeTree::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the name of the master this slide uses.
    pub fn master_name(&self) -> &str {
        &self.master_name
    }

    /// Get the shapes on the slide.
    pub fn shapes(&self) -> &ShapeTree {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    ///
    /// # Arguments
    /// * `image_rel_ids` - Relationship IDs of the slide's pictures, in shape order
    pub(crate) fn to_xml(&self, image_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");
        self.shapes.to_xml(&mut xml, image_rel_ids)?;
        xml.push_str("</p:cSld>");

        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

impl ShapeContainer for MutableSlide {
    fn shape_tree_mut(&mut self) -> &mut ShapeTree {
        &mut self.shapes
    }
}
