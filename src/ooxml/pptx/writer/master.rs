/// Named slide masters.
///
/// Every named master becomes one slide layout under the package's single
/// slide master. Slides pick a master by name and inherit its background
/// and decorative shapes.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::shape::{ShapeContainer, ShapeTree};

/// Name of the built-in layout used when a slide asks for an unknown master.
pub const FALLBACK_MASTER_NAME: &str = "BLANK";

/// A named slide master: background fill plus decorative shapes.
#[derive(Debug, Clone)]
pub struct SlideMaster {
    name: String,
    background: Option<String>,
    shapes: ShapeTree,
}

impl SlideMaster {
    /// Create an empty master with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: None,
            shapes: ShapeTree::new(),
        }
    }

    /// The built-in blank master: no background, no shapes.
    pub fn blank() -> Self {
        Self::new(FALLBACK_MASTER_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a solid background color (hex RGB).
    pub fn set_background(&mut self, color: &str) -> &mut Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn shapes(&self) -> &ShapeTree {
        &self.shapes
    }

    /// Generate the slideLayout XML for this master.
    pub(crate) fn to_layout_xml(&self, image_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" preserve="1" userDrawn="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        write!(xml, r#"<p:cSld name="{}">"#, escape_xml(&self.name))?;

        // Background must come before spTree
        if let Some(ref color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                escape_xml(color)
            )?;
        }

        self.shapes.to_xml(&mut xml, image_rel_ids)?;

        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sldLayout>");

        Ok(xml)
    }
}

impl ShapeContainer for SlideMaster {
    fn shape_tree_mut(&mut self) -> &mut ShapeTree {
        &mut self.shapes
    }
}
