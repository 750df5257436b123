/// Shape types and implementation for PPTX presentations.
use crate::common::unit::{pt_to_centipoints, pt_to_emu};
use crate::common::xml::{escape_text, escape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{Frame, ImageFormat, TextAlign, TextFormat, VerticalAnchor};

/// Token in text box content that renders as the current slide number.
pub const SLIDE_NUMBER_TOKEN: &str = "{slideNumber}";

/// Fixed field id for slide number fields.
const SLIDE_NUMBER_FIELD_ID: &str = "{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}";

/// Bullet indent in EMUs (0.3125 in).
const BULLET_INDENT: i64 = 285_750;

/// A shape on a slide or slide master (text box, picture, etc.).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within its shape tree
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        frame: Frame,
        format: TextFormat,
    },
    Rectangle {
        frame: Frame,
        fill_color: Option<String>,
    },
    Line {
        frame: Frame,
        color: String,
        weight_pt: f64,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
        description: String,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, text: String, frame: Frame) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                text,
                frame,
                format: TextFormat::default(),
            },
        }
    }

    pub(crate) fn new_rectangle(shape_id: u32, frame: Frame, fill_color: Option<String>) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle { frame, fill_color },
        }
    }

    pub(crate) fn new_line(shape_id: u32, frame: Frame, color: String, weight_pt: f64) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Line {
                frame,
                color,
                weight_pt,
            },
        }
    }

    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Picture {
                data,
                format,
                frame,
                description,
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the position and size of this shape.
    pub fn frame(&self) -> Frame {
        match &self.shape_type {
            ShapeType::TextBox { frame, .. }
            | ShapeType::Rectangle { frame, .. }
            | ShapeType::Line { frame, .. }
            | ShapeType::Picture { frame, .. } => *frame,
        }
    }

    /// Get the text if this shape is a text box.
    pub fn text(&self) -> Option<&str> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Get the text formatting if this shape is a text box.
    pub fn text_format(&self) -> Option<&TextFormat> {
        match &self.shape_type {
            ShapeType::TextBox { format, .. } => Some(format),
            _ => None,
        }
    }

    /// Check if this shape is a picture.
    pub fn is_picture(&self) -> bool {
        matches!(self.shape_type, ShapeType::Picture { .. })
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    fn format_mut(&mut self) -> Option<&mut TextFormat> {
        match &mut self.shape_type {
            ShapeType::TextBox { format, .. } => Some(format),
            _ => None,
        }
    }

    /// Set text formatting for this shape (only for text boxes).
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        if let Some(f) = self.format_mut() {
            *f = format;
        }
        self
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.font = Some(font.to_string());
        }
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.size = Some(size);
        }
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.bold = Some(bold);
        }
        self
    }

    /// Builder method: set italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.italic = Some(italic);
        }
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: &str) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.color = Some(color.to_string());
        }
        self
    }

    /// Builder method: set paragraph alignment.
    pub fn align(&mut self, align: TextAlign) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.align = Some(align);
        }
        self
    }

    /// Builder method: set vertical anchor.
    pub fn valign(&mut self, valign: VerticalAnchor) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.valign = Some(valign);
        }
        self
    }

    /// Builder method: prefix every paragraph with a bullet character.
    pub fn bullet(&mut self, bullet: char) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.bullet = Some(bullet);
        }
        self
    }

    /// Builder method: render `{slideNumber}` as a live slide-number field.
    ///
    /// Off by default, so user text containing the token is kept verbatim.
    pub fn slide_number_field(&mut self, enabled: bool) -> &mut Self {
        if let Some(f) = self.format_mut() {
            f.slide_number_fields = enabled;
        }
        self
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their media part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                text,
                frame,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                write!(
                    xml,
                    r#"<a:bodyPr wrap="square" rtlCol="0" anchor="{}"><a:noAutofit/></a:bodyPr>"#,
                    format.valign.unwrap_or_default().as_attr()
                )?;
                xml.push_str("<a:lstStyle/>");
                for line in text.split('\n') {
                    write_paragraph(xml, line.trim_end_matches('\r'), format)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle { frame, fill_color } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                match fill_color {
                    Some(color) => write_solid_fill(xml, color)?,
                    None => xml.push_str("<a:noFill/>"),
                }
                xml.push_str("<a:ln><a:noFill/></a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Line {
                frame,
                color,
                weight_pt,
            } => {
                xml.push_str("<p:cxnSp>");
                xml.push_str("<p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Line {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str("<p:cNvCxnSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                write!(xml, r#"<a:ln w="{}">"#, pt_to_emu(*weight_pt))?;
                write_solid_fill(xml, color)?;
                xml.push_str("</a:ln>");
                xml.push_str("</p:spPr>");
                xml.push_str("</p:cxnSp>");
            },
            ShapeType::Picture {
                frame, description, ..
            } => {
                let rid = rel_id.ok_or_else(|| {
                    OoxmlError::Xml(format!(
                        "picture {} has no image relationship",
                        self.shape_id
                    ))
                })?;

                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id,
                    escape_text(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, frame: &Frame) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: &str) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        escape_xml(color)
    )?;
    Ok(())
}

/// Write run properties. `tag` is `a:rPr` for runs and fields, `a:endParaRPr` for empty paragraphs.
fn write_run_props(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(true) = format.bold {
        xml.push_str(r#" b="1""#);
    }
    if let Some(true) = format.italic {
        xml.push_str(r#" i="1""#);
    }
    if let Some(true) = format.underline {
        xml.push_str(r#" u="sng""#);
    }
    xml.push_str(r#" dirty="0">"#);

    // Fill precedes font elements in CT_TextCharacterProperties.
    if let Some(ref color) = format.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }

    write!(xml, "</{}>", tag)?;
    Ok(())
}

fn write_run(xml: &mut String, text: &str, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:r>");
    write_run_props(xml, "a:rPr", format)?;
    write!(xml, "<a:t>{}</a:t>", escape_text(text))?;
    xml.push_str("</a:r>");
    Ok(())
}

fn write_paragraph(xml: &mut String, line: &str, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:p>");

    xml.push_str("<a:pPr");
    if let Some(bullet) = format.bullet {
        write!(xml, r#" marL="{}" indent="-{}""#, BULLET_INDENT, BULLET_INDENT)?;
        write!(xml, r#" algn="{}">"#, format.align.unwrap_or_default().as_attr())?;
        let mut buf = [0u8; 4];
        write!(
            xml,
            r#"<a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
            escape_xml(bullet.encode_utf8(&mut buf))
        )?;
        xml.push_str("</a:pPr>");
    } else {
        write!(xml, r#" algn="{}">"#, format.align.unwrap_or_default().as_attr())?;
        xml.push_str("<a:buNone/></a:pPr>");
    }

    if line.is_empty() {
        write_run_props(xml, "a:endParaRPr", format)?;
        xml.push_str("</a:p>");
        return Ok(());
    }

    if !format.slide_number_fields {
        write_run(xml, line, format)?;
        xml.push_str("</a:p>");
        return Ok(());
    }

    let mut segments = line.split(SLIDE_NUMBER_TOKEN).peekable();
    while let Some(segment) = segments.next() {
        if !segment.is_empty() {
            write_run(xml, segment, format)?;
        }
        if segments.peek().is_some() {
            write!(
                xml,
                r#"<a:fld id="{}" type="slidenum">"#,
                SLIDE_NUMBER_FIELD_ID
            )?;
            write_run_props(xml, "a:rPr", format)?;
            xml.push_str("<a:t>\u{2039}#\u{203A}</a:t>");
            xml.push_str("</a:fld>");
        }
    }

    xml.push_str("</a:p>");
    Ok(())
}

/// An ordered list of shapes with IDs unique within one slide or layout.
#[derive(Debug, Clone, Default)]
pub struct ShapeTree {
    shapes: Vec<MutableShape>,
}

impl ShapeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs: 1 = group, 2+ = shapes
    fn next_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutableShape> {
        self.shapes.iter()
    }

    /// Image payloads of all pictures, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(MutableShape::get_image_data)
            .collect()
    }

    /// Write the `<p:spTree>` element.
    ///
    /// `image_rel_ids` holds one relationship ID per picture, in shape order.
    pub(crate) fn to_xml(&self, xml: &mut String, image_rel_ids: &[String]) -> Result<()> {
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            if shape.is_picture() {
                let rid = image_rel_ids.get(image_counter).map(String::as_str);
                image_counter += 1;
                shape.to_xml(xml, rid)?;
            } else {
                shape.to_xml(xml, None)?;
            }
        }

        xml.push_str("</p:spTree>");
        Ok(())
    }
}

/// Shape-adding operations shared by slides and slide masters.
pub trait ShapeContainer {
    fn shape_tree_mut(&mut self) -> &mut ShapeTree;

    /// Add a text box. Every `\n` starts a new paragraph.
    fn add_text_box(&mut self, text: &str, frame: Frame) -> &mut MutableShape {
        let tree = self.shape_tree_mut();
        let shape = MutableShape::new_text_box(tree.next_id(), text.to_string(), frame);
        tree.push(shape)
    }

    /// Add a rectangle, optionally filled with a solid hex RGB color.
    fn add_rectangle(&mut self, frame: Frame, fill_color: Option<&str>) -> &mut MutableShape {
        let tree = self.shape_tree_mut();
        let shape = MutableShape::new_rectangle(tree.next_id(), frame, fill_color.map(str::to_string));
        tree.push(shape)
    }

    /// Add a straight line from the frame's top-left to its bottom-right corner.
    fn add_line(&mut self, frame: Frame, color: &str, weight_pt: f64) -> &mut MutableShape {
        let tree = self.shape_tree_mut();
        let shape = MutableShape::new_line(tree.next_id(), frame, color.to_string(), weight_pt);
        tree.push(shape)
    }

    /// Add a picture. The image is stretched to the frame.
    fn add_picture(
        &mut self,
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
        description: &str,
    ) -> &mut MutableShape {
        let tree = self.shape_tree_mut();
        let shape = MutableShape::new_picture(tree.next_id(), data, format, frame, description.to_string());
        tree.push(shape)
    }
}
