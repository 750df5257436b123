/// Document properties (`docProps/core.xml` and `docProps/app.xml`).
use crate::common::xml::escape_text;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Application name written to `docProps/app.xml`.
pub const APPLICATION_NAME: &str = "SlideForge";

/// Descriptive properties of a presentation.
///
/// No timestamps are written, so a package depends only on its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub company: Option<String>,
}

impl DocumentProperties {
    /// Generate `docProps/core.xml`.
    pub(crate) fn core_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(768);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));

        if let Some(ref title) = self.title {
            write!(xml, "<dc:title>{}</dc:title>", escape_text(title))?;
        }
        if let Some(ref subject) = self.subject {
            write!(xml, "<dc:subject>{}</dc:subject>", escape_text(subject))?;
        }
        if let Some(ref author) = self.author {
            write!(xml, "<dc:creator>{}</dc:creator>", escape_text(author))?;
            write!(xml, "<cp:lastModifiedBy>{}</cp:lastModifiedBy>", escape_text(author))?;
        }
        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str("</cp:coreProperties>");

        Ok(xml)
    }

    /// Generate `docProps/app.xml`.
    pub(crate) fn app_xml(&self, slide_count: usize) -> Result<String> {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
        ));
        write!(xml, "<Application>{}</Application>", APPLICATION_NAME)?;
        xml.push_str("<PresentationFormat>On-screen Show (16:9)</PresentationFormat>");
        write!(xml, "<Slides>{}</Slides>", slide_count)?;
        if let Some(ref company) = self.company {
            write!(xml, "<Company>{}</Company>", escape_text(company))?;
        }
        xml.push_str("<AppVersion>16.0000</AppVersion>");
        xml.push_str("</Properties>");

        Ok(xml)
    }
}
