//! Package-level parts of a new presentation.
//!
//! Provides the slide master, theme and property parts that every written
//! package carries. These contain the bare minimum structure PowerPoint
//! requires; all visible styling lives on the named layouts.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::writer::shape::ShapeTree;
use std::fmt::Write as FmtWrite;

/// ID of the single slide master in `sldMasterIdLst`.
pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Colors that seed the theme's color scheme (hex RGB).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Slide background (`lt1`)
    pub background: String,
    /// Body text (`dk1`)
    pub text: String,
    /// Accent color (`accent1`, `dk2`)
    pub primary: String,
    /// Secondary text (`accent2`)
    pub muted: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "FFFFFF".into(),
            text: "000000".into(),
            primary: "4472C4".into(),
            muted: "7F7F7F".into(),
        }
    }
}

/// Generate the theme part from a color set.
pub fn theme_xml(colors: &ThemeColors) -> Result<String> {
    let mut xml = String::with_capacity(3072);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<a:theme xmlns:a="{}" name="SlideForge">"#, namespace::DML_MAIN)?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="SlideForge">"#);
    let scheme: [(&str, &str); 12] = [
        ("dk1", colors.text.as_str()),
        ("lt1", colors.background.as_str()),
        ("dk2", colors.primary.as_str()),
        ("lt2", "E7E6E6"),
        ("accent1", colors.primary.as_str()),
        ("accent2", colors.muted.as_str()),
        ("accent3", "A5A5A5"),
        ("accent4", "FFC000"),
        ("accent5", "5B9BD5"),
        ("accent6", "70AD47"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ];
    for (slot, color) in scheme {
        write!(
            xml,
            r#"<a:{slot}><a:srgbClr val="{}"/></a:{slot}>"#,
            escape_xml(color)
        )?;
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="SlideForge">"#);
    for font in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{font}><a:latin typeface="Arial"/><a:ea typeface=""/><a:cs typeface=""/></a:{font}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    const PH_FILL: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="SlideForge">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{}">{}</a:ln>"#, width, PH_FILL)?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");

    Ok(xml)
}

fn text_style(xml: &mut String, tag: &str, size: u32, font: &str) -> Result<()> {
    write!(
        xml,
        concat!(
            r#"<p:{tag}><a:lvl1pPr><a:defRPr sz="{size}" kern="1200">"#,
            r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
            r#"<a:latin typeface="+{font}-lt"/><a:ea typeface="+{font}-ea"/><a:cs typeface="+{font}-cs"/>"#,
            r#"</a:defRPr></a:lvl1pPr></p:{tag}>"#
        ),
        tag = tag,
        size = size,
        font = font
    )?;
    Ok(())
}

/// Generate the slide master part.
///
/// # Arguments
/// * `layout_rel_ids` - Relationship IDs from the master to its layouts, in layout order
pub fn slide_master_xml(layout_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    ShapeTree::new().to_xml(&mut xml, &[])?;
    xml.push_str("</p:cSld>");

    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    for (index, rel_id) in layout_rel_ids.iter().enumerate() {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID + 1 + index as u32,
            rel_id
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    text_style(&mut xml, "titleStyle", 4400, "mj")?;
    text_style(&mut xml, "bodyStyle", 2800, "mn")?;
    text_style(&mut xml, "otherStyle", 1800, "mn")?;
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// Generate `ppt/presProps.xml`.
pub fn pres_props_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )
}

/// Generate `ppt/viewProps.xml`.
pub fn view_props_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
        ),
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )
}

/// Generate `ppt/tableStyles.xml`.
pub fn table_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        namespace::DML_MAIN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_uses_colors() {
        let colors = ThemeColors {
            background: "1A1A1A".into(),
            text: "FFFFFF".into(),
            primary: "9F5779".into(),
            muted: "CCCCCC".into(),
        };
        let xml = theme_xml(&colors).unwrap();

        assert!(xml.contains(r#"<a:dk1><a:srgbClr val="FFFFFF"/></a:dk1>"#));
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="9F5779"/></a:accent1>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_master_lists_layouts() {
        let xml = slide_master_xml(&["rId1".into(), "rId2".into()]).unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#));
        assert!(xml.contains("<p:titleStyle>"));
    }

    #[test]
    fn test_table_styles_default_guid() {
        assert!(table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }
}
