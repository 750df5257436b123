/// Assembly of a PowerPoint (.pptx) package from a mutable presentation.
///
/// Relationships are allocated before any part XML is generated so that
/// every XML reference carries its real relationship ID.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::master::{FALLBACK_MASTER_NAME, SlideMaster};
use crate::ooxml::pptx::writer::pres::MutablePresentation;
use crate::ooxml::pptx::writer::relmap::{RelationshipMapper, TreeOwner};
use crate::ooxml::pptx::writer::shape::ShapeTree;
use tracing::{debug, warn};

fn pack_uri(uri: impl Into<String>) -> Result<PackURI> {
    Ok(PackURI::new(uri)?)
}

/// Add one media part per picture of `tree` and relate them from `part`.
fn add_media(
    pkg: &mut OpcPackage,
    part: &mut Part,
    tree: &ShapeTree,
    owner: TreeOwner,
    media_count: &mut usize,
    mapper: &mut RelationshipMapper,
) -> Result<()> {
    for (data, format) in tree.collect_images() {
        *media_count += 1;
        let media_uri = pack_uri(format!("/ppt/media/image{}.{}", media_count, format.extension()))?;
        pkg.add_part(Part::new(media_uri.clone(), format.mime_type(), data))?;
        mapper.add_image(owner, part.relate_to(&media_uri, rt::IMAGE));
    }
    Ok(())
}

/// Build the OPC package for a presentation.
pub(crate) fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();
    let mut mapper = RelationshipMapper::new();
    let mut media_count = 0;

    // Main document and document properties
    let pres_uri = pack_uri("/ppt/presentation.xml")?;
    pkg.add_part(Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new()))?;
    pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);

    let core_uri = pack_uri("/docProps/core.xml")?;
    pkg.add_part(Part::new(core_uri.clone(), ct::OPC_CORE_PROPERTIES, pres.properties().core_xml()?))?;
    pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);

    let app_uri = pack_uri("/docProps/app.xml")?;
    pkg.add_part(Part::new(
        app_uri.clone(),
        ct::OFC_EXTENDED_PROPERTIES,
        pres.properties().app_xml(pres.slide_count())?,
    ))?;
    pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    // Slide master, theme and one layout per named master plus the blank fallback
    let master_uri = pack_uri("/ppt/slideMasters/slideMaster1.xml")?;
    let theme_uri = pack_uri("/ppt/theme/theme1.xml")?;
    let master_rel_id = pkg.relate_part(&pres_uri, &master_uri, rt::SLIDE_MASTER)?;

    let blank = SlideMaster::blank();
    let layouts: Vec<&SlideMaster> = pres.masters().iter().chain(std::iter::once(&blank)).collect();
    let fallback_index = layouts.len() - 1;
    let layout_uris = (1..=layouts.len())
        .map(|n| pack_uri(format!("/ppt/slideLayouts/slideLayout{}.xml", n)))
        .collect::<Result<Vec<_>>>()?;

    let mut master_part = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
    let layout_rel_ids: Vec<String> = layout_uris
        .iter()
        .map(|uri| master_part.relate_to(uri, rt::SLIDE_LAYOUT))
        .collect();
    master_part.relate_to(&theme_uri, rt::THEME);
    master_part.set_blob(template::slide_master_xml(&layout_rel_ids)?);
    pkg.add_part(master_part)?;

    for (index, (layout, uri)) in layouts.iter().zip(&layout_uris).enumerate() {
        let mut part = Part::new(uri.clone(), ct::PML_SLIDE_LAYOUT, Vec::new());
        part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let owner = TreeOwner::Layout(index);
        add_media(&mut pkg, &mut part, layout.shapes(), owner, &mut media_count, &mut mapper)?;
        part.set_blob(layout.to_layout_xml(mapper.image_ids(owner))?);
        pkg.add_part(part)?;
    }

    // Slides
    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
    for (index, slide) in pres.slides().iter().enumerate() {
        let layout_index = match pres.layout_index(slide.master_name()) {
            Some(layout_index) => layout_index,
            None if slide.master_name() == FALLBACK_MASTER_NAME => fallback_index,
            None => {
                warn!(
                    slide = index + 1,
                    master = slide.master_name(),
                    "slide master not registered, using blank layout"
                );
                fallback_index
            },
        };

        let slide_uri = pack_uri(format!("/ppt/slides/slide{}.xml", index + 1))?;
        let mut part = Part::new(slide_uri.clone(), ct::PML_SLIDE, Vec::new());
        part.relate_to(&layout_uris[layout_index], rt::SLIDE_LAYOUT);

        let owner = TreeOwner::Slide(index);
        add_media(&mut pkg, &mut part, slide.shapes(), owner, &mut media_count, &mut mapper)?;
        part.set_blob(slide.to_xml(mapper.image_ids(owner))?);
        pkg.add_part(part)?;

        slide_rel_ids.push(pkg.relate_part(&pres_uri, &slide_uri, rt::SLIDE)?);
    }

    // Presentation-level property parts
    let extra_parts = [
        ("/ppt/presProps.xml", ct::PML_PRES_PROPS, rt::PRES_PROPS, template::pres_props_xml()),
        ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::view_props_xml()),
        ("/ppt/theme/theme1.xml", ct::OFC_THEME, rt::THEME, template::theme_xml(pres.theme())?),
        ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, rt::TABLE_STYLES, template::table_styles_xml()),
    ];
    for (uri, content_type, reltype, xml) in extra_parts {
        let uri = pack_uri(uri)?;
        pkg.add_part(Part::new(uri.clone(), content_type, xml))?;
        pkg.relate_part(&pres_uri, &uri, reltype)?;
    }

    let pres_xml = pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?;
    pkg.get_part_mut(&pres_uri)?.set_blob(pres_xml);

    debug!(
        slides = pres.slide_count(),
        layouts = layouts.len(),
        media = media_count,
        parts = pkg.part_count(),
        "assembled presentation package"
    );

    Ok(pkg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::{Frame, ImageFormat};
    use crate::ooxml::pptx::writer::shape::ShapeContainer;

    fn blob<'a>(pkg: &'a OpcPackage, uri: &str) -> &'a str {
        std::str::from_utf8(pkg.get_part(&PackURI::new(uri).unwrap()).unwrap().blob()).unwrap()
    }

    #[test]
    fn test_package_parts() {
        let mut pres = MutablePresentation::new();
        pres.define_master(SlideMaster::new("TITLE_SLIDE"));
        pres.add_slide("TITLE_SLIDE");
        pres.add_slide("TITLE_SLIDE");

        let pkg = build_package(&pres).unwrap();
        let pres_xml = blob(&pkg, "/ppt/presentation.xml");
        assert!(pres_xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));

        // One named layout plus the blank fallback
        assert!(pkg.contains_part(&PackURI::new("/ppt/slideLayouts/slideLayout2.xml").unwrap()));
        assert!(!pkg.contains_part(&PackURI::new("/ppt/slideLayouts/slideLayout3.xml").unwrap()));
        assert!(blob(&pkg, "/ppt/slideLayouts/slideLayout2.xml").contains(r#"name="BLANK""#));
    }

    #[test]
    fn test_unknown_master_uses_blank_layout() {
        let mut pres = MutablePresentation::new();
        pres.define_master(SlideMaster::new("TITLE_SLIDE"));
        pres.add_slide("NOT_DEFINED");

        let pkg = build_package(&pres).unwrap();
        let slide = pkg.get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap()).unwrap();
        let layout = slide.rels().get("rId1").unwrap();
        assert_eq!(layout.target_ref(), "../slideLayouts/slideLayout2.xml");
    }

    #[test]
    fn test_picture_gets_media_part() {
        let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let mut pres = MutablePresentation::new();
        pres.add_slide("BLANK")
            .add_picture(png.clone(), ImageFormat::Png, Frame::default(), "");

        let pkg = build_package(&pres).unwrap();
        let media = pkg.get_part(&PackURI::new("/ppt/media/image1.png").unwrap()).unwrap();
        assert_eq!(media.blob(), png.as_slice());
        assert_eq!(media.content_type(), ct::PNG);

        let slide_xml = blob(&pkg, "/ppt/slides/slide1.xml");
        assert!(slide_xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }
}
