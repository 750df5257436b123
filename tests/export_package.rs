//! End-to-end export checks against the produced `.pptx` archive.

mod common;

use common::{Pptx, assert_well_formed, author, climate_policy, pixel_png, pixel_png_uri};
use proptest::prelude::*;
use slideforge::deck::{
    BodySlide, ExportError, PresentationDocument, SlideContent, Template, TemplateColors,
    default_template, export_document, find_template, list_templates,
};

#[test]
fn test_climate_policy_example() {
    let artifact = export_document(&climate_policy(), default_template(), &author()).unwrap();
    assert_eq!(artifact.file_name, "Climate_Policy.pptx");

    let mut pptx = Pptx::open(&artifact.bytes);
    assert_eq!(pptx.slide_count(), 2);

    assert_eq!(pptx.slide_layout_name(1), "TITLE_SLIDE");
    let title = pptx.slide(1);
    assert!(title.contains("<a:t>Climate Policy</a:t>"));
    assert!(title.contains("<a:t>2024 Review</a:t>"));
    assert!(title.contains("<a:t>By Jane Doe, Acme University</a:t>"));
    assert!(title.contains("<a:t>2024-05-01</a:t>"));
    assert_eq!(title.matches(r#"algn="ctr""#).count(), 4);

    assert_eq!(pptx.slide_layout_name(2), "BODY_SLIDE");
    let body = pptx.slide(2);
    assert!(body.contains("<a:t>Intro</a:t>"));
    assert!(body.contains("<a:t>Line one</a:t>"));
    assert!(body.contains("<a:t>Line two</a:t>"));
    assert_eq!(body.matches("<a:buChar char=\"\u{2022}\"/>").count(), 2);
    // Full-width content: 90% of 10in
    assert!(body.contains(r#"<a:ext cx="8229600" cy="2743200"/>"#));
    assert!(!body.contains("<p:pic>"));
}

#[test]
fn test_all_xml_parts_are_well_formed() {
    let doc = PresentationDocument::new(
        SlideContent {
            title: "R&D <2030> \"plans\"".into(),
            subtitle: "Ünïcödé \u{1F30D}".into(),
        },
        vec![
            BodySlide::new("A & B", "x < y\n\ny > z").with_image_data_uri(pixel_png_uri()),
            BodySlide::new("Plain", "text"),
        ],
    );

    for template in list_templates() {
        let artifact = export_document(&doc, template, &author()).unwrap();
        let mut pptx = Pptx::open(&artifact.bytes);
        for name in pptx.names() {
            if name.ends_with(".xml") || name.ends_with(".rels") {
                let xml = pptx.text(&name);
                assert_well_formed(&name, &xml);
            }
        }
    }
}

#[test]
fn test_package_structure() {
    let artifact = export_document(&climate_policy(), default_template(), &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/theme/theme1.xml",
        "ppt/presProps.xml",
        "ppt/viewProps.xml",
        "ppt/tableStyles.xml",
        // Two template masters plus the blank fallback
        "ppt/slideLayouts/slideLayout3.xml",
    ] {
        assert!(pptx.has(part), "missing {}", part);
    }
    assert_eq!(pptx.names()[0], "[Content_Types].xml");

    let core = pptx.text("docProps/core.xml");
    assert!(core.contains("<dc:title>Climate Policy</dc:title>"));
    assert!(core.contains("<dc:subject>2024 Review</dc:subject>"));
    assert!(core.contains("<dc:creator>Jane Doe</dc:creator>"));

    let app = pptx.text("docProps/app.xml");
    assert!(app.contains("<Company>Acme University</Company>"));
    assert!(app.contains("<Slides>2</Slides>"));

    let theme = pptx.text("ppt/theme/theme1.xml");
    assert!(theme.contains("79579F"));
}

#[test]
fn test_image_slide_has_picture_and_narrow_text() {
    let doc = PresentationDocument::new(SlideContent::default(), vec![
        BodySlide::new("With image", "a").with_image_data_uri(pixel_png_uri()),
    ]);
    let artifact = export_document(&doc, default_template(), &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    let body = pptx.slide(2);
    assert!(body.contains("<p:pic>"));
    // 45% of 10in
    assert!(body.contains(r#"<a:ext cx="4114800" cy="2743200"/>"#));

    assert_eq!(pptx.bytes("ppt/media/image1.png"), pixel_png());
    let rels = pptx.text("ppt/slides/_rels/slide2.xml.rels");
    assert!(rels.contains("../media/image1.png"));
}

#[test]
fn test_prompt_without_image_is_full_width() {
    let doc = PresentationDocument::new(SlideContent::default(), vec![
        BodySlide::new("Pending", "a").with_image_prompt("a forest at dawn"),
    ]);
    let artifact = export_document(&doc, default_template(), &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    let body = pptx.slide(2);
    assert!(!body.contains("<p:pic>"));
    assert!(body.contains(r#"<a:ext cx="8229600" cy="2743200"/>"#));
    assert!(!pptx.names().iter().any(|n| n.starts_with("ppt/media/")));
}

#[test]
fn test_empty_body_slides() {
    let doc = PresentationDocument::new(
        SlideContent {
            title: "Solo".into(),
            subtitle: String::new(),
        },
        Vec::new(),
    );
    let artifact = export_document(&doc, default_template(), &author()).unwrap();
    assert_eq!(Pptx::open(&artifact.bytes).slide_count(), 1);
}

#[test]
fn test_unknown_template_uses_default_masters() {
    let template = Template::custom("Retro", TemplateColors {
        bg: "000000",
        text: "00FF00",
        primary: "FF00FF",
        muted: "888888",
    });
    let artifact = export_document(&climate_policy(), &template, &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    assert_eq!(pptx.slide_layout_name(1), "TITLE_SLIDE");
    assert_eq!(pptx.slide_layout_name(2), "BODY_SLIDE");
    assert!(pptx.slide(2).contains(r#"<a:srgbClr val="FF00FF"/>"#));
}

#[test]
fn test_template_masters_are_used() {
    let creative = find_template("Creative").unwrap();
    let artifact = export_document(&climate_policy(), creative, &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    assert_eq!(pptx.slide_layout_name(1), "TITLE_SLIDE_CREATIVE");
    assert_eq!(pptx.slide_layout_name(2), "BODY_SLIDE_CREATIVE");
}

#[test]
fn test_slide_number_field_in_layout() {
    let minimalist = find_template("Minimalist").unwrap();
    let artifact = export_document(&climate_policy(), minimalist, &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    let layout = pptx.text("ppt/slideLayouts/slideLayout2.xml");
    assert!(layout.contains(r#"type="slidenum""#));
    assert!(!layout.contains("{slideNumber}"));
}

#[test]
fn test_slide_number_token_in_user_text_is_literal() {
    let doc = PresentationDocument::new(SlideContent::default(), vec![
        BodySlide::new("Template {slideNumber}", "Use {slideNumber} here"),
    ]);
    for template in list_templates() {
        let artifact = export_document(&doc, template, &author()).unwrap();
        let body = Pptx::open(&artifact.bytes).slide(2);

        assert!(body.contains("<a:t>Template {slideNumber}</a:t>"), "{}", template.name());
        assert!(body.contains("<a:t>Use {slideNumber} here</a:t>"), "{}", template.name());
        assert!(!body.contains("slidenum"), "{}", template.name());
    }
}

#[test]
fn test_blank_image_uri_is_full_width() {
    let doc = PresentationDocument::from_json(
        r#"{
            "titleSlide": {"title": "T", "subtitle": "S"},
            "bodySlides": [{"heading": "Failed image", "content": "a", "imageDataUri": ""}]
        }"#,
    )
    .unwrap();
    let artifact = export_document(&doc, default_template(), &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    let body = pptx.slide(2);
    assert!(!body.contains("<p:pic>"));
    assert!(body.contains(r#"<a:ext cx="8229600" cy="2743200"/>"#));
    assert!(!pptx.names().iter().any(|n| n.starts_with("ppt/media/")));
}

#[test]
fn test_custom_template_named_like_registered_one() {
    let template = Template::custom("Creative", *default_template().colors());
    let artifact = export_document(&climate_policy(), &template, &author()).unwrap();
    let mut pptx = Pptx::open(&artifact.bytes);

    assert_eq!(pptx.slide_layout_name(1), "TITLE_SLIDE_CREATIVE");
    assert_eq!(pptx.slide_layout_name(2), "BODY_SLIDE_CREATIVE");
}

#[test]
fn test_undecodable_image_is_an_error() {
    let doc = PresentationDocument::new(SlideContent::default(), vec![
        BodySlide::new("Bad", "a").with_image_data_uri("data:image/png;base64,bm90IGFuIGltYWdl"),
    ]);
    let err = export_document(&doc, default_template(), &author()).unwrap_err();
    assert!(matches!(err, ExportError::Image { slide: 2, .. }));
}

#[test]
fn test_save_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = export_document(&climate_policy(), default_template(), &author()).unwrap();

    let path = artifact.save_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("Climate_Policy.pptx"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
}

fn body_slide_strategy() -> impl Strategy<Value = BodySlide> {
    ("[A-Za-z0-9 &<>]{0,20}", "[A-Za-z0-9 \n]{0,40}", any::<bool>()).prop_map(|(heading, content, image)| {
        let slide = BodySlide::new(heading, content);
        if image { slide.with_image_data_uri(pixel_png_uri()) } else { slide }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_slide_count_and_determinism(
        title in "[A-Za-z ]{0,20}",
        body in prop::collection::vec(body_slide_strategy(), 0..6),
        template_index in 0usize..4,
    ) {
        let doc = PresentationDocument::new(
            SlideContent { title, subtitle: "sub".into() },
            body,
        );
        let template = &list_templates()[template_index];

        let first = export_document(&doc, template, &author()).unwrap();
        let second = export_document(&doc, template, &author()).unwrap();
        prop_assert_eq!(&first.bytes, &second.bytes);

        let mut pptx = Pptx::open(&first.bytes);
        prop_assert_eq!(pptx.slide_count(), doc.slide_count());

        for (i, slide) in doc.body_slides.iter().enumerate() {
            if slide.heading.is_empty() {
                continue;
            }
            let escaped = slide.heading.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
            let expected = format!("<a:t>{}</a:t>", escaped);
            prop_assert!(pptx.slide(i + 2).contains(&expected));
        }
    }
}
