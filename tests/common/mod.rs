//! Helpers for inspecting exported packages.

#![allow(dead_code)]

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use slideforge::deck::datauri;
use slideforge::deck::{AuthorDetails, BodySlide, PresentationDocument, SlideContent};

/// 1x1 PNG
pub const PIXEL_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn pixel_png_uri() -> String {
    format!("data:image/png;base64,{}", PIXEL_PNG_BASE64)
}

pub fn pixel_png() -> Vec<u8> {
    datauri::decode(&pixel_png_uri()).unwrap().data
}

pub fn author() -> AuthorDetails {
    AuthorDetails::new("Jane Doe", "Acme University", "2024-05-01")
}

/// The two-slide "Climate Policy" deck.
pub fn climate_policy() -> PresentationDocument {
    PresentationDocument::new(
        SlideContent {
            title: "Climate Policy".into(),
            subtitle: "2024 Review".into(),
        },
        vec![BodySlide::new("Intro", "Line one\nLine two")],
    )
}

/// An opened `.pptx` archive.
pub struct Pptx {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Pptx {
    pub fn open(bytes: &[u8]) -> Self {
        Self {
            archive: ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    pub fn bytes(&mut self, name: &str) -> Vec<u8> {
        let mut file = self.archive.by_name(name).unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).unwrap();
        buf
    }

    pub fn text(&mut self, name: &str) -> String {
        String::from_utf8(self.bytes(name)).unwrap()
    }

    pub fn slide_count(&self) -> usize {
        self.archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
            .count()
    }

    pub fn slide(&mut self, number: usize) -> String {
        self.text(&format!("ppt/slides/slide{}.xml", number))
    }

    /// Layout name of slide `number`, following its layout relationship.
    pub fn slide_layout_name(&mut self, number: usize) -> String {
        let rels = self.text(&format!("ppt/slides/_rels/slide{}.xml.rels", number));
        let target = between(&rels, "Target=\"../slideLayouts/", "\"");
        let layout = self.text(&format!("ppt/slideLayouts/{}", target));
        between(&layout, "<p:cSld name=\"", "\"").to_string()
    }
}

/// Text between the first `start` and the following `end`.
pub fn between<'a>(haystack: &'a str, start: &str, end: &str) -> &'a str {
    let from = haystack.find(start).unwrap() + start.len();
    let len = haystack[from..].find(end).unwrap();
    &haystack[from..from + len]
}

/// Parse `xml` to the end, panicking on the first well-formedness error.
pub fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(err) => panic!("{} is not well-formed at {}: {}", name, reader.buffer_position(), err),
        }
    }
}
