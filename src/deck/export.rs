//! Deck serializer.
//!
//! Turns a [`PresentationDocument`] into a `.pptx` package styled by a
//! [`Template`]. The export is synchronous and owns its presentation; image
//! data is read from whatever `image_data_uri` values the document holds at
//! call time.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::deck::datauri;
use crate::deck::error::{ExportError, Result};
use crate::deck::layout::slots;
use crate::deck::model::{AuthorDetails, BodySlide, PresentationDocument, SlideContent};
use crate::deck::template::{Template, resolve_layout_offsets, resolve_master_names};
use crate::ooxml::pptx::{MutablePresentation, ShapeContainer, TextAlign};

/// Bullet character of body content paragraphs.
pub const BULLET: char = '\u{2022}';

/// Where and how exported files are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Replace an existing file of the same name
    pub overwrite: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            overwrite: false,
        }
    }
}

/// A serialized presentation and its suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir`, creating it if needed.
    ///
    /// Returns the path of the written file.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        self.write_file(dir.as_ref(), true)
    }

    fn write_file(&self, dir: &Path, overwrite: bool) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        if !overwrite && path.exists() {
            return Err(ExportError::AlreadyExists(path));
        }
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// File name of an exported deck: the title with spaces replaced by `_`.
///
/// Path separators are replaced too, so the name never leaves the output
/// directory.
///
/// ```
/// use slideforge::deck::export::file_name_for;
///
/// assert_eq!(file_name_for("Climate Policy"), "Climate_Policy.pptx");
/// assert_eq!(file_name_for(""), "Presentation.pptx");
/// ```
pub fn file_name_for(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "Presentation.pptx".to_string()
    } else {
        format!("{}.pptx", stem)
    }
}

/// Lay out `content` on a new presentation styled by `template`.
pub fn build_presentation(
    content: &PresentationDocument,
    template: &Template,
    author: &AuthorDetails,
) -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();

    let props = pres.properties_mut();
    props.title = Some(content.title_slide.title.clone());
    props.subject = Some(content.title_slide.subtitle.clone());
    props.author = Some(author.username.clone());
    props.company = Some(author.institution.clone());

    pres.set_theme(template.colors().theme());
    template.build_masters(&mut pres);

    let masters = resolve_master_names(template);
    add_title_slide(&mut pres, masters.title, template, &content.title_slide, author);

    for (index, body) in content.body_slides.iter().enumerate() {
        // Slide numbers are 1-based and the title slide comes first
        add_body_slide(&mut pres, masters.body, template, body, index + 2)?;
    }

    Ok(pres)
}

fn add_title_slide(
    pres: &mut MutablePresentation,
    master: &str,
    template: &Template,
    title: &SlideContent,
    author: &AuthorDetails,
) {
    let colors = template.colors();
    let title_frame = slots::TITLE.frame_in(pres);
    let subtitle_frame = slots::SUBTITLE.frame_in(pres);
    let byline_frame = slots::BYLINE.frame_in(pres);

    let slide = pres.add_slide(master);
    slide
        .add_text_box(&title.title, title_frame)
        .font_size(44.0)
        .bold(true)
        .color(colors.text)
        .align(TextAlign::Center);
    slide
        .add_text_box(&title.subtitle, subtitle_frame)
        .font_size(24.0)
        .color(colors.muted)
        .align(TextAlign::Center);
    slide
        .add_text_box(&author.byline(), byline_frame)
        .font_size(14.0)
        .color(colors.muted)
        .align(TextAlign::Center);

    debug!(slide = 1, master, "laid out title slide");
}

fn add_body_slide(
    pres: &mut MutablePresentation,
    master: &str,
    template: &Template,
    body: &BodySlide,
    slide_number: usize,
) -> Result<()> {
    let colors = template.colors();
    let offsets = resolve_layout_offsets(template);

    let image = body
        .image()
        .map(datauri::decode_image)
        .transpose()
        .map_err(|source| ExportError::Image {
            slide: slide_number,
            source,
        })?;

    let content_width = if image.is_some() {
        slots::CONTENT_WIDTH_BESIDE_IMAGE
    } else {
        slots::CONTENT_WIDTH_FULL
    };
    let heading_frame = slots::HEADING.with_x(offsets.content_x).frame_in(pres);
    let content_frame = slots::CONTENT
        .with_x(offsets.content_x)
        .with_width(content_width)
        .frame_in(pres);
    let image_box = slots::IMAGE.with_x(offsets.image_x).frame_in(pres);

    let slide = pres.add_slide(master);
    slide
        .add_text_box(&body.heading, heading_frame)
        .font_size(28.0)
        .bold(true)
        .color(colors.primary);
    slide
        .add_text_box(&body.content, content_frame)
        .font_size(16.0)
        .color(colors.text)
        .bullet(BULLET);

    let has_image = image.is_some();
    if let Some(image) = image {
        let frame = image_box.contain(image.width, image.height);
        slide.add_picture(image.data, image.format, frame, &body.heading);
    }

    debug!(
        slide = slide_number,
        master,
        has_image,
        reserves_image_space = body.reserves_image_space(),
        "laid out body slide"
    );
    Ok(())
}

/// Serialize `content` styled by `template` into a `.pptx` artifact.
pub fn export_document(
    content: &PresentationDocument,
    template: &Template,
    author: &AuthorDetails,
) -> Result<ExportArtifact> {
    let pres = build_presentation(content, template, author)?;
    let bytes = pres.to_bytes()?;
    let file_name = file_name_for(&content.title_slide.title);

    info!(
        file = %file_name,
        template = template.name(),
        slides = content.slide_count(),
        bytes = bytes.len(),
        "exported presentation"
    );

    Ok(ExportArtifact { file_name, bytes })
}

/// Export and write the file according to `options`.
pub fn export_to_dir(
    content: &PresentationDocument,
    template: &Template,
    author: &AuthorDetails,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let artifact = export_document(content, template, author)?;
    let path = artifact.write_file(&options.out_dir, options.overwrite)?;
    info!(path = %path.display(), "saved presentation");
    Ok(path)
}
