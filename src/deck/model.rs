//! Slide content model.
//!
//! The JSON shape (camelCase field names) matches what the content
//! generator returns, so a generated deck deserializes directly.
//!
//! Edits are copy-on-write: every `with_*` method returns a new document in
//! which exactly one element was replaced. Index-based edits return `None`
//! when the index is out of range.

use serde::{Deserialize, Serialize};

/// Title slide content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    pub title: String,
    pub subtitle: String,
}

/// One body slide: heading, bulleted content and an optional image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySlide {
    pub heading: String,
    /// Newline-separated lines, one bullet each
    pub content: String,
    /// Prompt for the image generator, set when content is generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// `data:` URI of the generated image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_generating_image: bool,
}

impl BodySlide {
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(prompt.into());
        self
    }

    pub fn with_image_data_uri(mut self, data_uri: impl Into<String>) -> Self {
        self.image_data_uri = Some(data_uri.into());
        self
    }

    /// The image `data:` URI, if one is set and not blank.
    pub fn image(&self) -> Option<&str> {
        self.image_data_uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
    }

    /// Whether the slide is exported with a picture.
    ///
    /// Only an actual image counts; a prompt without a generated image, or
    /// an empty URI, exports as full-width text.
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }

    /// Whether an editor should reserve space for an image.
    #[inline]
    pub fn reserves_image_space(&self) -> bool {
        self.image_prompt.is_some()
    }
}

/// A complete deck: one title slide followed by ordered body slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationDocument {
    pub title_slide: SlideContent,
    #[serde(default)]
    pub body_slides: Vec<BodySlide>,
}

impl PresentationDocument {
    pub fn new(title_slide: SlideContent, body_slides: Vec<BodySlide>) -> Self {
        Self {
            title_slide,
            body_slides,
        }
    }

    /// Parse a deck from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of slides in the exported document (title slide included).
    pub fn slide_count(&self) -> usize {
        1 + self.body_slides.len()
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title_slide = SlideContent {
            title: title.into(),
            ..self.title_slide.clone()
        };
        next
    }

    pub fn with_subtitle(&self, subtitle: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title_slide = SlideContent {
            subtitle: subtitle.into(),
            ..self.title_slide.clone()
        };
        next
    }

    /// Replace body slide `index` with the result of `edit`.
    fn with_body_slide(&self, index: usize, edit: impl FnOnce(&BodySlide) -> BodySlide) -> Option<Self> {
        let current = self.body_slides.get(index)?;
        let replacement = edit(current);
        let mut next = self.clone();
        next.body_slides[index] = replacement;
        Some(next)
    }

    pub fn with_body_heading(&self, index: usize, heading: impl Into<String>) -> Option<Self> {
        let heading = heading.into();
        self.with_body_slide(index, |slide| BodySlide {
            heading,
            ..slide.clone()
        })
    }

    pub fn with_body_content(&self, index: usize, content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        self.with_body_slide(index, |slide| BodySlide {
            content,
            ..slide.clone()
        })
    }

    /// Store a generated image on slide `index` and clear its generating flag.
    pub fn with_image(&self, index: usize, data_uri: impl Into<String>) -> Option<Self> {
        let data_uri = data_uri.into();
        self.with_body_slide(index, |slide| BodySlide {
            image_data_uri: Some(data_uri),
            is_generating_image: false,
            ..slide.clone()
        })
    }

    pub fn mark_generating(&self, index: usize, generating: bool) -> Option<Self> {
        self.with_body_slide(index, |slide| BodySlide {
            is_generating_image: generating,
            ..slide.clone()
        })
    }
}

/// Author details printed on the title slide and stored in document properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetails {
    pub username: String,
    pub institution: String,
    pub date: String,
}

impl AuthorDetails {
    pub fn new(
        username: impl Into<String>,
        institution: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            institution: institution.into(),
            date: date.into(),
        }
    }

    /// Title slide byline: `By {username}, {institution}` then the date.
    pub fn byline(&self) -> String {
        format!("By {}, {}\n{}", self.username, self.institution, self.date)
    }
}
