//! Content and image generation seams.
//!
//! Generators are black boxes behind async traits. This module validates
//! requests and fans image generation out to one task per slide.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::deck::model::PresentationDocument;

pub const MIN_SLIDES: u32 = 1;
pub const MAX_SLIDES: u32 = 10;

/// Parameters for generating a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub username: String,
    pub institution: String,
    pub presentation_date: String,
    pub topic: String,
    /// Number of body slides
    pub slide_count: u32,
}

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// camelCase field name as in the JSON request
    pub field: &'static str,
    pub message: &'static str,
}

/// All field issues of a rejected request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Issue for `field`, if any.
    pub fn issue(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid generation request:")?;
        for issue in &self.issues {
            write!(f, " {}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl GenerationRequest {
    /// Check every field and collect all failures.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                issues.push(FieldIssue { field, message });
            }
        };

        check(self.username.chars().count() >= 2, "username", "Username must be at least 2 characters.");
        check(
            self.institution.chars().count() >= 2,
            "institution",
            "Institution must be at least 2 characters.",
        );
        check(!self.presentation_date.is_empty(), "presentationDate", "Date is required.");
        check(self.topic.chars().count() >= 5, "topic", "Topic must be at least 5 characters.");
        check(self.slide_count >= MIN_SLIDES, "slideCount", "At least 1 slide is required.");
        check(self.slide_count <= MAX_SLIDES, "slideCount", "Maximum 10 slides.");

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Content generation failed: {0}")]
    Content(String),

    #[error("Image generation failed: {0}")]
    Image(String),
}

pub type Result<T, E = GenerationError> = std::result::Result<T, E>;

/// Produces deck content for a topic.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<PresentationDocument>;
}

/// Produces one image for a prompt, returned as a `data:` URI.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Validate `request` and run the content generator.
pub async fn generate_document(
    generator: &dyn ContentGenerator,
    request: &GenerationRequest,
) -> Result<PresentationDocument> {
    request.validate()?;
    let document = generator.generate(request).await?;
    debug!(
        topic = %request.topic,
        body_slides = document.body_slides.len(),
        "generated deck content"
    );
    Ok(document)
}

/// Generate images for every body slide that has a prompt.
///
/// One task runs per slide and writes only its own slot. A failed slide keeps
/// its previous `image_data_uri`. The input document is not modified.
pub async fn populate_images(
    document: &PresentationDocument,
    generator: Arc<dyn ImageGenerator>,
) -> PresentationDocument {
    let mut next = document.clone();
    let mut tasks = JoinSet::new();

    for (index, slide) in next.body_slides.iter_mut().enumerate() {
        let Some(prompt) = slide.image_prompt.clone() else {
            continue;
        };
        slide.is_generating_image = true;

        let generator = Arc::clone(&generator);
        tasks.spawn(async move {
            let result = generator.generate(&prompt).await;
            (index, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, result) = match joined {
            Ok(done) => done,
            Err(err) => {
                warn!(error = %err, "image task did not complete");
                continue;
            },
        };

        let slide = &mut next.body_slides[index];
        slide.is_generating_image = false;
        match result {
            Ok(data_uri) => {
                debug!(slide = index, "generated image");
                slide.image_data_uri = Some(data_uri);
            },
            Err(err) => warn!(slide = index, error = %err, "image generation failed"),
        }
    }

    // A panicked task never reported back
    for slide in &mut next.body_slides {
        slide.is_generating_image = false;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::model::{BodySlide, SlideContent};

    fn request() -> GenerationRequest {
        GenerationRequest {
            username: "Jane".into(),
            institution: "Acme U".into(),
            presentation_date: "2024-05-01".into(),
            topic: "Climate policy".into(),
            slide_count: 3,
        }
    }

    struct StubContent;

    #[async_trait]
    impl ContentGenerator for StubContent {
        async fn generate(&self, request: &GenerationRequest) -> Result<PresentationDocument> {
            let body = (0..request.slide_count)
                .map(|i| BodySlide::new(format!("Part {}", i + 1), "point").with_image_prompt("sky"))
                .collect();
            Ok(PresentationDocument::new(
                SlideContent {
                    title: request.topic.clone(),
                    subtitle: String::new(),
                },
                body,
            ))
        }
    }

    /// Echoes the prompt; fails for prompts containing "fail".
    struct StubImages;

    #[async_trait]
    impl ImageGenerator for StubImages {
        async fn generate(&self, prompt: &str) -> Result<String> {
            if prompt.contains("fail") {
                return Err(GenerationError::Image(prompt.to_string()));
            }
            Ok(format!("data:text/plain;base64,{}", prompt))
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_issues() {
        let bad = GenerationRequest {
            username: "J".into(),
            institution: String::new(),
            presentation_date: String::new(),
            topic: "AI".into(),
            slide_count: 0,
        };
        let err = bad.validate().unwrap_err();
        assert_eq!(err.issues.len(), 5);
        assert_eq!(err.issue("presentationDate").unwrap().message, "Date is required.");
        assert_eq!(err.issue("slideCount").unwrap().message, "At least 1 slide is required.");
    }

    #[test]
    fn test_slide_count_upper_bound() {
        let err = GenerationRequest {
            slide_count: 11,
            ..request()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue {
            field: "slideCount",
            message: "Maximum 10 slides."
        }]);
    }

    #[tokio::test]
    async fn test_generate_document_validates_first() {
        let bad = GenerationRequest {
            topic: "AI".into(),
            ..request()
        };
        let err = generate_document(&StubContent, &bad).await.unwrap_err();
        assert!(matches!(err, GenerationError::Invalid(_)));

        let doc = generate_document(&StubContent, &request()).await.unwrap();
        assert_eq!(doc.body_slides.len(), 3);
    }

    #[tokio::test]
    async fn test_populate_images() {
        let doc = PresentationDocument::new(SlideContent::default(), vec![
            BodySlide::new("a", "").with_image_prompt("sun"),
            BodySlide::new("b", ""),
            BodySlide::new("c", "")
                .with_image_prompt("fail")
                .with_image_data_uri("data:,old"),
        ]);

        let next = populate_images(&doc, Arc::new(StubImages)).await;

        assert_eq!(next.body_slides[0].image_data_uri.as_deref(), Some("data:text/plain;base64,sun"));
        assert_eq!(next.body_slides[1].image_data_uri, None);
        assert_eq!(next.body_slides[2].image_data_uri.as_deref(), Some("data:,old"));
        assert!(next.body_slides.iter().all(|s| !s.is_generating_image));

        // Input untouched
        assert_eq!(doc.body_slides[0].image_data_uri, None);
    }
}
