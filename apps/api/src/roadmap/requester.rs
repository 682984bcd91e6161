//! Roadmap Requester: turns a frozen profile into one schema-constrained
//! Gemini call and parses the answer.
//!
//! Pluggable behind `RoadmapRequester` so the wizard can run against a
//! deterministic stub in tests. `AppState` holds an `Arc<dyn RoadmapRequester>`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{
    strip_json_fences, Content, GeminiClient, GenerateContentRequest, GenerationConfig,
    InlineData, LlmError, Part,
};
use crate::profile::Profile;
use crate::roadmap::models::Roadmap;
use crate::roadmap::prompts::build_roadmap_prompt;
use crate::roadmap::schema::roadmap_schema;

/// The only message a user ever sees when generation fails.
pub const REQUEST_FAILED_MESSAGE: &str =
    "The Oracle is momentarily offline (API Error). Try again!";

/// Why a roadmap request failed. The variants exist for logs only; callers
/// show `user_message()` regardless of which one occurred.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Generation service call failed: {0}")]
    Service(#[from] LlmError),

    #[error("Generation service returned no text")]
    EmptyResponse,

    #[error("Generation service returned malformed roadmap JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RequestError {
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}

/// Produces a roadmap for a profile. One call in, one result out.
#[async_trait]
pub trait RoadmapRequester: Send + Sync {
    async fn request(&self, profile: &Profile) -> Result<Roadmap, RequestError>;
}

/// Builds the outbound payload: the resume as an inline part when there is
/// one, then the instruction text. No placeholder part without a resume.
pub fn build_generate_request(profile: &Profile) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);

    if let Some(resume) = &profile.resume {
        parts.push(Part::Inline {
            inline_data: InlineData {
                mime_type: resume.mime_type.clone(),
                data: resume.payload.clone(),
            },
        });
    }

    parts.push(Part::Text {
        text: build_roadmap_prompt(profile),
    });

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: GenerationConfig::json(roadmap_schema()),
    }
}

/// Parses model output text into a `Roadmap`. Blank text counts as no response.
pub fn parse_roadmap(text: &str) -> Result<Roadmap, RequestError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(RequestError::EmptyResponse);
    }
    Ok(serde_json::from_str(text)?)
}

/// Production requester backed by Gemini.
pub struct GeminiRoadmapRequester {
    client: GeminiClient,
}

impl GeminiRoadmapRequester {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoadmapRequester for GeminiRoadmapRequester {
    async fn request(&self, profile: &Profile) -> Result<Roadmap, RequestError> {
        let request = build_generate_request(profile);
        info!(
            "Requesting roadmap (resume attached: {}, parts: {})",
            profile.resume.is_some(),
            request.contents[0].parts.len()
        );

        let response = self.client.generate(&request).await?;

        let Some(text) = response.text() else {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("none");
            warn!("Gemini returned no text (finish_reason={finish_reason})");
            return Err(RequestError::EmptyResponse);
        };

        let roadmap = parse_roadmap(&text)?;
        info!("Roadmap parsed with {} phases", roadmap.phases.len());
        Ok(roadmap)
    }
}
