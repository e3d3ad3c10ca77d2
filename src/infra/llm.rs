use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::message::GenerationRequest;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, base_url: String, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|err| {
            AppError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Gemini API key not configured; set GEMINI_API_KEY".to_string(),
            )
        })
    }

    fn generate_endpoint(base_url: &str, model: &str) -> String {
        let model = model.trim().trim_start_matches("models/");
        format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn generate_text(&self, request: &GenerationRequest) -> AppResult<String> {
        let api_key = self.api_key()?;
        let endpoint = Self::generate_endpoint(&self.base_url, &request.model);
        info!(model = %request.model, "requesting commit message");
        debug!(prompt_chars = request.prompt.len(), %endpoint, "sending prompt");

        let response = self
            .http
            .post(endpoint)
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateContentRequest::new(request))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AppError::BackendUnavailable(format!("Gemini request timed out: {err}"))
                } else {
                    AppError::BackendUnavailable(format!("failed to call Gemini: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::BackendUnavailable(format!(
                "Gemini responded with {status}: {body}"
            )));
        }

        let body = response.text().await.map_err(|err| {
            AppError::BackendUnavailable(format!("failed to read Gemini response: {err}"))
        })?;
        extract_text(&body)
    }
}

fn extract_text(body: &str) -> AppResult<String> {
    let payload: GenerateContentResponse = serde_json::from_str(body).map_err(|err| {
        AppError::InvalidResponse(format!("failed to parse Gemini response: {err}"))
    })?;

    let candidate = payload
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| match payload.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => AppError::InvalidResponse(format!("prompt blocked: {reason}")),
            None => AppError::InvalidResponse("response contained no candidates".to_string()),
        })?;

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(AppError::InvalidResponse(format!(
            "response contained no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
