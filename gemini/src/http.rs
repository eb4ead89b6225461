//! Gemini REST client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` (chat and image
//! edits) and `models/{model}:predict` (Imagen). Pure parsing lives in the
//! `parse_*` functions for testability.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use transcript::GroundingSource;

use super::config::GeminiConfig;
use super::prompt::SYSTEM_INSTRUCTION;
use super::types::{ChatReply, Content, GeminiError, GenAi, InlineData, Part};

const API_KEY_HEADER: &str = "x-goog-api-key";
const IMAGE_MIME_TYPE: &str = "image/jpeg";
const IMAGE_ASPECT_RATIO: &str = "1:1";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`GeminiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn post_json(&self, model: &str, method: &str, body: &impl Serialize) -> Result<String, GeminiError> {
        let url = format!("{}/models/{model}:{method}", self.config.base_url);
        tracing::debug!(%model, %method, "gemini request");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GeminiError::ApiResponse { status, message: error_message(&text) });
        }
        Ok(text)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl GenAi for GeminiClient {
    async fn chat(&self, history: &[Content]) -> Result<ChatReply, GeminiError> {
        let body = GenerateRequest {
            system_instruction: Some(SystemInstruction { parts: vec![Part::text(SYSTEM_INSTRUCTION)] }),
            contents: history,
            tools: Some(vec![ToolDef { google_search: EmptyObject {} }]),
            generation_config: None,
        };
        let text = self.post_json(&self.config.chat_model, "generateContent", &body).await?;
        parse_chat_response(&text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineData>, GeminiError> {
        let body = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: IMAGE_ASPECT_RATIO,
                output_options: OutputOptions { mime_type: IMAGE_MIME_TYPE },
            },
        };
        let text = self.post_json(&self.config.image_model, "predict", &body).await?;
        parse_predict_response(&text)
    }

    async fn edit_image(&self, image: &InlineData, instruction: &str) -> Result<Option<InlineData>, GeminiError> {
        let contents = [Content { role: Some("user".to_owned()), parts: vec![Part::inline(image.clone()), Part::text(instruction)] }];
        let body = GenerateRequest {
            system_instruction: None,
            contents: &contents,
            tools: None,
            generation_config: Some(GenerationConfig { response_modalities: vec!["IMAGE"] }),
        };
        let text = self.post_json(&self.config.edit_model, "generateContent", &body).await?;
        parse_image_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDef {
    google_search: EmptyObject,
}

#[derive(Serialize)]
struct EmptyObject {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_options: OutputOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_generate(json: &str) -> Result<GenerateResponse, GeminiError> {
    serde_json::from_str(json).map_err(|e| GeminiError::ApiParse(e.to_string()))
}

/// Text of the first candidate (thought parts skipped) plus its web citations.
pub(crate) fn parse_chat_response(json: &str) -> Result<ChatReply, GeminiError> {
    let response = parse_generate(json)?;
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(ChatReply::default());
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| part.thought != Some(true))
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let sources = candidate
        .grounding_metadata
        .map(|meta| {
            meta.grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .filter_map(|web| {
                    let uri = web.uri.filter(|uri| !uri.is_empty())?;
                    Some(GroundingSource { uri, title: web.title.unwrap_or_default() })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(ChatReply { text, sources })
}

/// First inline image part of the first candidate.
pub(crate) fn parse_image_response(json: &str) -> Result<Option<InlineData>, GeminiError> {
    let response = parse_generate(json)?;
    Ok(response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data)))
}

/// First Imagen prediction, defaulting the MIME type to JPEG.
pub(crate) fn parse_predict_response(json: &str) -> Result<Option<InlineData>, GeminiError> {
    let response: PredictResponse = serde_json::from_str(json).map_err(|e| GeminiError::ApiParse(e.to_string()))?;
    Ok(response.predictions.into_iter().find_map(|prediction| {
        let data = prediction.bytes_base64_encoded.filter(|d| !d.is_empty())?;
        let mime_type = prediction.mime_type.unwrap_or_else(|| IMAGE_MIME_TYPE.to_owned());
        Some(InlineData { mime_type, data })
    }))
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|root| {
            root.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_owned())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
