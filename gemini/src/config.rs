//! Gemini configuration parsed from environment variables.

use super::types::GeminiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub chat_model: String,
    pub image_model: String,
    pub edit_model: String,
    pub base_url: String,
}

impl GeminiConfig {
    /// Default models and endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            chat_model: DEFAULT_CHAT_MODEL.to_owned(),
            image_model: DEFAULT_IMAGE_MODEL.to_owned(),
            edit_model: DEFAULT_EDIT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `GEMINI_API_KEY_ENV`: names the env var containing the key (default `API_KEY`)
    /// - `GEMINI_CHAT_MODEL`: default `gemini-2.5-flash`
    /// - `GEMINI_IMAGE_MODEL`: default `imagen-4.0-generate-001`
    /// - `GEMINI_EDIT_MODEL`: default `gemini-2.5-flash-image`
    /// - `GEMINI_BASE_URL`: default public v1beta endpoint
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::MissingApiKey`] when the key variable is unset or empty.
    pub fn from_env() -> Result<Self, GeminiError> {
        let key_var = std::env::var("GEMINI_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_VAR.to_owned());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey { var: key_var.clone() })?;

        let mut config = Self::new(api_key);
        if let Some(model) = env_non_empty("GEMINI_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Some(model) = env_non_empty("GEMINI_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Some(model) = env_non_empty("GEMINI_EDIT_MODEL") {
            config.edit_model = model;
        }
        if let Some(url) = env_non_empty("GEMINI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_owned();
        }
        Ok(config)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
