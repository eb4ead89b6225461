//! Assistant: routes one user message to chat, image generation, or image
//! editing and folds every outcome into a single [`AiResponse`].
//!
//! DESIGN
//! ======
//! The chat session is created lazily on the first chat turn and kept
//! until the backend reports a stale key. The last generated image is not
//! stored here; callers pass it in and receive the updated value in the
//! returned [`Exchange`].

use std::sync::{Mutex, PoisonError};

use transcript::{AiResponse, IMAGE_COMMAND};

use super::types::{Content, GeminiError, GenAi, InlineData};

const GENERATE_EMPTY_PROMPT: &str = "Por favor, forneça um prompt para a imagem. Ex: /imagem um gato no espaço";
const GENERATE_NO_IMAGE: &str = "Não foi possível gerar a imagem. Tente um prompt diferente.";
const GENERATE_BLOCKED: &str =
    "Sua solicitação de imagem foi bloqueada devido a políticas de segurança. Por favor, tente um prompt diferente.";
const GENERATE_BILLING: &str = "Esta funcionalidade de geração de imagens requer que o faturamento esteja ativado para sua chave de API. Por favor, verifique a documentação de faturamento: https://ai.google.dev/gemini-api/docs/billing";
const GENERATE_FAILED: &str = "Desculpe, houve um erro ao gerar a imagem. Por favor, tente novamente.";

const EDIT_BAD_IMAGE: &str = "Erro ao processar a última imagem para edição. Por favor, gere uma nova imagem.";
const EDIT_NO_IMAGE: &str = "Não foi possível editar a imagem. Tente um prompt diferente.";
const EDIT_BLOCKED: &str = "Sua solicitação de edição de imagem foi bloqueada devido a políticas de segurança. Por favor, tente um prompt diferente.";
const EDIT_BILLING: &str = "Esta funcionalidade de edição de imagens requer que o faturamento esteja ativado para sua chave de API. Por favor, verifique a documentação de faturamento: https://ai.google.dev/gemini-api/docs/billing";
const EDIT_FAILED: &str = "Desculpe, houve um erro ao editar a imagem. Por favor, tente novamente.";
const EDIT_CAPTION: &str = "Aqui está a sua imagem editada!";

const IMAGE_STALE_KEY: &str =
    "Sua chave de API para imagem pode estar inválida. Por favor, selecione-a novamente e tente.";
const CHAT_STALE_KEY: &str = "Sua chave de API para chat pode estar inválida. Por favor, selecione-a novamente e tente.";
const CHAT_FAILED: &str = "Oops! Algo deu errado da minha parte. Por favor, tente perguntar novamente.";

// =============================================================================
// ROUTING
// =============================================================================

/// Where a user message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/imagem <prompt>`; the prompt is trimmed and may be empty.
    GenerateImage { prompt: &'a str },
    /// Any other message while an image from this session exists.
    EditImage { image: &'a str },
    Chat,
}

/// Pick the route for `message` given the last generated image, if any.
#[must_use]
pub fn route<'a>(message: &'a str, last_image: Option<&'a str>) -> Route<'a> {
    if let Some(rest) = message.strip_prefix(IMAGE_COMMAND) {
        if rest.starts_with(' ') {
            return Route::GenerateImage { prompt: rest.trim() };
        }
    }
    match last_image {
        Some(image) => Route::EditImage { image },
        None => Route::Chat,
    }
}

// =============================================================================
// FAILURE CLASSIFICATION
// =============================================================================

/// Coarse category of a backend failure, matched on the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    StaleKey,
    SafetyBlocked,
    BillingRequired,
    Other,
}

impl FailureKind {
    #[must_use]
    pub fn classify(error: &GeminiError) -> Self {
        let text = error.to_string().to_lowercase();
        if text.contains("requested entity was not found.") {
            Self::StaleKey
        } else if text.contains("blocked") || text.contains("safety policies") || text.contains("harmful content") {
            Self::SafetyBlocked
        } else if text.contains("imagen api is only accessible to billed users") {
            Self::BillingRequired
        } else {
            Self::Other
        }
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Result of one [`Assistant::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub response: AiResponse,
    /// Image to edit on the next turn. Only a successful generate or edit
    /// changes it.
    pub last_image: Option<String>,
}

pub struct Assistant<B> {
    backend: B,
    session: Mutex<Option<Vec<Content>>>,
}

impl<B: GenAi> Assistant<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, session: Mutex::new(None) }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn has_session(&self) -> bool {
        self.lock_session().is_some()
    }

    /// Drop the chat history so the next chat turn starts fresh.
    pub fn reset_session(&self) {
        *self.lock_session() = None;
    }

    /// Handle one user message. Never fails; errors become
    /// [`AiResponse::Error`] with a user-facing message.
    pub async fn send(&self, message: &str, last_image: Option<&str>) -> Exchange {
        let unchanged = || last_image.map(str::to_owned);
        match route(message, last_image) {
            Route::GenerateImage { prompt } => match self.generate(prompt).await {
                Ok(image_url) => Exchange {
                    response: AiResponse::Image {
                        text: Some(format!("Aqui está a imagem que criei para você com o prompt: \"{prompt}\"")),
                        image_url: image_url.clone(),
                    },
                    last_image: Some(image_url),
                },
                Err(response) => Exchange { response, last_image: unchanged() },
            },
            Route::EditImage { image } => match self.edit(image, message).await {
                Ok(image_url) => Exchange {
                    response: AiResponse::Image { text: Some(EDIT_CAPTION.to_owned()), image_url: image_url.clone() },
                    last_image: Some(image_url),
                },
                Err(response) => Exchange { response, last_image: unchanged() },
            },
            Route::Chat => Exchange { response: self.chat(message).await, last_image: unchanged() },
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiResponse> {
        if prompt.is_empty() {
            return Err(AiResponse::error(GENERATE_EMPTY_PROMPT));
        }
        match self.backend.generate_image(prompt).await {
            Ok(Some(image)) => Ok(image.data_uri()),
            Ok(None) => Err(AiResponse::error(GENERATE_NO_IMAGE)),
            Err(e) => {
                tracing::warn!(error = %e, "image generation failed");
                Err(AiResponse::error(match FailureKind::classify(&e) {
                    FailureKind::StaleKey => IMAGE_STALE_KEY,
                    FailureKind::SafetyBlocked => GENERATE_BLOCKED,
                    FailureKind::BillingRequired => GENERATE_BILLING,
                    FailureKind::Other => GENERATE_FAILED,
                }))
            }
        }
    }

    async fn edit(&self, image_url: &str, instruction: &str) -> Result<String, AiResponse> {
        let Some(image) = InlineData::from_data_uri(image_url) else {
            return Err(AiResponse::error(EDIT_BAD_IMAGE));
        };
        match self.backend.edit_image(&image, instruction).await {
            Ok(Some(edited)) => Ok(edited.data_uri()),
            Ok(None) => Err(AiResponse::error(EDIT_NO_IMAGE)),
            Err(e) => {
                tracing::warn!(error = %e, "image edit failed");
                Err(AiResponse::error(match FailureKind::classify(&e) {
                    FailureKind::StaleKey => IMAGE_STALE_KEY,
                    FailureKind::SafetyBlocked => EDIT_BLOCKED,
                    FailureKind::BillingRequired => EDIT_BILLING,
                    FailureKind::Other => EDIT_FAILED,
                }))
            }
        }
    }

    async fn chat(&self, message: &str) -> AiResponse {
        let mut history = self.lock_session().clone().unwrap_or_default();
        history.push(Content::text("user", message));

        match self.backend.chat(&history).await {
            Ok(reply) => {
                history.push(Content::text("model", reply.text.clone()));
                *self.lock_session() = Some(history);
                AiResponse::Text { text: reply.text, sources: reply.sources }
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                if FailureKind::classify(&e) == FailureKind::StaleKey {
                    self.reset_session();
                    AiResponse::error(CHAT_STALE_KEY)
                } else {
                    AiResponse::error(CHAT_FAILED)
                }
            }
        }
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Option<Vec<Content>>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
