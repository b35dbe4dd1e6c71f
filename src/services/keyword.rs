use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    services::providers::{CompletionRequest, GenerativeModel},
};

/// Instruction sent with every prompt. The model must answer with one bare
/// genre or theme, in Spanish, with no punctuation.
pub const SYSTEM_INSTRUCTION: &str = "Eres un asistente experto en cine. Tu única tarea es \
extraer un solo género cinematográfico o una sola palabra clave temática, en español, del \
texto del usuario. Responde solo con esa palabra o nombre de género, sin puntuación ni texto \
adicional. Ejemplos: si el usuario dice 'quiero algo de risa', responde 'Comedia'; si dice \
'naves espaciales y futuro', responde 'Ciencia ficción'; si dice 'pasar miedo esta noche', \
responde 'Terror'.";

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 15;

/// Turns a free-text mood description into a single normalized keyword
#[derive(Clone)]
pub struct KeywordExtractor {
    model: Arc<dyn GenerativeModel>,
}

impl KeywordExtractor {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Builds the completion request for a user prompt
    pub fn build_request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: prompt.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Returns the model's answer trimmed and lower-cased.
    ///
    /// The output is not validated further: whatever the model says becomes the keyword.
    pub async fn extract(&self, prompt: &str) -> AppResult<String> {
        let raw = self.model.complete(&Self::build_request(prompt)).await?;
        let keyword = normalize(&raw);

        if keyword.is_empty() {
            return Err(AppError::EmptyExtraction);
        }

        Ok(keyword)
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
