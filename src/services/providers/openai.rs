/// OpenAI chat completions provider
use crate::{
    error::{AppError, AppResult},
    services::providers::{require_key, CompletionRequest, GenerativeModel},
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const SERVICE: &str = "OpenAI";
const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[async_trait::async_trait]
impl GenerativeModel for OpenAiProvider {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let api_key = require_key(&self.api_key, API_KEY_VAR)?;
        let url = format!("{}/chat/completions", self.api_url);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(model = %self.model, "OpenAI chat request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::upstream(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(
                SERVICE,
                format!("API returned status {}: {}", status, error_text),
            ));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::malformed(SERVICE, e))?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::malformed(SERVICE, "completion has no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "Extrae un género".to_string(),
            user: "quiero reírme".to_string(),
            temperature: 0.2,
            max_tokens: 15,
        }
    }

    fn create_test_provider(server: &MockServer) -> OpenAiProvider {
        OpenAiProvider::new(
            Some("sk-test".to_string()),
            server.uri(),
            "gpt-3.5-turbo".to_string(),
        )
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 15,
                "messages": [
                    { "role": "system", "content": "Extrae un género" },
                    { "role": "user", "content": "quiero reírme" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": " Comedia\n" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = create_test_provider(&server)
            .complete(&request())
            .await
            .unwrap();

        assert_eq!(text, " Comedia\n");
    }

    #[tokio::test]
    async fn test_null_content_is_empty_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": null } } ]
            })))
            .mount(&server)
            .await;

        let text = create_test_provider(&server)
            .complete(&request())
            .await
            .unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_no_choices_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let error = create_test_provider(&server)
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
            .mount(&server)
            .await;

        let error = create_test_provider(&server)
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::UpstreamUnavailable { service: "OpenAI", .. }));
        assert!(error.to_string().contains("Rate limit reached"));
    }

    #[tokio::test]
    async fn test_missing_key_is_reported() {
        let provider = OpenAiProvider::new(
            None,
            "http://127.0.0.1:1".to_string(),
            "gpt-3.5-turbo".to_string(),
        );

        let error = provider.complete(&request()).await.unwrap_err();
        assert!(matches!(error, AppError::MissingCredentials("OPENAI_API_KEY")));
    }
}
