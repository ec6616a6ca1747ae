//! Groq chat-completions API client

use crate::config::AiConfig;
use crate::error::{Result, ResumeScreenerError};
use log::{debug, warn};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Thin client over the Groq chat-completions endpoint with retry on
/// rate limits and server errors.
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
    max_retries: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GroqClient {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model: config.model.clone(),
            max_retries: config.max_retries,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One chat completion. Retries 429 and 5xx responses with exponential
    /// backoff; other failures surface immediately.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let mut last_error: Option<ResumeScreenerError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "AI request attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(GROQ_API_URL)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ResumeScreenerError::Network(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("AI service returned {}: {}", status, body);
                last_error = Some(ResumeScreenerError::AiService(format!(
                    "status {}: {}",
                    status, body
                )));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(ResumeScreenerError::AiService(format!(
                    "status {}: {}",
                    status, message
                )));
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "AI call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            let content = chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|content| !content.trim().is_empty());

            return content.ok_or_else(|| {
                ResumeScreenerError::AiService("Empty response from AI model".to_string())
            });
        }

        Err(last_error.unwrap_or_else(|| {
            ResumeScreenerError::AiService(format!(
                "Rate limited after {} retries",
                self.max_retries
            ))
        }))
    }

    /// Chat completion whose answer is expected to be a JSON object.
    /// Code fences and stray control characters are stripped before parsing.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<T> {
        let content = self.complete(system, user, temperature, max_tokens).await?;
        let cleaned = clean_json_content(&content);
        serde_json::from_str(&cleaned).map_err(|e| {
            ResumeScreenerError::AiService(format!("Failed to parse AI response as JSON: {}", e))
        })
    }
}

/// Remove control characters and markdown code fences that models sometimes
/// wrap JSON answers in.
pub fn clean_json_content(content: &str) -> String {
    let without_controls: String = content
        .chars()
        .filter(|c| {
            let code = *c as u32;
            !(code <= 0x1f || (0x7f..=0x9f).contains(&code))
        })
        .collect();

    let trimmed = without_controls.trim();
    let unfenced = if let Some(inner) = trimmed.strip_prefix("```json") {
        inner.split("```").next().unwrap_or(inner)
    } else if let Some(inner) = trimmed.strip_prefix("```") {
        inner.split("```").next().unwrap_or(inner)
    } else {
        trimmed
    };

    unfenced.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_json_content_strips_fences() {
        let fenced = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(clean_json_content(fenced), "{\"key\": \"value\"}");

        let bare_fence = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(clean_json_content(bare_fence), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_json_content_removes_control_characters() {
        let noisy = "{\"key\": \u{1}\"value\"}\u{7f}";
        assert_eq!(clean_json_content(noisy), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_json_content_passes_plain_json_through() {
        let plain = "{\"key\": \"value\"}";
        assert_eq!(clean_json_content(plain), plain);
    }
}
