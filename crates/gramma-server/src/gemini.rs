//! Google Gemini implementation of [`TextGenerator`].

use async_trait::async_trait;
use gramma_config::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::generator::{GenerateRequest, TextGenerator};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`ServerError::Llm`] if no API key is configured, or
    /// [`ServerError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, ServerError> {
        if !config.is_configured() {
            return Err(ServerError::Llm("missing Gemini API key".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerateRequest<'_>) -> Result<String, ServerError> {
        let body = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.system,
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        };

        tracing::debug!(model = %self.model, max_tokens = request.max_tokens, "gemini request");
        let resp = self.client.post(self.endpoint()).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            tracing::error!(%status, body = %text, "gemini returned an error");
            return Err(ServerError::Llm(format!("HTTP {status}")));
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| ServerError::Llm(format!("unreadable response: {e}")))?;
        let content = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or_else(|| ServerError::Llm("no candidates in response".to_string()))?;
        let out: String = content.parts.into_iter().map(|p| p.text).collect();
        if out.trim().is_empty() {
            return Err(ServerError::Llm("empty response".to_string()));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> LlmConfig {
        LlmConfig {
            api_key: key.to_string(),
            base_url: "https://example.test/v1beta/".to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn requires_api_key() {
        assert!(matches!(
            GeminiClient::new(&config("")),
            Err(ServerError::Llm(_))
        ));
    }

    #[test]
    fn endpoint_encodes_key() {
        let client = GeminiClient::new(&config("a b&c")).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=a%20b%26c"
        );
    }

    #[test]
    fn request_body_uses_gemini_field_names() {
        let body = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: "sys" }],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 500,
                temperature: 0.5,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
    }
}
