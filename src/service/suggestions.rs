use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Suggestion;
use crate::service::extract::parse_suggestions;
use crate::service::SuggestionService;

/// Gemini `generateContent` client that asks for rewrite suggestions
pub struct SuggestionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    min_suggestions: usize,
    max_suggestions: usize,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

impl SuggestionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::Config, "GEMINI_API_KEY not set".to_string()))?;

        Ok(SuggestionClient {
            client: Client::new(),
            api_key,
            base_url: config.suggestion_base_url.trim_end_matches('/').to_string(),
            model: config.suggestion_model.clone(),
            min_suggestions: config.min_suggestions,
            max_suggestions: config.max_suggestions,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent?key={}", self.base_url, self.model, self.api_key)
    }

    pub fn prompt(&self, text: &str) -> String {
        build_prompt(text, self.min_suggestions, self.max_suggestions)
    }
}

/// Instruction sent to the model; the reply is expected to be
/// `{"suggestions": [{"type", "original", "improved"}]}`.
pub fn build_prompt(text: &str, min: usize, max: usize) -> String {
    format!(
        "Analyze the following English text and provide {min}-{max} suggestions to improve it.
For each suggestion:
1. Identify a specific issue (grammar, vocabulary, structure, etc.)
2. Provide the original problematic text
3. Provide an improved version

Format each suggestion as JSON objects with the following keys:
- type: The type of improvement (e.g., \"Grammar correction\", \"Vocabulary enhancement\", etc.)
- original: The original text with issues
- improved: The improved version

Respond ONLY with valid JSON. Example format:
{{
  \"suggestions\": [
    {{
      \"type\": \"Grammar correction\",
      \"original\": \"The original problematic text\",
      \"improved\": \"The corrected text\"
    }}
  ]
}}

Text to analyze:
{text}"
    )
}

#[async_trait]
impl SuggestionService for SuggestionClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": self.prompt(text) }]
            }]
        });

        debug!(model = %self.model, chars = text.len(), "requesting suggestions");
        let resp = self.client.post(self.url()).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "suggestion service rejected request");
            return Err(Error::new(
                ErrorKind::HttpStatus(status.as_u16()),
                format!("API Error: {}: {}", status.as_u16(), message),
            ));
        }

        let raw = resp.text().await?;
        let api_resp: GeminiResponse = serde_json::from_str(&raw)?;

        let reply = api_resp
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| part.text.as_deref())
            .ok_or_else(|| Error::new(ErrorKind::Parse, "response had no candidate text".to_string()))?;

        let payload = parse_suggestions(reply)?;
        debug!(count = payload.suggestions.len(), "suggestions received");

        Ok(payload.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let err = SuggestionClient::new(&Config::default()).err().unwrap();
        assert_eq!(err.kind, ErrorKind::Config);

        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(SuggestionClient::new(&config).is_err());
    }

    #[test]
    fn test_url_and_prompt() {
        let config = Config {
            api_key: Some("k".to_string()),
            ..Config::default()
        };
        let client = SuggestionClient::new(&config).unwrap().with_base_url("http://localhost:9/v1/");
        assert_eq!(client.url(), "http://localhost:9/v1/models/gemini-2.0-flash:generateContent?key=k");

        let prompt = client.prompt("I has a cat.");
        assert!(prompt.starts_with("Analyze the following English text and provide 3-5 suggestions"));
        assert!(prompt.ends_with("Text to analyze:\nI has a cat."));
        assert!(prompt.contains("\"suggestions\": ["));
    }
}
