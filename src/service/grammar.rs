use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::GrammarResponse;
use crate::service::GrammarService;

#[derive(Serialize)]
struct CheckRequest<'a> {
    text: &'a str,
}

/// Client for the grammar-correction endpoint (`POST {text}` -> `{errors}`)
pub struct GrammarClient {
    client: Client,
    endpoint: String,
}

impl GrammarClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.grammar_endpoint.clone())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        GrammarClient {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GrammarService for GrammarClient {
    fn name(&self) -> &str {
        "grammar_http"
    }

    async fn check(&self, text: &str) -> Result<GrammarResponse> {
        debug!(endpoint = %self.endpoint, chars = text.len(), "requesting grammar check");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&CheckRequest { text })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "grammar service rejected request");
            return Err(Error::new(
                ErrorKind::HttpStatus(status.as_u16()),
                format!("grammar service returned {}: {}", status, body),
            ));
        }

        let body = resp.text().await?;
        let response: GrammarResponse = serde_json::from_str(&body)?;
        debug!(errors = response.errors.len(), "grammar check complete");

        Ok(response)
    }
}
