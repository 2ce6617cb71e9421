use std::path::Path;
use std::time::Duration;
use serde::Deserialize;
use crate::core::error::Result;

pub const DEFAULT_GRAMMAR_ENDPOINT: &str = "http://127.0.0.1:5000/correct";
pub const DEFAULT_SUGGESTION_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SUGGESTION_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grammar_endpoint: String,
    pub suggestion_base_url: String,
    pub suggestion_model: String,
    pub api_key: Option<String>,
    pub use_offsets: bool,      // Apply edits by range when the service sends offsets

    pub debounce_ms: u64,       // Quiet period before an auto-check fires
    pub min_suggestions: usize, // Bounds asked of the suggestion model
    pub max_suggestions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grammar_endpoint: DEFAULT_GRAMMAR_ENDPOINT.to_string(),
            suggestion_base_url: DEFAULT_SUGGESTION_BASE_URL.to_string(),
            suggestion_model: DEFAULT_SUGGESTION_MODEL.to_string(),
            api_key: None,
            use_offsets: false,

            debounce_ms: 300,
            min_suggestions: 3,
            max_suggestions: 5,
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. `GEMINI_API_KEY` wins over
    /// `GOOGLE_API_KEY`; an explicitly configured key is only replaced when
    /// the environment provides one.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Some(endpoint) = lookup("GRAMMARK_GRAMMAR_ENDPOINT") {
            if !endpoint.is_empty() {
                self.grammar_endpoint = endpoint;
            }
        }
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.suggestion_model, "gemini-2.0-flash");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("debounce_ms = 50\napi_key = \"abc\"").unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.grammar_endpoint, DEFAULT_GRAMMAR_ENDPOINT);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = Config::from_toml_str("debounce_ms = \"soon\"").unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::Config);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "grammar_endpoint = \"http://localhost:8080/correct\"").unwrap();
        writeln!(file, "use_offsets = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.grammar_endpoint, "http://localhost:8080/correct");
        assert!(config.use_offsets);
        assert_eq!(config.max_suggestions, 5);

        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::Io);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GOOGLE_API_KEY", "google"),
            ("GRAMMARK_GRAMMAR_ENDPOINT", "http://grammar.local/correct"),
        ]);
        let config = Config::default()
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("google"));
        assert_eq!(config.grammar_endpoint, "http://grammar.local/correct");

        let env: HashMap<&str, &str> =
            HashMap::from([("GEMINI_API_KEY", "gemini"), ("GOOGLE_API_KEY", "google")]);
        let config = Config::default()
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_key.as_deref(), Some("gemini"));
    }
}
