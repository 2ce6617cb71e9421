use std::sync::LazyLock;
use regex::Regex;
use crate::core::error::Result;
use crate::core::types::SuggestionPayload;

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").expect("static pattern"));
static BRACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static pattern"));

/// Pull the JSON document out of a model reply that may wrap it in a
/// ```json fence or surround it with prose. Falls back to the whole reply.
pub fn extract_json(reply: &str) -> &str {
    if let Some(inner) = FENCED_JSON.captures(reply).and_then(|c| c.get(1)) {
        return inner.as_str();
    }
    if let Some(braced) = BRACED.find(reply) {
        return braced.as_str();
    }
    reply
}

pub fn parse_suggestions(reply: &str) -> Result<SuggestionPayload> {
    Ok(serde_json::from_str(extract_json(reply))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    const BODY: &str = r#"{"suggestions": [{"type": "Grammar correction", "original": "I has", "improved": "I have"}]}"#;

    #[test]
    fn test_fenced_block() {
        let reply = format!("Here you go:\n```json\n{}\n```\nHope it helps!", BODY);
        assert_eq!(extract_json(&reply), BODY);
        let payload = parse_suggestions(&reply).unwrap();
        assert_eq!(payload.suggestions[0].kind, "Grammar correction");
        assert_eq!(payload.suggestions[0].improved, "I have");
    }

    #[test]
    fn test_bare_object_in_prose() {
        let reply = format!("Sure. {} Let me know.", BODY);
        assert_eq!(extract_json(&reply), BODY);
    }

    #[test]
    fn test_plain_json() {
        assert_eq!(extract_json(BODY), BODY);
        assert_eq!(parse_suggestions(BODY).unwrap().suggestions.len(), 1);
    }

    #[test]
    fn test_no_json_is_parse_error() {
        assert_eq!(extract_json("no suggestions today"), "no suggestions today");
        let err = parse_suggestions("no suggestions today").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
