use serde::{Serialize, Deserialize};

/// One problem reported by the grammar service: replace `original` with `corrected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEdit {
    #[serde(alias = "type", default)]
    pub error_type: String,
    pub original: String,
    #[serde(alias = "correction")]
    pub corrected: String,
    // Character offsets into the source text, when the producer sends them
    #[serde(alias = "start_index", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(alias = "end_index", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl CorrectionEdit {
    pub fn new(original: &str, corrected: &str) -> Self {
        CorrectionEdit {
            error_type: String::new(),
            original: original.to_string(),
            corrected: corrected.to_string(),
            start: None,
            end: None,
        }
    }

    pub fn with_type(mut self, error_type: &str) -> Self {
        self.error_type = error_type.to_string();
        self
    }

    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn range(&self) -> Option<(usize, usize)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarResponse {
    #[serde(default)]
    pub errors: Vec<CorrectionEdit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_text: Option<String>,
}

/// Rewrite proposed by the suggestion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub original: String,
    pub improved: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}
