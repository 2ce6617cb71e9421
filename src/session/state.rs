use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;
use uuid::Uuid;
use crate::analysis::token::Token;
use crate::core::types::{CorrectionEdit, GrammarResponse, Suggestion};
use crate::correction::applier::{apply_best, apply_corrections};
use crate::correction::grouping::{group_by_type, IssueGroup};
use crate::scoring::scorer::{DocStats, ErrorDensityScorer, ScoreBand, Scorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Grammar,
    Suggestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of one grammar check, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct GrammarReport {
    pub original_text: String,
    pub corrected_text: String,
    pub edits: Vec<CorrectionEdit>,
    pub groups: Vec<IssueGroup>,
    pub score: u8,
    pub band: ScoreBand,
    pub checked_at: DateTime<Utc>,
}

impl GrammarReport {
    /// `text` is the editor text; the service saw it trimmed, so ranged
    /// edits are applied to the trimmed body and the outer whitespace is
    /// put back afterwards.
    pub fn build(text: &str, response: GrammarResponse, use_offsets: bool) -> Self {
        let edits = response.errors;
        let corrected_text = if use_offsets {
            let body = text.trim();
            let lead = text.len() - text.trim_start().len();
            let applied = apply_best(body, &edits);
            format!("{}{}{}", &text[..lead], applied.text, &text[lead + body.len()..])
        } else {
            apply_corrections(text, &edits)
        };
        let scorer = ErrorDensityScorer::default();
        let score = scorer.score(&DocStats::from_text(text, edits.len()));
        trace!(scorer = scorer.name(), score, errors = edits.len(), "scored report");

        GrammarReport {
            original_text: text.to_string(),
            corrected_text,
            groups: group_by_type(&edits),
            edits,
            score,
            band: ScoreBand::for_score(score),
            checked_at: Utc::now(),
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.has_issues() {
            format!("Found {} grammar issues", self.edits.len())
        } else {
            "No grammar issues found".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Applied,
    Dismissed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionEntry {
    pub id: Uuid,
    pub suggestion: Suggestion,
    pub status: SuggestionStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestionSet {
    pub entries: Vec<SuggestionEntry>,
}

impl SuggestionSet {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        SuggestionSet {
            entries: suggestions
                .into_iter()
                .map(|suggestion| SuggestionEntry {
                    id: Uuid::new_v4(),
                    suggestion,
                    status: SuggestionStatus::Pending,
                })
                .collect(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&SuggestionEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut SuggestionEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &SuggestionEntry> {
        self.entries.iter().filter(|entry| entry.status == SuggestionStatus::Pending)
    }
}

/// Content of the grammar tab
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GrammarPanel {
    Empty,
    Loading,
    Report(GrammarReport),
    Structure { tokens: Vec<Token> },
    Failure { message: String, retryable: bool },
    Hidden,
}

/// Content of the suggestions tab
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SuggestionPanel {
    Empty,
    Loading,
    Ready(SuggestionSet),
    Failure { message: String, retryable: bool },
}

/// Everything the editor chrome shows besides the text itself
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub active_tab: Tab,
    pub grammar: GrammarPanel,
    pub suggestions: SuggestionPanel,
    pub notification: Option<Notification>,
    pub score: Option<u8>,
    pub word_count: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_tab: Tab::Grammar,
            grammar: GrammarPanel::Empty,
            suggestions: SuggestionPanel::Empty,
            notification: None,
            score: None,
            word_count: 0,
        }
    }
}

impl ViewState {
    pub fn score_band(&self) -> Option<ScoreBand> {
        self.score.map(ScoreBand::for_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_response() {
        let response = GrammarResponse {
            errors: vec![
                CorrectionEdit::new("has", "have").with_type("Agreement"),
            ],
            corrected_text: None,
        };
        let report = GrammarReport::build("I has a cat.", response, false);
        assert_eq!(report.corrected_text, "I have a cat.");
        assert_eq!(report.summary(), "Found 1 grammar issues");
        assert_eq!(report.groups.len(), 1);
        // 1 error over 12 chars: 100 - 20 / 0.12 = -66.7 -> 0
        assert_eq!(report.score, 0);
        assert_eq!(report.band, ScoreBand::Poor);
    }

    #[test]
    fn test_clean_report() {
        let report = GrammarReport::build("All good.", GrammarResponse::default(), false);
        assert!(!report.has_issues());
        assert_eq!(report.summary(), "No grammar issues found");
        assert_eq!(report.score, 100);
        assert_eq!(report.corrected_text, "All good.");
    }

    #[test]
    fn test_report_with_offsets() {
        let response = GrammarResponse {
            errors: vec![
                CorrectionEdit::new("teh", "the").with_range(12, 15),
            ],
            corrected_text: None,
        };
        let by_range = GrammarReport::build("teh cat and teh dog", response.clone(), true);
        assert_eq!(by_range.corrected_text, "teh cat and the dog");
        let by_substring = GrammarReport::build("teh cat and teh dog", response, false);
        assert_eq!(by_substring.corrected_text, "the cat and teh dog");
    }

    #[test]
    fn test_offsets_count_from_trimmed_text() {
        // the service is sent "teh cat and teh dog"
        let response = GrammarResponse {
            errors: vec![
                CorrectionEdit::new("teh", "the").with_range(12, 15),
                CorrectionEdit::new("teh", "The").with_range(0, 3),
            ],
            corrected_text: None,
        };
        let report = GrammarReport::build("\n  teh cat and teh dog \t", response, true);
        assert_eq!(report.corrected_text, "\n  The cat and the dog \t");
        assert_eq!(report.original_text, "\n  teh cat and teh dog \t");
    }

    #[test]
    fn test_suggestion_set_lookup() {
        let mut set = SuggestionSet::new(vec![
            Suggestion { kind: "Grammar".into(), original: "a".into(), improved: "b".into() },
            Suggestion { kind: "Style".into(), original: "c".into(), improved: "d".into() },
        ]);
        let id = set.entries[1].id;
        set.get_mut(id).unwrap().status = SuggestionStatus::Dismissed;
        assert_eq!(set.get(id).unwrap().status, SuggestionStatus::Dismissed);
        assert_eq!(set.pending().count(), 1);
        assert!(set.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_view_defaults() {
        let view = ViewState::default();
        assert_eq!(view.active_tab, Tab::Grammar);
        assert!(matches!(view.grammar, GrammarPanel::Empty));
        assert!(view.score_band().is_none());
    }
}
