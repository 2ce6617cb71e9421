use std::collections::BTreeMap;
use std::sync::LazyLock;
use regex::Regex;
use serde::Serialize;
use crate::core::types::CorrectionEdit;

/// Display family of an error label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Spelling,
    Capitalization,
    Punctuation,
    Agreement,
    Article,
    VerbTense,
    VerbForm,
    Preposition,
    Plural,
    Pronoun,
    WordOrder,
    Missing,
    Unnecessary,
    Modal,
    Other,
}

// Checked in order; the first fragment found in the label wins.
const KIND_MARKERS: &[(&str, IssueKind)] = &[
    ("spell", IssueKind::Spelling),
    ("capital", IssueKind::Capitalization),
    ("punctuation", IssueKind::Punctuation),
    ("agreement", IssueKind::Agreement),
    ("article", IssueKind::Article),
    ("verb tense", IssueKind::VerbTense),
    ("verb form", IssueKind::VerbForm),
    ("preposition", IssueKind::Preposition),
    ("plural", IssueKind::Plural),
    ("pronoun", IssueKind::Pronoun),
    ("word order", IssueKind::WordOrder),
    ("missing", IssueKind::Missing),
    ("unnecessary", IssueKind::Unnecessary),
    ("modal", IssueKind::Modal),
];

impl IssueKind {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        KIND_MARKERS
            .iter()
            .find(|(marker, _)| label.contains(marker))
            .map(|(_, kind)| *kind)
            .unwrap_or(IssueKind::Other)
    }

    /// Short letter badge shown instead of an icon for some families
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            IssueKind::Spelling => Some("AB"),
            IssueKind::Capitalization => Some("A"),
            _ => None,
        }
    }
}

/// Edits sharing one lowercased error label
#[derive(Debug, Clone, Serialize)]
pub struct IssueGroup {
    pub label: String,
    pub kind: IssueKind,
    pub edits: Vec<CorrectionEdit>,
}

impl IssueGroup {
    /// "subject-verb agreement" -> "Subject-verb agreement issues"
    pub fn heading(&self) -> String {
        let cleaned = self.label.replace('1', "");
        let mut chars = cleaned.chars();
        match chars.next() {
            Some(first) => format!("{}{} issues", first.to_uppercase(), chars.as_str()),
            None => "Other issues".to_string(),
        }
    }

    pub fn count(&self) -> usize {
        self.edits.len()
    }
}

/// Group edits by lowercased `error_type`, groups in first-seen order
pub fn group_by_type(edits: &[CorrectionEdit]) -> Vec<IssueGroup> {
    let mut groups: Vec<IssueGroup> = Vec::new();

    for edit in edits {
        let label = edit.error_type.to_lowercase();
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.edits.push(edit.clone()),
            None => groups.push(IssueGroup {
                kind: IssueKind::from_label(&label),
                label,
                edits: vec![edit.clone()],
            }),
        }
    }

    groups
}

static IS_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bis\b").expect("static pattern"));
static ARE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bare\b").expect("static pattern"));
static A_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\ba\b").expect("static pattern"));
static AN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\ban\b").expect("static pattern"));

/// Offline guess at an edit's error family from its before/after text,
/// for edits that arrive without a useful label.
pub fn classify_edit(edit: &CorrectionEdit) -> &'static str {
    let original = edit.original.to_lowercase();
    let corrected = edit.corrected.to_lowercase();

    if IS_WORD.is_match(&original) && ARE_WORD.is_match(&corrected) {
        "subject-verb agreement"
    } else if A_WORD.is_match(&original) && AN_WORD.is_match(&corrected) {
        "article usage"
    } else if original.split_whitespace().count() != corrected.split_whitespace().count() {
        "missing/extra words"
    } else {
        "other"
    }
}

/// Count of edits per [`classify_edit`] family
pub fn error_statistics(edits: &[CorrectionEdit]) -> BTreeMap<&'static str, usize> {
    let mut stats = BTreeMap::new();
    for edit in edits {
        *stats.entry(classify_edit(edit)).or_insert(0) += 1;
    }
    stats
}
