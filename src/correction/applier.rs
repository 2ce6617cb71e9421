use tracing::trace;
use crate::core::types::CorrectionEdit;

/// Result of one correction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub text: String,
    pub applied: usize,
    pub skipped: usize,
}

/// Apply grammar-service edits by substring matching.
///
/// Edits are ordered by where their `original` first occurs in `text`, last
/// occurrence first, so replacing an early span never moves a later one.
/// Edits whose `original` is absent sort after all others. Each edit then
/// replaces the first occurrence of `original` in the text as modified so
/// far; when there is none the edit is skipped without error.
///
/// Two edits with the same `original` cannot be told apart by this scheme:
/// both target the first occurrence, whatever the service meant.
pub fn apply_corrections(text: &str, edits: &[CorrectionEdit]) -> String {
    apply_corrections_with_report(text, edits).text
}

/// Same as [`apply_corrections`] but also counts applied and skipped edits
pub fn apply_corrections_with_report(text: &str, edits: &[CorrectionEdit]) -> ApplyReport {
    let mut ordered: Vec<(Option<usize>, &CorrectionEdit)> = edits
        .iter()
        .map(|edit| (text.find(edit.original.as_str()), edit))
        .collect();

    // None orders below every Some, so missing targets go last. Stable.
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    let mut corrected = text.to_string();
    let mut applied = 0;
    let mut skipped = 0;

    for (_, edit) in ordered {
        match corrected.find(edit.original.as_str()) {
            Some(pos) => {
                corrected.replace_range(pos..pos + edit.original.len(), &edit.corrected);
                applied += 1;
            }
            None => {
                trace!(original = %edit.original, "correction target not found, skipping");
                skipped += 1;
            }
        }
    }

    ApplyReport {
        text: corrected,
        applied,
        skipped,
    }
}

/// Apply edits by their character ranges instead of by substring.
///
/// Returns `None` unless every edit carries a valid range. Edits are applied
/// from the highest start down; an edit is skipped when its range runs past
/// the text, overlaps a range already applied, or no longer covers its
/// `original` text.
pub fn apply_ranged(text: &str, edits: &[CorrectionEdit]) -> Option<ApplyReport> {
    let mut ranged: Vec<((usize, usize), &CorrectionEdit)> = edits
        .iter()
        .map(|edit| edit.range().map(|range| (range, edit)))
        .collect::<Option<Vec<_>>>()?;

    ranged.sort_by(|a, b| b.0.cmp(&a.0));

    // Byte offset of every char boundary, including the end of the text
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut corrected = text.to_string();
    let mut floor = usize::MAX;
    let mut applied = 0;
    let mut skipped = 0;

    for ((start, end), edit) in ranged {
        let (Some(&from), Some(&to)) = (boundaries.get(start), boundaries.get(end)) else {
            skipped += 1;
            continue;
        };
        if end > floor {
            skipped += 1;
            continue;
        }
        if &text[from..to] != edit.original {
            skipped += 1;
            continue;
        }
        corrected.replace_range(from..to, &edit.corrected);
        floor = start;
        applied += 1;
    }

    Some(ApplyReport {
        text: corrected,
        applied,
        skipped,
    })
}

/// Ranged application when every edit has offsets, substring matching otherwise
pub fn apply_best(text: &str, edits: &[CorrectionEdit]) -> ApplyReport {
    apply_ranged(text, edits).unwrap_or_else(|| apply_corrections_with_report(text, edits))
}
