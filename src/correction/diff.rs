use similar::{capture_diff_slices, Algorithm, DiffTag};
use crate::core::types::CorrectionEdit;

/// Derive ranged edits that turn `original` into `corrected`.
///
/// Works on chars; offsets in the returned edits are char offsets into
/// `original`. Replacements are labelled "grammar", removals "delete" and
/// additions "insert" (zero-width range at the insertion point).
pub fn edits_between(original: &str, corrected: &str) -> Vec<CorrectionEdit> {
    let old: Vec<char> = original.chars().collect();
    let new: Vec<char> = corrected.chars().collect();

    capture_diff_slices(Algorithm::Myers, &old, &new)
        .iter()
        .filter_map(|op| {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            let removed: String = old[old_range.clone()].iter().collect();
            let added: String = new[new_range].iter().collect();

            let error_type = match tag {
                DiffTag::Equal => return None,
                DiffTag::Replace => "grammar",
                DiffTag::Delete => "delete",
                DiffTag::Insert => "insert",
            };

            Some(
                CorrectionEdit::new(&removed, &added)
                    .with_type(error_type)
                    .with_range(old_range.start, old_range.end),
            )
        })
        .collect()
}
