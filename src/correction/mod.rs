pub mod applier;
pub mod diff;
pub mod grouping;

pub use applier::{apply_best, apply_corrections, apply_corrections_with_report, apply_ranged, ApplyReport};
