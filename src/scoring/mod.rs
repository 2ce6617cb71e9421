pub mod scorer;

pub use scorer::{document_score, ScoreBand};
