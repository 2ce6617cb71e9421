pub mod token;
pub mod tokenizer;
pub mod tagger;
pub mod filter;
pub mod filters;
pub mod analyzer;
pub mod labels;

pub use analyzer::{classify, Analyzer};
pub use token::{Category, Token};
pub use tokenizer::word_count;
