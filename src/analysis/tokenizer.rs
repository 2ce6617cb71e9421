use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits trimmed text on runs of whitespace. Segments keep attached
/// punctuation ("cat." stays one token).
#[derive(Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.trim()
            .split_whitespace()
            .enumerate()
            .map(|(position, segment)| Token::new(segment.to_string(), position as u32))
            .collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(WhitespaceTokenizer)
    }
}

/// Number of whitespace-separated words, as shown in the editor status bar
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
