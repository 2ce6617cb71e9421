use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::tagging::TaggingFilter;
use crate::analysis::tagger::RuleTagger;
use crate::analysis::token::{Category, Token};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Whitespace tokens tagged by the English rule table
    pub fn sentence_tagger() -> Self {
        let analyzer = Analyzer::new("sentence_tagger".to_string(),
                                     Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(TaggingFilter::new(Box::new(RuleTagger::english()))));
        debug!(analyzer = %analyzer.name, stages = ?analyzer.stages(), "analyzer built");
        analyzer
    }

    /// Tokenizer name followed by each filter's name, in run order
    pub fn stages(&self) -> Vec<&str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }

    /// How many tokens landed in each category
    pub fn category_counts(tokens: &[Token]) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.category).or_insert(0) += 1;
        }
        counts
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
            name: self.name.clone(),
        }
    }
}

static SENTENCE_TAGGER: LazyLock<Analyzer> = LazyLock::new(Analyzer::sentence_tagger);

/// Split `text` on whitespace and tag every segment.
///
/// Pure: the same input always yields the same tokens, and identical
/// segments get identical categories.
pub fn classify(text: &str) -> Vec<Token> {
    SENTENCE_TAGGER.analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(text: &str) -> Vec<Category> {
        classify(text).into_iter().map(|t| t.category).collect()
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            categories("The cat was sleeping quietly on a comfortable mat."),
            vec![
                Category::Article,
                Category::Noun,
                Category::Verb,
                Category::Verb,
                Category::Adverb,
                Category::Preposition,
                Category::Article,
                Category::Adjective,
                Category::Punctuation,
            ]
        );
    }

    #[test]
    fn test_raw_text_preserved() {
        let tokens = classify("Hello, World");
        assert_eq!(tokens[0].text, "Hello,");
        assert_eq!(tokens[0].category, Category::Punctuation);
        assert_eq!(tokens[1].text, "World");
    }

    #[test]
    fn test_empty_text() {
        assert!(classify("").is_empty());
        assert!(classify("   \n ").is_empty());
    }

    #[test]
    fn test_same_token_same_category() {
        let tokens = classify("run fast run Run");
        assert_eq!(tokens[0].category, tokens[2].category);
        assert_eq!(tokens[0].category, tokens[3].category);
    }

    #[test]
    fn test_idempotent() {
        let text = "She quickly ran to the beautiful house, and it was raining.";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_stages() {
        let analyzer = Analyzer::sentence_tagger();
        assert_eq!(analyzer.stages(), vec!["whitespace", "tagging:rule_based"]);
        assert_eq!(analyzer.clone().stages(), analyzer.stages());
    }

    #[test]
    fn test_category_counts() {
        let tokens = classify("the cat and the dog");
        let counts = Analyzer::category_counts(&tokens);
        assert_eq!(counts.get(&Category::Article), Some(&2));
        assert_eq!(counts.get(&Category::Noun), Some(&2));
        assert_eq!(counts.get(&Category::Conjunction), Some(&1));
        assert_eq!(counts.get(&Category::Verb), None);
    }

    #[test]
    fn test_cloned_analyzer_matches() {
        let analyzer = Analyzer::sentence_tagger();
        let copy = analyzer.clone();
        assert_eq!(copy.name, "sentence_tagger");
        assert_eq!(copy.analyze("for them"), analyzer.analyze("for them"));
    }
}
