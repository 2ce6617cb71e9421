use std::collections::HashSet;
use regex::Regex;
use crate::analysis::token::Category;

pub trait Tagger: Send + Sync {
    /// Category for a single raw token. Must depend on nothing but the token.
    fn categorize(&self, word: &str) -> Category;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tagger>;
}

/// A single test applied to the lowercased token
#[derive(Debug, Clone)]
pub enum Rule {
    ContainsAny(Vec<char>),
    OneOf(HashSet<String>),
    Pattern(Regex),
}

impl Rule {
    pub fn one_of(words: &[&str]) -> Self {
        Rule::OneOf(words.iter().map(|w| w.to_string()).collect())
    }

    pub fn pattern(pattern: &str) -> Self {
        Rule::Pattern(Regex::new(pattern).expect("tagger patterns are static"))
    }

    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Rule::ContainsAny(chars) => lowered.contains(chars.as_slice()),
            Rule::OneOf(words) => words.contains(lowered),
            Rule::Pattern(regex) => regex.is_match(lowered),
        }
    }
}

/// Ordered rule table; the first matching rule decides the category.
#[derive(Clone)]
pub struct RuleTagger {
    pub rules: Vec<(Rule, Category)>,
    pub fallback: Category,
}

pub const ARTICLES: &[&str] = &["a", "an", "the"];
pub const PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them"];
pub const PREPOSITIONS: &[&str] = &["in", "on", "at", "to", "for", "with", "by", "of", "from"];
// "for" is also a preposition; the preposition rule runs first and wins.
pub const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "for", "yet", "so"];
pub const AUXILIARY_VERBS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

impl RuleTagger {
    pub fn new(fallback: Category) -> Self {
        RuleTagger {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn add_rule(mut self, rule: Rule, category: Category) -> Self {
        self.rules.push((rule, category));
        self
    }

    /// English heuristic table
    pub fn english() -> Self {
        RuleTagger::new(Category::Noun)
            .add_rule(Rule::ContainsAny(vec!['.', ',', '!', '?']), Category::Punctuation)
            .add_rule(Rule::one_of(ARTICLES), Category::Article)
            .add_rule(Rule::one_of(PRONOUNS), Category::Pronoun)
            .add_rule(Rule::one_of(PREPOSITIONS), Category::Preposition)
            .add_rule(Rule::one_of(CONJUNCTIONS), Category::Conjunction)
            .add_rule(Rule::one_of(AUXILIARY_VERBS), Category::Verb)
            .add_rule(Rule::pattern("ly$"), Category::Adverb)
            .add_rule(Rule::pattern("[aeiou]ble$|ful$|ous$|al$|ive$"), Category::Adjective)
            // Also catches plural nouns ("cats"); known gap of the heuristic.
            .add_rule(Rule::pattern("ing$|ed$|s$"), Category::Verb)
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl Tagger for RuleTagger {
    fn categorize(&self, word: &str) -> Category {
        let lowered = word.to_lowercase();

        self.rules
            .iter()
            .find(|(rule, _)| rule.matches(&lowered))
            .map(|(_, category)| *category)
            .unwrap_or(self.fallback)
    }

    fn name(&self) -> &str {
        "rule_based"
    }

    fn clone_box(&self) -> Box<dyn Tagger> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(word: &str) -> Category {
        RuleTagger::english().categorize(word)
    }

    #[test]
    fn test_closed_word_classes() {
        assert_eq!(tag("the"), Category::Article);
        assert_eq!(tag("An"), Category::Article);
        assert_eq!(tag("They"), Category::Pronoun);
        assert_eq!(tag("with"), Category::Preposition);
        assert_eq!(tag("nor"), Category::Conjunction);
        assert_eq!(tag("were"), Category::Verb);
    }

    #[test]
    fn test_for_is_preposition() {
        assert_eq!(tag("for"), Category::Preposition);
        assert_eq!(tag("FOR"), Category::Preposition);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag("quickly"), Category::Adverb);
        assert_eq!(tag("beautiful"), Category::Adjective);
        assert_eq!(tag("readable"), Category::Adjective);
        assert_eq!(tag("visible"), Category::Adjective);
        assert_eq!(tag("famous"), Category::Adjective);
        assert_eq!(tag("national"), Category::Adjective);
        assert_eq!(tag("active"), Category::Adjective);
        assert_eq!(tag("running"), Category::Verb);
        assert_eq!(tag("jumped"), Category::Verb);
        assert_eq!(tag("cats"), Category::Verb);
        assert_eq!(tag("cat"), Category::Noun);
    }

    #[test]
    fn test_bble_is_not_an_adjective_suffix() {
        // needs a vowel before "ble"
        assert_eq!(tag("pebble"), Category::Noun);
    }

    #[test]
    fn test_punctuation_beats_everything() {
        assert_eq!(tag("the,"), Category::Punctuation);
        assert_eq!(tag("quickly."), Category::Punctuation);
        assert_eq!(tag("?"), Category::Punctuation);
        assert_eq!(tag("e.g"), Category::Punctuation);
    }

    #[test]
    fn test_adverb_checked_before_adjective() {
        // "ly" wins even though "-ly" words can look adjectival
        assert_eq!(tag("family"), Category::Adverb);
    }

    #[test]
    fn test_custom_table() {
        let tagger = RuleTagger::new(Category::Noun)
            .add_rule(Rule::one_of(&["wow"]), Category::Adverb);
        assert_eq!(tagger.categorize("WOW"), Category::Adverb);
        assert_eq!(tagger.categorize("the"), Category::Noun);
    }
}
