use std::fmt;
use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,       // Raw segment as it appeared, punctuation kept
    pub position: u32,      // Index in the token sequence
    pub category: Category,
}

/// Coarse part-of-speech tag assigned by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Article,
    Pronoun,
    Preposition,
    Conjunction,
    Verb,
    Adverb,
    Adjective,
    Punctuation,
    Noun,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Article,
        Category::Pronoun,
        Category::Preposition,
        Category::Conjunction,
        Category::Verb,
        Category::Adverb,
        Category::Adjective,
        Category::Punctuation,
        Category::Noun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Article => "article",
            Category::Pronoun => "pronoun",
            Category::Preposition => "preposition",
            Category::Conjunction => "conjunction",
            Category::Verb => "verb",
            Category::Adverb => "adverb",
            Category::Adjective => "adjective",
            Category::Punctuation => "punctuation",
            Category::Noun => "noun",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token {
            text,
            position,
            category: Category::Noun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let token = Token {
            text: "Quickly".to_string(),
            position: 0,
            category: Category::Adverb,
        };
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"category\":\"adverb\""));
        for category in Category::ALL {
            assert_eq!(serde_json::to_string(&category).unwrap(), format!("\"{}\"", category));
        }
    }
}
