//! Display names for tags, covering both the tagger's categories and the
//! uppercase role tags that richer analysis payloads carry.

use crate::analysis::token::Category;

/// Human label for an uppercase tag; unknown tags are echoed back.
pub fn pos_label(tag: &str) -> &str {
    match tag {
        "SUBJECT" => "Subject",
        "VERB" => "Verb",
        "OBJECT" => "Object",
        "COMPLEMENT" => "Complement",
        "ADVERB" => "Adverb",
        "ADJECTIVE" => "Adjective",
        "CONJUNCTION" => "Conjunction",
        "PREPOSITION" => "Preposition",
        "PRONOUN" => "Pronoun",
        "ARTICLE" => "Article",
        "INTERJECTION" => "Interjection",
        "NOUN" => "Noun",
        "DETERMINER" => "Determiner",
        "PUNCTUATION" => "Punctuation",
        other => other,
    }
}

/// One-sentence explanation of a tag, matched case-insensitively.
pub fn pos_description(tag: &str) -> String {
    let description = match tag.to_lowercase().as_str() {
        "noun" => "Nouns name people, places, things, or ideas",
        "verb" => "Verbs express actions, states, or occurrences",
        "adjective" => "Adjectives modify or describe nouns",
        "adverb" => "Adverbs modify verbs, adjectives, or other adverbs",
        "pronoun" => "Pronouns replace nouns",
        "preposition" => "Prepositions show relationships between words",
        "conjunction" => "Conjunctions connect clauses or sentences",
        "interjection" => "Interjections express emotions",
        "article" => "Articles specify or generalize nouns",
        "determiner" => "Determiners identify or quantify nouns",
        "punctuation" => "Punctuation marks organize and clarify text",
        "subject" => "The subject is what the sentence is about",
        "object" => "The object receives the action of the verb",
        "complement" => "Complements complete the meaning of subjects or objects",
        _ => return format!("Part of speech: {}", tag),
    };
    description.to_string()
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Article => "Article",
            Category::Pronoun => "Pronoun",
            Category::Preposition => "Preposition",
            Category::Conjunction => "Conjunction",
            Category::Verb => "Verb",
            Category::Adverb => "Adverb",
            Category::Adjective => "Adjective",
            Category::Punctuation => "Punctuation",
            Category::Noun => "Noun",
        }
    }

    pub fn description(&self) -> String {
        pos_description(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_labels() {
        assert_eq!(pos_label("SUBJECT"), "Subject");
        assert_eq!(pos_label("INTERJECTION"), "Interjection");
        assert_eq!(pos_label("GERUND"), "GERUND");
        // the label table is keyed by uppercase tags only
        assert_eq!(pos_label("verb"), "verb");
    }

    #[test]
    fn test_descriptions_case_insensitive() {
        assert_eq!(pos_description("NOUN"), "Nouns name people, places, things, or ideas");
        assert_eq!(pos_description("Object"), "The object receives the action of the verb");
        assert_eq!(pos_description("gerund"), "Part of speech: gerund");
    }

    #[test]
    fn test_every_category_has_a_description() {
        for category in Category::ALL {
            assert!(!category.description().starts_with("Part of speech:"));
            assert_eq!(pos_label(&category.as_str().to_uppercase()), category.label());
        }
    }
}
