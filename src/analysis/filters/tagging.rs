use crate::analysis::filter::TokenFilter;
use crate::analysis::tagger::Tagger;
use crate::analysis::token::Token;

/// Assigns each token the category its tagger picks for the raw text
pub struct TaggingFilter {
    pub tagger: Box<dyn Tagger>,
    name: String,
}

impl TaggingFilter {
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        let name = format!("tagging:{}", tagger.name());
        TaggingFilter { tagger, name }
    }
}

impl TokenFilter for TaggingFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.category = self.tagger.categorize(&token.text);
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(TaggingFilter::new(self.tagger.clone_box()))
    }
}
