pub mod extract;
pub mod grammar;
pub mod suggestions;

use async_trait::async_trait;
use crate::core::error::Result;
use crate::core::types::{GrammarResponse, Suggestion};

pub use grammar::GrammarClient;
pub use suggestions::SuggestionClient;

/// Remote grammar checker
#[async_trait]
pub trait GrammarService: Send + Sync {
    fn name(&self) -> &str;

    async fn check(&self, text: &str) -> Result<GrammarResponse>;
}

/// Remote generator of rewrite suggestions
#[async_trait]
pub trait SuggestionService: Send + Sync {
    fn name(&self) -> &str;

    async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>>;
}
