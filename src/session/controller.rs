use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::analysis::analyzer::classify;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::word_count;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::GrammarResponse;
use crate::service::{GrammarService, SuggestionService};
use crate::session::state::{
    GrammarPanel, GrammarReport, Notification, NotificationLevel, SuggestionEntry,
    SuggestionPanel, SuggestionSet, SuggestionStatus, Tab, ViewState,
};

/// Owns the editor text and the view state, and drives the two services.
///
/// Remote failures never escape as panics: they land in the relevant panel
/// as a retryable failure and are also returned to the caller.
///
/// A grammar check can also be driven in two halves, [`begin_check`] and
/// [`finish_check`], so a caller sharing the session behind a lock can
/// await the service without holding it.
///
/// [`begin_check`]: EditorSession::begin_check
/// [`finish_check`]: EditorSession::finish_check
pub struct EditorSession<G, S> {
    config: Config,
    grammar: Arc<G>,
    suggestions: S,
    text: String,
    view: ViewState,
}

impl<G: GrammarService, S: SuggestionService> EditorSession<G, S> {
    pub fn new(config: Config, grammar: G, suggestions: S) -> Self {
        EditorSession {
            config,
            grammar: Arc::new(grammar),
            suggestions,
            text: String::new(),
            view: ViewState::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle to the grammar service, usable after the session is unlocked
    pub fn grammar_service(&self) -> Arc<G> {
        Arc::clone(&self.grammar)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn word_count(&self) -> usize {
        self.view.word_count
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.view.word_count = word_count(&self.text);
        if self.text.trim().is_empty() {
            self.view.score = None;
        }
    }

    fn notify(&mut self, level: NotificationLevel, message: &str) {
        debug!(?level, text = message, "notification");
        self.view.notification = Some(Notification::new(level, message));
    }

    pub async fn check_grammar(&mut self) -> Result<()> {
        let Some(sent) = self.begin_check() else {
            return Ok(());
        };
        let result = self.grammar.check(&sent).await;
        self.finish_check(&sent, result)
    }

    /// Mark the grammar panel as loading and return the trimmed text to
    /// send. Posts a warning and returns `None` when there is nothing to check.
    pub fn begin_check(&mut self) -> Option<String> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            self.notify(NotificationLevel::Warning, "Please enter some text to check.");
            return None;
        }
        self.view.grammar = GrammarPanel::Loading;
        Some(text)
    }

    /// Install the outcome of checking `sent`. An outcome for text that has
    /// since been edited is dropped; the check scheduled by that edit
    /// replaces it.
    pub fn finish_check(&mut self, sent: &str, result: Result<GrammarResponse>) -> Result<()> {
        if self.text.trim() != sent {
            debug!(chars = sent.len(), "text changed during grammar check, dropping result");
            return Ok(());
        }

        match result {
            Ok(response) => {
                let report = GrammarReport::build(&self.text, response, self.config.use_offsets);
                info!(issues = report.edits.len(), score = report.score, "grammar check finished");
                self.view.score = Some(report.score);
                self.view.grammar = GrammarPanel::Report(report);
                Ok(())
            }
            Err(err) => {
                warn!(service = self.grammar.name(), error = %err, "grammar check failed");
                self.view.grammar = GrammarPanel::Failure {
                    message: format!("Could not reach the server: {}", err.context),
                    retryable: true,
                };
                Err(err)
            }
        }
    }

    /// Replace the text with the corrected text of the current report and
    /// show its structure.
    pub fn apply_all_corrections(&mut self) -> Result<&[Token]> {
        let corrected = match &self.view.grammar {
            GrammarPanel::Report(report) => report.corrected_text.clone(),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidState,
                    "no grammar report to apply".to_string(),
                ))
            }
        };

        info!("applying all corrections");
        self.set_text(corrected);
        self.notify(NotificationLevel::Success, "All corrections applied successfully");
        Ok(self.analyze_structure())
    }

    pub fn analyze_structure(&mut self) -> &[Token] {
        self.view.grammar = GrammarPanel::Structure {
            tokens: classify(&self.text),
        };
        match &self.view.grammar {
            GrammarPanel::Structure { tokens } => tokens,
            _ => &[],
        }
    }

    pub fn dismiss_results(&mut self) {
        self.view.grammar = GrammarPanel::Hidden;
    }

    pub async fn generate_suggestions(&mut self) -> Result<()> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            self.notify(
                NotificationLevel::Warning,
                "Please enter text to generate improvement suggestions!",
            );
            return Ok(());
        }

        self.view.suggestions = SuggestionPanel::Loading;
        match self.suggestions.suggest(&text).await {
            Ok(suggestions) => {
                info!(count = suggestions.len(), "suggestions ready");
                self.view.suggestions = SuggestionPanel::Ready(SuggestionSet::new(suggestions));
                Ok(())
            }
            Err(err) => {
                warn!(service = self.suggestions.name(), error = %err, "suggestion request failed");
                self.view.suggestions = SuggestionPanel::Failure {
                    message: format!("An error occurred while generating suggestions: {}", err.context),
                    retryable: true,
                };
                Err(err)
            }
        }
    }

    /// Suggestions neither applied nor dismissed yet
    pub fn pending_suggestions(&self) -> usize {
        match &self.view.suggestions {
            SuggestionPanel::Ready(set) => set.pending().count(),
            _ => 0,
        }
    }

    fn pending_suggestion(&mut self, id: Uuid) -> Result<&mut SuggestionEntry> {
        let SuggestionPanel::Ready(set) = &mut self.view.suggestions else {
            return Err(Error::new(ErrorKind::InvalidState, "no suggestions loaded".to_string()));
        };
        let entry = set
            .get_mut(id)
            .ok_or_else(|| Error::new(ErrorKind::InvalidInput, format!("unknown suggestion {}", id)))?;
        if entry.status != SuggestionStatus::Pending {
            return Err(Error::new(
                ErrorKind::InvalidState,
                format!("suggestion {} already {:?}", id, entry.status),
            ));
        }
        Ok(entry)
    }

    /// Rewrite the first occurrence of the suggestion's original text.
    /// Returns whether the text changed; the suggestion counts as applied
    /// either way.
    pub fn accept_suggestion(&mut self, id: Uuid) -> Result<bool> {
        let entry = self.pending_suggestion(id)?;
        entry.status = SuggestionStatus::Applied;
        let (original, improved) = (entry.suggestion.original.clone(), entry.suggestion.improved.clone());

        let changed = self.text.contains(original.as_str());
        if changed {
            let updated = self.text.replacen(original.as_str(), &improved, 1);
            self.set_text(updated);
        }
        self.notify(NotificationLevel::Success, "Suggestion applied successfully");
        debug!(remaining = self.pending_suggestions(), "suggestion applied");
        Ok(changed)
    }

    pub fn dismiss_suggestion(&mut self, id: Uuid) -> Result<()> {
        let entry = self.pending_suggestion(id)?;
        entry.status = SuggestionStatus::Dismissed;
        self.notify(NotificationLevel::Info, "Suggestion dismissed");
        debug!(remaining = self.pending_suggestions(), "suggestion dismissed");
        Ok(())
    }

    /// Moving back to the grammar tab from suggestions re-checks the text.
    pub async fn switch_tab(&mut self, tab: Tab) -> Result<()> {
        let previous = self.view.active_tab;
        self.view.active_tab = tab;

        if tab == Tab::Grammar && previous == Tab::Suggestions && !self.text.trim().is_empty() {
            return self.check_grammar().await;
        }
        Ok(())
    }

    /// Body of the debounced input check
    pub async fn auto_check(&mut self) -> Result<()> {
        let Some(sent) = self.begin_auto_check() else {
            return Ok(());
        };
        let result = self.grammar.check(&sent).await;
        self.finish_check(&sent, result)
    }

    /// First half of [`auto_check`](EditorSession::auto_check). Emptied text
    /// resets the panel and score instead of warning.
    pub fn begin_auto_check(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            self.view.grammar = GrammarPanel::Empty;
            self.view.score = None;
            return None;
        }
        self.view.active_tab = Tab::Grammar;
        self.begin_check()
    }

    /// Clear the text and reset results. False when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.text.trim().is_empty() {
            return false;
        }
        self.set_text(String::new());
        self.view.grammar = GrammarPanel::Empty;
        true
    }
}
