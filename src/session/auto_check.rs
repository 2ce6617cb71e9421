use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;
use crate::service::{GrammarService, SuggestionService};
use crate::session::controller::EditorSession;
use crate::session::debounce::Debouncer;

/// Re-checks the text once typing pauses for the configured delay
pub struct AutoChecker<G, S> {
    session: Arc<Mutex<EditorSession<G, S>>>,
    debouncer: Debouncer,
}

impl<G, S> AutoChecker<G, S>
where
    G: GrammarService + 'static,
    S: SuggestionService + 'static,
{
    pub fn new(session: EditorSession<G, S>) -> Self {
        let debouncer = Debouncer::new(session.config().debounce_delay());
        AutoChecker {
            session: Arc::new(Mutex::new(session)),
            debouncer,
        }
    }

    pub fn session(&self) -> Arc<Mutex<EditorSession<G, S>>> {
        Arc::clone(&self.session)
    }

    /// Store the new text right away; the check itself is debounced. The
    /// session is unlocked while the service is awaited, so input keeps
    /// flowing during a slow check.
    pub async fn on_input(&self, text: impl Into<String>) -> JoinHandle<()> {
        self.session.lock().await.set_text(text);

        let session = Arc::clone(&self.session);
        self.debouncer.schedule(async move {
            let (service, sent) = {
                let mut session = session.lock().await;
                match session.begin_auto_check() {
                    Some(sent) => (session.grammar_service(), sent),
                    None => return,
                }
            };

            let result = service.check(&sent).await;

            // failures are already recorded in the view state
            if let Err(err) = session.lock().await.finish_check(&sent, result) {
                debug!(error = %err, "auto check failed");
            }
        })
    }

    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}
