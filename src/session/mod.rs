pub mod state;
pub mod debounce;
pub mod controller;
pub mod auto_check;

pub use auto_check::AutoChecker;
pub use controller::EditorSession;
pub use debounce::Debouncer;
pub use state::{GrammarPanel, GrammarReport, SuggestionPanel, Tab, ViewState};
