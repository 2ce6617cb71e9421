pub mod core;
pub mod analysis;
pub mod correction;
pub mod scoring;
pub mod service;
pub mod session;

/*
┌────────────────────────────────────────────────────────────────────────────────────┐
│                            GRAMMARK STRUCT ARCHITECTURE                             │
└────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── SESSION LAYER ─────────────────────────────────┐
│                                                                                    │
│  ┌──────────────────────────────────────────────────────────────────────────┐    │
│  │                    struct EditorSession<G, S>                             │    │
│  │  config: Config                 // Endpoints, model, debounce delay       │    │
│  │  grammar: G: GrammarService     // POST /correct                          │    │
│  │  suggestions: S: SuggestionService // Gemini generateContent              │    │
│  │  text: String                   // Editor content                         │    │
│  │  view: ViewState                // Tab, panels, notification, score       │    │
│  └──────────────────────────────────────────────────────────────────────────┘    │
│                                                                                    │
│  ┌────────────────────────────┐  ┌──────────────────────────────────────────┐    │
│  │ struct AutoChecker         │  │ struct Debouncer                         │    │
│  │ • Arc<Mutex<Session>>      │  │ • delay: Duration (300ms)                │    │
│  │ • debouncer: Debouncer     │  │ • pending: Mutex<Option<Cancellation..>> │    │
│  └────────────────────────────┘  └──────────────────────────────────────────┘    │
└────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────── ANALYSIS LAYER ────────────────────────────────┐
│                                                                                    │
│   text ──► WhitespaceTokenizer ──► TaggingFilter(RuleTagger) ──► Vec<Token>       │
│                                                                                    │
│  ┌──────────────────┐  ┌──────────────────────┐  ┌──────────────────────────┐    │
│  │ struct Token     │  │ enum Category        │  │ struct RuleTagger        │    │
│  │ • text: String   │  │ article pronoun      │  │ • rules: Vec<(Rule,Cat)> │    │
│  │ • position: u32  │  │ preposition conj.    │  │ • fallback: Noun         │    │
│  │ • category       │  │ verb adverb adj.     │  │ first match wins         │    │
│  └──────────────────┘  │ punctuation noun     │  └──────────────────────────┘    │
│                        └──────────────────────┘                                    │
└────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────── CORRECTION LAYER ───────────────────────────────┐
│                                                                                    │
│   text + Vec<CorrectionEdit> ──► apply_corrections (substring, last-first)         │
│                              ──► apply_ranged      (char offsets)                  │
│   original + corrected       ──► edits_between     (char diff)                     │
│   Vec<CorrectionEdit>        ──► group_by_type     ──► Vec<IssueGroup>             │
│   errors + length            ──► document_score    ──► 0..=100, ScoreBand          │
└────────────────────────────────────────────────────────────────────────────────────┘
*/
