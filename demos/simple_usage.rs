/// Grammark API Demo
///
/// Walks through the offline pieces and then one live round trip:
/// - Sentence structure tagging
/// - Applying corrections (substring and ranged)
/// - Grouping issues and scoring the document
/// - A grammar check against the configured endpoint

use async_trait::async_trait;
use grammark::analysis::analyzer::{classify, Analyzer};
use grammark::core::config::Config;
use grammark::core::logging;
use grammark::core::types::{CorrectionEdit, Suggestion};
use grammark::correction::applier::{apply_corrections, apply_ranged};
use grammark::correction::diff::edits_between;
use grammark::correction::grouping::group_by_type;
use grammark::scoring::scorer::{document_score, ScoreBand};
use grammark::service::{GrammarClient, SuggestionService};
use grammark::session::{EditorSession, GrammarPanel};

/// Stand-in used when no Gemini key is configured
struct NoSuggestions;

#[async_trait]
impl SuggestionService for NoSuggestions {
    fn name(&self) -> &str {
        "none"
    }

    async fn suggest(&self, _text: &str) -> grammark::core::error::Result<Vec<Suggestion>> {
        Ok(Vec::new())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("grammark=info");

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   Grammark - Complete API Demo                ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Tag a sentence
    println!("Step 1: STRUCTURE - Tagging a sentence...");
    let text = "She go to the market and buyed a beautiful basket.";
    let tokens = classify(text);
    for token in &tokens {
        println!("  {:<12} {}", token.text, token.category.label());
    }
    let counts = Analyzer::category_counts(&tokens);
    println!("  Categories: {:?}\n", counts);

    // Step 2: Apply corrections by substring
    println!("Step 2: CORRECT - Applying edits...");
    let edits = vec![
        CorrectionEdit::new("go", "goes").with_type("Subject-verb agreement"),
        CorrectionEdit::new("buyed", "buys").with_type("Verb form"),
    ];
    let corrected = apply_corrections(text, &edits);
    println!("  Before: {}", text);
    println!("  After:  {}\n", corrected);

    // Step 3: Recover ranged edits from a diff and apply them back
    println!("Step 3: DIFF - Character-level edits...");
    let ranged = edits_between(text, &corrected);
    for edit in &ranged {
        println!("  [{}] {:?} -> {:?} at {:?}", edit.error_type, edit.original, edit.corrected, edit.range());
    }
    if let Some(report) = apply_ranged(text, &ranged) {
        println!("  Round trip matches: {}\n", report.text == corrected);
    }

    // Step 4: Group and score
    println!("Step 4: SCORE - Grouping issues...");
    for group in group_by_type(&edits) {
        println!("  {} ({})", group.heading(), group.count());
    }
    let score = document_score(edits.len(), text.trim().chars().count());
    println!("  Score: {} ({:?})\n", score, ScoreBand::for_score(score));

    // Step 5: Live check
    let config = Config::default().with_env_overrides();
    println!("Step 5: CHECK - Calling {}...", config.grammar_endpoint);
    let grammar = GrammarClient::new(&config);
    let mut session = EditorSession::new(config, grammar, NoSuggestions);
    session.set_text(text);

    match session.check_grammar().await {
        Ok(()) => {
            if let GrammarPanel::Report(report) = &session.view().grammar {
                println!("  {}", report.summary());
                println!("  Corrected: {}", report.corrected_text);
            }
        }
        Err(e) => println!("  Skipped: {}", e),
    }

    println!("\nDone!");
    Ok(())
}
