use serde::Serialize;

/// Scorer trait
pub trait Scorer: Send + Sync {
    fn score(&self, doc_stats: &DocStats) -> u8;

    fn name(&self) -> &str;
}

/// Document statistics for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocStats {
    pub error_count: usize,  // Edits reported by the grammar service
    pub text_length: usize,  // Chars in the trimmed text
}

impl DocStats {
    pub fn from_text(text: &str, error_count: usize) -> Self {
        DocStats {
            error_count,
            text_length: text.trim().chars().count(),
        }
    }
}

/// Error density scorer: every error per hundred chars costs `penalty` points
pub struct ErrorDensityScorer {
    pub penalty: f64,  // Points lost per error per 100 chars (default: 20)
}

impl Default for ErrorDensityScorer {
    fn default() -> Self {
        ErrorDensityScorer { penalty: 20.0 }
    }
}

impl Scorer for ErrorDensityScorer {
    fn score(&self, doc_stats: &DocStats) -> u8 {
        // Empty text has nothing to penalise; also keeps the ratio finite
        if doc_stats.error_count == 0 || doc_stats.text_length == 0 {
            return 100;
        }

        let error_ratio = doc_stats.error_count as f64 / (doc_stats.text_length as f64 / 100.0);
        let score = (100.0 - error_ratio * self.penalty).round();

        score.clamp(0.0, 100.0) as u8
    }

    fn name(&self) -> &str {
        "error_density"
    }
}

/// 0-100 quality indicator from error density
pub fn document_score(error_count: usize, text_length: usize) -> u8 {
    ErrorDensityScorer::default().score(&DocStats { error_count, text_length })
}

/// Colour band of the score badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Good,
            70..=89 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        assert_eq!(document_score(0, 100), 100);
        assert_eq!(document_score(5, 100), 0);
        assert_eq!(document_score(1, 1000), 98);
        assert_eq!(document_score(1, 100), 80);
        assert_eq!(document_score(50, 10), 0);
    }

    #[test]
    fn test_zero_length_guard() {
        assert_eq!(document_score(3, 0), 100);
        assert_eq!(document_score(0, 0), 100);
    }

    #[test]
    fn test_rounding() {
        // 1 / 3.0 * 20 = 6.67 -> 93.33 -> 93
        assert_eq!(document_score(1, 300), 93);
        // 1 / 8.0 * 20 = 2.5 -> 97.5 -> 98
        assert_eq!(document_score(1, 800), 98);
    }

    #[test]
    fn test_stats_from_text_uses_trimmed_chars() {
        let stats = DocStats::from_text("  héllo  ", 1);
        assert_eq!(stats.text_length, 5);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(90), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(89), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(70), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(69), ScoreBand::Poor);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Poor);
    }
}
