//! Sentiment analysis for bias estimation
//!
//! Source neutrality scoring needs a polarity signal over claim texts.
//! The trait keeps the analyzer pluggable; the default implementation is
//! a deterministic word-list counter, which is enough to separate loaded
//! language from neutral reporting.

use std::collections::HashSet;

/// Produces a polarity signal for a text
pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity in [-1.0, 1.0]; negative is critical, positive is favorable
    fn polarity(&self, text: &str) -> f64;
}

/// Word-list sentiment analyzer
///
/// Counts positive and negative words and returns their normalized
/// difference. Texts with no charged words score 0.0.
#[derive(Debug)]
pub struct LexiconSentiment {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self {
            positive: [
                "good", "great", "excellent", "positive", "success", "successful", "effective",
                "beneficial", "improve", "improved", "strong", "safe", "reliable", "accurate",
                "best", "better", "win", "growth", "gain",
            ]
            .into_iter()
            .collect(),
            negative: [
                "bad", "terrible", "awful", "negative", "failure", "failed", "ineffective",
                "harmful", "worsen", "worsened", "weak", "dangerous", "unreliable", "inaccurate",
                "worst", "worse", "lose", "decline", "loss", "crisis", "disaster",
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for word in text.to_lowercase().split_whitespace() {
            let word = word.trim_matches(['.', ',', '!', '?', ';', ':', '"', '\'']);
            if self.positive.contains(word) {
                positive += 1;
            } else if self.negative.contains(word) {
                negative += 1;
            }
        }

        let charged = positive + negative;
        if charged == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / charged as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_zero_polarity() {
        let analyzer = LexiconSentiment::default();
        assert_eq!(analyzer.polarity("The committee met on Tuesday"), 0.0);
    }

    #[test]
    fn test_positive_text() {
        let analyzer = LexiconSentiment::default();
        assert!(analyzer.polarity("The treatment was safe and effective") > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = LexiconSentiment::default();
        assert!(analyzer.polarity("A terrible disaster and a crisis") < 0.0);
    }

    #[test]
    fn test_mixed_text_balances_out() {
        let analyzer = LexiconSentiment::default();
        assert_eq!(analyzer.polarity("A good outcome after a bad start"), 0.0);
    }

    #[test]
    fn test_polarity_within_bounds() {
        let analyzer = LexiconSentiment::default();
        let polarity = analyzer.polarity("excellent excellent terrible");
        assert!((-1.0..=1.0).contains(&polarity));
    }
}
