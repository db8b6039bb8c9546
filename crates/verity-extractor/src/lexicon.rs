//! Lexical pattern library used for claim classification
//!
//! The classifier is recall-oriented: any single signal is enough to treat
//! a sentence as claim-like. All tables live in a plain configuration value
//! and are compiled once - no global mutable lookup state.

use crate::error::ExtractorError;
use regex::{Regex, RegexSet};

/// Pattern and vocabulary tables for claim classification
///
/// Patterns are matched case-insensitively against lowercased sentences.
#[derive(Debug, Clone)]
pub struct ClaimLexicon {
    /// Regex patterns grouped by theme; one match marks a sentence claim-like
    pub claim_patterns: Vec<String>,

    /// Keywords whose bare presence marks a sentence claim-like
    pub importance_keywords: Vec<String>,

    /// Words that flag a claim as negated
    pub negation_words: Vec<String>,

    /// Hedging words that flag a claim as qualified
    pub qualifier_words: Vec<String>,
}

impl Default for ClaimLexicon {
    fn default() -> Self {
        Self {
            claim_patterns: vec![
                // Assertion verbs
                r"\b(is|are|was|were)\s+".to_string(),
                r"\b(has|have|had)\s+".to_string(),
                // Reporting verbs
                r"\b(says|claims|states|reports|shows|proves|demonstrates|indicates|suggests)\s+"
                    .to_string(),
                // Quantifiers and statistics
                r"\b(\d+%|\d+\s*(percent|billion|million|thousand|years|months|days|hours))\s+"
                    .to_string(),
                // Attribution phrases
                r"\b(according to|studies show|research indicates|data shows|evidence suggests|findings show)\s+"
                    .to_string(),
                // Health vocabulary
                r"\b(vaccine|covid|pandemic|disease|virus|treatment|drug|medicine|therapy|symptom)\s+"
                    .to_string(),
                // Institutions
                r"\b(government|company|organization|agency|institution|university|hospital|media)\s+"
                    .to_string(),
                // Climate vocabulary
                r"\b(temperature|climate|weather|global|warming|emissions|carbon|pollution)\s+"
                    .to_string(),
                // Causal connectives
                r"\b(cause|caused|causes|leading to|results in|leads to|contribute|contributed|contributing)\s+"
                    .to_string(),
                // Trend verbs
                r"\b(increase|increased|increases|decrease|decreased|decreases|rise|drop|fall)\s+"
                    .to_string(),
                // Evaluative adjectives
                r"\b(safe|unsafe|dangerous|effective|ineffective|works|fails|successful|failure)\s+"
                    .to_string(),
                // Risk vocabulary
                r"\b(risk|risks|benefit|benefits|side.?effect|adverse|harmful|beneficial)\s+"
                    .to_string(),
                // Novelty and research
                r"\b(new|latest|recent|study|research|report|investigation|analysis|findings)\s+"
                    .to_string(),
            ],
            importance_keywords: [
                "covid", "vaccine", "study", "research", "data", "report", "found", "showed",
                "discovered", "proved",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            negation_words: [
                "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "cannot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            qualifier_words: [
                "may",
                "might",
                "could",
                "possibly",
                "probably",
                "allegedly",
                "reportedly",
                "seems",
                "appears",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// A lexicon compiled into regex form, ready for classification
#[derive(Debug)]
pub struct CompiledLexicon {
    patterns: RegexSet,
    importance_keywords: Vec<String>,
    negation: Regex,
    qualifier: Regex,
    digit: Regex,
}

impl CompiledLexicon {
    /// Compile a lexicon; fails if any pattern is invalid
    pub fn compile(lexicon: &ClaimLexicon) -> Result<Self, ExtractorError> {
        let patterns = RegexSet::new(&lexicon.claim_patterns)?;
        let negation = word_alternation(&lexicon.negation_words)?;
        let qualifier = word_alternation(&lexicon.qualifier_words)?;
        let digit = Regex::new(r"\d")?;
        Ok(Self {
            patterns,
            importance_keywords: lexicon.importance_keywords.clone(),
            negation,
            qualifier,
            digit,
        })
    }

    /// Compile the default lexicon
    pub fn default_lexicon() -> Result<Self, ExtractorError> {
        Self::compile(&ClaimLexicon::default())
    }

    /// Heuristic: does this sentence look like a factual claim?
    ///
    /// A disjunction of signals over the lowercased sentence: any lexical
    /// pattern, any importance keyword, or any digit is sufficient.
    pub fn is_claim_sentence(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();

        if self.patterns.is_match(&lower) {
            return true;
        }

        if self
            .importance_keywords
            .iter()
            .any(|word| lower.contains(word.as_str()))
        {
            return true;
        }

        self.digit.is_match(sentence)
    }

    /// Whether the sentence contains a negation word
    pub fn is_negated(&self, sentence: &str) -> bool {
        self.negation.is_match(&sentence.to_lowercase())
    }

    /// Whether the sentence contains a hedging qualifier
    pub fn has_qualifier(&self, sentence: &str) -> bool {
        self.qualifier.is_match(&sentence.to_lowercase())
    }

    /// Whether the sentence contains any digit
    pub fn has_digit(&self, sentence: &str) -> bool {
        self.digit.is_match(sentence)
    }
}

/// Build a word-boundary alternation regex from a vocabulary list
fn word_alternation(words: &[String]) -> Result<Regex, ExtractorError> {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Ok(Regex::new(&format!(r"\b({})\b", escaped.join("|")))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> CompiledLexicon {
        CompiledLexicon::default_lexicon().unwrap()
    }

    #[test]
    fn test_assertion_verb_is_claim() {
        assert!(lexicon().is_claim_sentence("The vaccine is effective against the virus"));
    }

    #[test]
    fn test_digit_is_claim() {
        assert!(lexicon().is_claim_sentence("50 people attended"));
    }

    #[test]
    fn test_importance_keyword_is_claim() {
        assert!(lexicon().is_claim_sentence("They found something interesting there"));
    }

    #[test]
    fn test_non_claim_dropped() {
        assert!(!lexicon().is_claim_sentence("Hello there my friend"));
    }

    #[test]
    fn test_negation_detection_is_word_bounded() {
        let lex = lexicon();
        assert!(lex.is_negated("The vaccine is not effective at all."));
        // "november" contains "no" but is not a negation word
        assert!(!lex.is_negated("The meeting happened in november"));
    }

    #[test]
    fn test_qualifier_detection() {
        let lex = lexicon();
        assert!(lex.has_qualifier("The drug may reduce symptoms"));
        assert!(!lex.has_qualifier("The drug reduces symptoms"));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert!(lexicon().is_claim_sentence("THE VACCINE IS EFFECTIVE AGAINST THE VIRUS"));
    }
}
