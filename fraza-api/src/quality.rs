//! Segmentation quality assessment
//!
//! A stateless consumer of segmenter output: aggregate statistics plus a
//! penalty-based score flagging sentences that look like segmentation
//! errors (too short, lowercase start, abbreviation-only fragments).

use serde::{Deserialize, Serialize};

use fraza_core::{Sentence, Token, TokenKind};

/// A sentence flagged as a likely segmentation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anomaly {
    /// Sentence shorter than three characters
    TooShort {
        /// Index into the sentence sequence
        sentence: usize,
    },
    /// Sentence starts with a lowercase letter
    LowercaseStart {
        /// Index into the sentence sequence
        sentence: usize,
    },
    /// Near-empty sentence consisting of an abbreviation
    AbbreviationOnly {
        /// Index into the sentence sequence
        sentence: usize,
    },
}

impl Anomaly {
    fn penalty(self) -> f64 {
        match self {
            Anomaly::TooShort { .. } => 0.10,
            Anomaly::LowercaseStart { .. } => 0.15,
            Anomaly::AbbreviationOnly { .. } => 0.20,
        }
    }
}

/// Aggregate quality statistics over one segmentation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Number of sentences
    pub sentence_count: usize,
    /// Number of tokens
    pub token_count: usize,
    /// Mean sentence length in characters
    pub mean_sentence_chars: f64,
    /// Mean tokens per sentence
    pub tokens_per_sentence: f64,
    /// Score in `[0, 1]`; 1.0 means no anomalies
    pub score: f64,
    /// Sentences that look mis-segmented
    pub anomalies: Vec<Anomaly>,
}

impl QualityReport {
    /// Assess segmenter output. Empty input scores 0.0 with no anomalies.
    ///
    /// `tokens` should be the slice the sentences were segmented from;
    /// a sentence whose token range falls outside it is scored from its
    /// text alone.
    pub fn assess(sentences: &[Sentence<'_>], tokens: &[Token<'_>]) -> QualityReport {
        if sentences.is_empty() {
            return QualityReport {
                sentence_count: 0,
                token_count: tokens.len(),
                mean_sentence_chars: 0.0,
                tokens_per_sentence: 0.0,
                score: 0.0,
                anomalies: Vec::new(),
            };
        }

        let mut anomalies = Vec::new();
        let mut total_chars = 0usize;

        for (index, sentence) in sentences.iter().enumerate() {
            let chars = sentence.text.chars().count();
            total_chars += chars;

            if chars < 3 {
                anomalies.push(Anomaly::TooShort { sentence: index });
            }
            if sentence
                .text
                .chars()
                .next()
                .is_some_and(char::is_lowercase)
            {
                anomalies.push(Anomaly::LowercaseStart { sentence: index });
            }
            let sentence_tokens = tokens.get(sentence.tokens.clone()).unwrap_or(&[]);
            if chars < 10 && contains_abbreviation(sentence_tokens) {
                anomalies.push(Anomaly::AbbreviationOnly { sentence: index });
            }
        }

        let penalties: f64 = anomalies.iter().map(|a| a.penalty()).sum();
        let count = sentences.len();

        QualityReport {
            sentence_count: count,
            token_count: tokens.len(),
            mean_sentence_chars: total_chars as f64 / count as f64,
            tokens_per_sentence: tokens.len() as f64 / count as f64,
            score: (1.0 - penalties).max(0.0),
            anomalies,
        }
    }
}

fn contains_abbreviation(tokens: &[Token<'_>]) -> bool {
    tokens.iter().any(|t| t.kind == TokenKind::Abbr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraza_core::{Segmenter, Tokenizer};

    fn assess(text: &str) -> QualityReport {
        let rules = crate::RuleProfile::russian().build_rules().unwrap();
        let tokens: Vec<_> = Tokenizer::new(text, &rules).collect();
        let sentences = Segmenter::new(&rules).segment_tokens(text, &tokens);
        QualityReport::assess(&sentences, &tokens)
    }

    #[test]
    fn test_clean_text_scores_full() {
        let report = assess("Это первое предложение. Это второе предложение.");
        assert_eq!(report.sentence_count, 2);
        assert!(report.anomalies.is_empty());
        assert_eq!(report.score, 1.0);
        assert!(report.mean_sentence_chars > 10.0);
        assert!(report.tokens_per_sentence > 2.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let report = assess("");
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.score, 0.0);
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_short_sentence_penalized() {
        let report = assess("О! Сегодня будет хорошая погода.");
        assert!(report
            .anomalies
            .contains(&Anomaly::TooShort { sentence: 0 }));
        assert!(report.score < 1.0);
    }

    #[test]
    fn test_foreign_token_slice_does_not_panic() {
        let rules = crate::RuleProfile::russian().build_rules().unwrap();
        let text = "Скоро весна. Да.";
        let tokens: Vec<_> = Tokenizer::new(text, &rules).collect();
        let sentences = Segmenter::new(&rules).segment_tokens(text, &tokens);

        // Token ranges point past the end of an empty slice; the short
        // second sentence is still scored from its text.
        let report = QualityReport::assess(&sentences, &[]);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.token_count, 0);
        assert!(report.score <= 1.0);
    }

    #[test]
    fn test_score_never_negative() {
        // Every fragment trips at least one penalty
        let report = assess("а! б! в! г! д! е! ж! з! и! к!");
        assert!(report.score >= 0.0);
    }
}
