//! Public API for Fraza Russian text segmentation
//!
//! This crate wraps the `fraza-core` engine with the pieces a pipeline
//! needs around it: an embedded Russian rule profile, a configuration
//! builder, owned serializable output types and a quality assessor.
//!
//! ```
//! let segmenter = fraza_api::TextSegmenter::new()?;
//! let sentences = segmenter.segment("Он родился в 1799 г. в Москве. Поэт.");
//! assert_eq!(sentences.len(), 2);
//! # Ok::<(), fraza_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod profile;
pub mod quality;

use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Metadata, Output, SentenceDto, TokenDto, TokenKindDto};
pub use error::{ApiError, Result};
pub use profile::RuleProfile;
pub use quality::{Anomaly, QualityReport};

// Core types surface directly in this API
pub use fraza_core::{BoundaryRuleSet, Sentence, Token, TokenKind};

use fraza_core::{Segmenter, Tokenizer};

/// Main entry point for tokenization and sentence segmentation.
///
/// Holds an immutable rule set behind an `Arc`, so clones are cheap and a
/// single instance can serve concurrent calls from multiple threads.
#[derive(Debug, Clone)]
pub struct TextSegmenter {
    rules: Arc<BoundaryRuleSet>,
    config: Config,
}

impl TextSegmenter {
    /// Segmenter with the embedded Russian profile and default heuristics.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Segmenter with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let rules = if config.extra_abbreviations.is_empty() {
            config.profile.build_rules()?
        } else {
            // Fold the extra entries into a copy of the profile list
            let mut profile = config.profile.clone();
            profile
                .abbreviations
                .categories
                .entry("custom".to_string())
                .or_default()
                .extend(config.extra_abbreviations.iter().cloned());
            profile.build_rules()?
        };

        Ok(TextSegmenter {
            rules: Arc::new(rules),
            config,
        })
    }

    /// Tokenize `text`; offsets are relative to its start.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        Tokenizer::new(text, &self.rules).collect()
    }

    /// Tokenize and segment `text` into sentences.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        self.segmenter().segment(text)
    }

    /// Segment pre-tokenized input, reusing an earlier token pass.
    /// `tokens` must have been produced from `text`.
    pub fn segment_tokens<'a>(&self, text: &'a str, tokens: &[Token<'a>]) -> Vec<Sentence<'a>> {
        self.segmenter().segment_tokens(text, tokens)
    }

    /// Run the full pipeline and return owned, serializable output.
    pub fn process(&self, text: &str) -> Output {
        let tokens = self.tokenize(text);
        let sentences = self.segment_tokens(text, &tokens);
        Output::build(text, &tokens, &sentences)
    }

    /// Run the full pipeline and score the result.
    pub fn assess(&self, text: &str) -> QualityReport {
        let tokens = self.tokenize(text);
        let sentences = self.segment_tokens(text, &tokens);
        QualityReport::assess(&sentences, &tokens)
    }

    /// The rule set in use.
    pub fn rules(&self) -> &BoundaryRuleSet {
        &self.rules
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.rules).lowercase_continuation(self.config.lowercase_continuation)
    }
}

// Convenience functions

/// Tokenize `text` with the embedded Russian profile.
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>> {
    let segmenter = TextSegmenter::new()?;
    Ok(segmenter.tokenize(text))
}

/// Segment `text` into sentences with the embedded Russian profile.
pub fn sentenize(text: &str) -> Result<Vec<Sentence<'_>>> {
    let segmenter = TextSegmenter::new()?;
    Ok(segmenter.segment(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_segmenter() {
        let segmenter = TextSegmenter::new().unwrap();
        let sentences = segmenter.segment("Первое. Второе.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_extra_abbreviations() {
        let config = Config::builder().abbreviations(["тел"]).build().unwrap();
        let segmenter = TextSegmenter::with_config(config).unwrap();
        let tokens = segmenter.tokenize("тел. 555-01-02");
        assert_eq!(tokens[0].text, "тел.");
        assert_eq!(tokens[0].kind, TokenKind::Abbr);
    }

    #[test]
    fn test_convenience_functions() {
        let tokens = tokenize("Привет, мир!").unwrap();
        assert_eq!(tokens.len(), 4);

        let sentences = sentenize("Привет! Как дела?").unwrap();
        assert_eq!(sentences.len(), 2);
    }
}
