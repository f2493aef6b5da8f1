//! Tokenization and sentence-boundary segmentation for Russian text
//!
//! The crate splits raw text into two layers: position-exact [`Token`]s
//! (words, punctuation, numbers, abbreviations, initials, ellipses) and
//! [`Sentence`]s built from contiguous token ranges. The hard part is the
//! boundary decision: whether a `.`/`!`/`?`/ellipsis terminates a sentence
//! or is blocked by an abbreviation, an initial, a decimal number, a
//! direct-speech dash or an unclosed quote/bracket pair.
//!
//! Everything runs in a single forward pass with a bounded lookahead of one
//! token; exact byte offsets into the source are preserved on every unit.
//! Rule data (abbreviations, patterns, delimiter pairs) is handed in
//! pre-parsed via [`BoundaryRuleSet::load`] — the core performs no I/O.
//!
//! ```
//! use fraza_core::{BoundaryRuleSet, EnclosurePair, Segmenter};
//!
//! let rules = BoundaryRuleSet::load(
//!     vec!["ул.".to_string()],
//!     "[А-ЯЁA-Z]",
//!     ['—'],
//!     vec![EnclosurePair::new('«', '»')],
//!     vec![EnclosurePair::new('(', ')')],
//! )?;
//!
//! let sentences = Segmenter::new(&rules).segment("Он живёт на ул. Ленина. Это центр.");
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].text, "Он живёт на ул. Ленина.");
//! # Ok::<(), fraza_core::CoreError>(())
//! ```

#![warn(missing_docs)]

pub mod charclass;
pub mod error;
pub mod rules;
pub mod segmenter;
pub mod token;
pub mod tokenizer;

pub use charclass::CharClass;
pub use error::{CoreError, Result};
pub use rules::{BoundaryRuleSet, Enclosure, EnclosurePair, EnclosureRole};
pub use segmenter::{decide, BlockReason, Decision, Segmenter, Sentence};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize `text` with the given rule set, collecting the lazy scan.
pub fn tokenize<'a>(text: &'a str, rules: &BoundaryRuleSet) -> Vec<Token<'a>> {
    Tokenizer::new(text, rules).collect()
}

/// Tokenize and segment `text` in one call.
pub fn segment<'a>(text: &'a str, rules: &BoundaryRuleSet) -> Vec<Sentence<'a>> {
    Segmenter::new(rules).segment(text)
}
