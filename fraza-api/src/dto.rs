//! Serializable output types
//!
//! Owned mirrors of the core's borrowed token/sentence views, carrying
//! both byte and character offsets so downstream consumers in other
//! runtimes can index either way.

use serde::{Deserialize, Serialize};

use fraza_core::{Sentence, Token, TokenKind};

/// Kind tag in owned, serializable form. Serializes as the variant name
/// (`"Word"`, `"Abbr"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKindDto {
    /// Run of letters
    Word,
    /// Single punctuation or symbol character
    Punct,
    /// Digit run, possibly with an embedded separator
    Number,
    /// Known abbreviation with its trailing period
    Abbr,
    /// Single capital letter with its period
    Initial,
    /// `…` or a run of three or more dots
    Ellipsis,
    /// Unclassified symbol or emoticon
    Other,
}

impl From<TokenKind> for TokenKindDto {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Word => TokenKindDto::Word,
            TokenKind::Punct => TokenKindDto::Punct,
            TokenKind::Number => TokenKindDto::Number,
            TokenKind::Abbr => TokenKindDto::Abbr,
            TokenKind::Initial => TokenKindDto::Initial,
            TokenKind::Ellipsis => TokenKindDto::Ellipsis,
            TokenKind::Other => TokenKindDto::Other,
        }
    }
}

/// An owned, serializable token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDto {
    /// Covered substring
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub stop: usize,
    /// Character offset of the first character
    pub char_start: usize,
    /// Character offset one past the last character
    pub char_stop: usize,
    /// Kind tag
    pub kind: TokenKindDto,
}

/// An owned, serializable sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDto {
    /// Covered substring
    pub text: String,
    /// Byte offset of the first token
    pub start: usize,
    /// Byte offset one past the last consumed token
    pub stop: usize,
    /// Character offset of the first token
    pub char_start: usize,
    /// Character offset one past the last consumed token
    pub char_stop: usize,
    /// Index range into the token list: `[first, last)`
    pub token_range: (usize, usize),
    /// True when the sentence opens with a direct-speech dash
    pub direct_speech: bool,
}

/// Aggregate counters for one processed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Input length in bytes
    pub total_bytes: usize,
    /// Input length in characters
    pub total_chars: usize,
    /// Number of tokens produced
    pub token_count: usize,
    /// Number of sentences produced
    pub sentence_count: usize,
}

/// Full segmentation result in owned form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Tokens in source order
    pub tokens: Vec<TokenDto>,
    /// Sentences in source order
    pub sentences: Vec<SentenceDto>,
    /// Aggregate counters
    pub metadata: Metadata,
}

impl Output {
    /// Convert borrowed segmentation results into owned DTOs.
    ///
    /// Character offsets are computed in one pass over `text`, so the
    /// conversion stays linear in input length.
    pub fn build(text: &str, tokens: &[Token<'_>], sentences: &[Sentence<'_>]) -> Output {
        let chars = CharOffsets::new(text);

        let token_dtos = tokens
            .iter()
            .map(|t| TokenDto {
                text: t.text.to_string(),
                start: t.start,
                stop: t.stop,
                char_start: chars.at(t.start),
                char_stop: chars.at(t.stop),
                kind: t.kind.into(),
            })
            .collect();

        let sentence_dtos = sentences
            .iter()
            .map(|s| SentenceDto {
                text: s.text.to_string(),
                start: s.start,
                stop: s.stop,
                char_start: chars.at(s.start),
                char_stop: chars.at(s.stop),
                token_range: (s.tokens.start, s.tokens.end),
                direct_speech: s.direct_speech,
            })
            .collect();

        Output {
            tokens: token_dtos,
            sentences: sentence_dtos,
            metadata: Metadata {
                total_bytes: text.len(),
                total_chars: chars.total(),
                token_count: tokens.len(),
                sentence_count: sentences.len(),
            },
        }
    }
}

/// Byte offset to character offset mapping, built once per conversion.
struct CharOffsets {
    // char_at[i] = character index of the char starting at byte i
    by_byte: Vec<usize>,
    total: usize,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let mut by_byte = vec![0; text.len() + 1];
        let mut count = 0;
        for (idx, ch) in text.char_indices() {
            for b in idx..idx + ch.len_utf8() {
                by_byte[b] = count;
            }
            count += 1;
        }
        by_byte[text.len()] = count;
        CharOffsets {
            by_byte,
            total: count,
        }
    }

    fn at(&self, byte: usize) -> usize {
        self.by_byte[byte]
    }

    fn total(&self) -> usize {
        self.total
    }
}
