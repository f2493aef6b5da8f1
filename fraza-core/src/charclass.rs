//! Character classification
//!
//! Total mapping from codepoints to the semantic classes the tokenizer and
//! segmenter operate on. Every codepoint maps to exactly one class, with
//! [`CharClass::Other`] as the fallback.

/// Semantic class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Alphabetic character (any script; case is queried via `char` methods)
    Letter,
    /// Decimal digit
    Digit,
    /// Whitespace, including newlines
    Space,
    /// Sentence-ending punctuation: `.` `!` `?`
    Terminator,
    /// The single-codepoint ellipsis `…`
    Ellipsis,
    /// Quote mark, straight or typographic: `"` `'` `«` `»` `„` `“` `”`
    Quote,
    /// Hyphen joining word parts: `-` `‐`
    Hyphen,
    /// En/em dash, used for direct speech: `–` `—`
    Dash,
    /// Opening bracket: `(` `[` `{`
    Open,
    /// Closing bracket: `)` `]` `}`
    Close,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classify a single character.
    pub fn of(ch: char) -> CharClass {
        match ch {
            '.' | '!' | '?' => CharClass::Terminator,
            '…' => CharClass::Ellipsis,
            '"' | '\'' | '«' | '»' | '„' | '“' | '”' => CharClass::Quote,
            '-' | '‐' => CharClass::Hyphen,
            '–' | '—' => CharClass::Dash,
            '(' | '[' | '{' => CharClass::Open,
            ')' | ']' | '}' => CharClass::Close,
            _ if ch.is_whitespace() => CharClass::Space,
            _ if ch.is_numeric() => CharClass::Digit,
            _ if ch.is_alphabetic() => CharClass::Letter,
            _ => CharClass::Other,
        }
    }
}
