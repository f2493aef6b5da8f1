//! Token types
//!
//! A [`Token`] is the smallest segmented unit: a borrowed view into the
//! source text plus half-open byte offsets and a kind tag. Tokens are
//! created once by the tokenizer and never mutated.

/// Kind tag assigned to a token by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of letters, possibly hyphen- or underscore-joined
    Word,
    /// Single punctuation or symbol character
    Punct,
    /// Digit run, possibly with an embedded decimal/ratio separator
    Number,
    /// Known abbreviation with its trailing period, e.g. `ул.`
    Abbr,
    /// Single capital letter with its period, e.g. `А.`
    Initial,
    /// `…` or a run of three or more dots
    Ellipsis,
    /// Unclassified symbol (emoji, control pictures, ...)
    Other,
}

/// A segmented unit with exact offsets into the source text.
///
/// `start`/`stop` are half-open byte offsets, always on UTF-8 character
/// boundaries, so `&source[token.start..token.stop] == token.text` holds
/// for the text the token was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Exact substring covered, borrowed from the source
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub stop: usize,
    /// Kind tag
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub(crate) fn new(text: &'a str, start: usize, stop: usize, kind: TokenKind) -> Self {
        debug_assert!(start < stop);
        debug_assert_eq!(text.len(), stop - start);
        Token {
            text,
            start,
            stop,
            kind,
        }
    }

    /// The single character of a one-character token, if it is one.
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            Some(first)
        } else {
            None
        }
    }

    /// True when the first character is a lowercase letter.
    pub fn starts_lowercase(&self) -> bool {
        self.text
            .chars()
            .next()
            .map(char::is_lowercase)
            .unwrap_or(false)
    }

    /// True for tokens that are candidate sentence terminators:
    /// a `.`/`!`/`?` punctuation token or an ellipsis.
    pub fn is_terminal(&self) -> bool {
        match self.kind {
            TokenKind::Ellipsis => true,
            TokenKind::Punct => matches!(self.single_char(), Some('.' | '!' | '?')),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char() {
        let tok = Token::new(".", 5, 6, TokenKind::Punct);
        assert_eq!(tok.single_char(), Some('.'));

        let tok = Token::new("ул.", 0, 5, TokenKind::Abbr);
        assert_eq!(tok.single_char(), None);
    }

    #[test]
    fn test_is_terminal() {
        assert!(Token::new("!", 0, 1, TokenKind::Punct).is_terminal());
        assert!(Token::new("...", 0, 3, TokenKind::Ellipsis).is_terminal());
        assert!(!Token::new(",", 0, 1, TokenKind::Punct).is_terminal());
        assert!(!Token::new("г.", 0, 3, TokenKind::Abbr).is_terminal());
    }

    #[test]
    fn test_starts_lowercase() {
        assert!(Token::new("и", 0, 2, TokenKind::Word).starts_lowercase());
        assert!(!Token::new("Москва", 0, 12, TokenKind::Word).starts_lowercase());
        assert!(!Token::new("1", 0, 1, TokenKind::Number).starts_lowercase());
    }
}
