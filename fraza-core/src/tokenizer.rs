//! Tokenizer
//!
//! Single left-to-right scan over the source text with a bounded lookahead
//! of a few characters. Multi-character units (decimal numbers, known
//! abbreviations, initials, ellipses, hyphen-joined words) are merged into
//! one token at scan time, so downstream boundary logic never has to look
//! backwards past one token.

use tracing::trace;

use crate::charclass::CharClass;
use crate::rules::BoundaryRuleSet;
use crate::token::{Token, TokenKind};

/// Lazy token iterator over `text`.
///
/// Restartable by constructing a fresh instance; a given instance is a
/// single forward pass. Offsets are derived solely from the scan position,
/// so identical input always yields identical tokens.
pub struct Tokenizer<'a, 'r> {
    text: &'a str,
    rules: &'r BoundaryRuleSet,
    pos: usize,
}

impl<'a, 'r> Tokenizer<'a, 'r> {
    /// Start a scan at offset 0.
    pub fn new(text: &'a str, rules: &'r BoundaryRuleSet) -> Self {
        Tokenizer {
            text,
            rules,
            pos: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn emit(&mut self, len: usize, kind: TokenKind) -> Token<'a> {
        let start = self.pos;
        let stop = start + len;
        self.pos = stop;
        let token = Token::new(&self.text[start..stop], start, stop, kind);
        trace!(start, stop, ?kind, text = token.text, "token");
        token
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        // Whitespace delimits runs and produces nothing.
        while let Some(ch) = self.rest().chars().next() {
            if CharClass::of(ch) == CharClass::Space {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }

        let rest = self.rest();
        let ch = rest.chars().next()?;

        let token = match CharClass::of(ch) {
            CharClass::Letter => {
                // Known abbreviations win over the initials rule so that
                // multi-segment entries like "т.е." stay whole.
                if let Some(len) = self.rules.abbreviation_prefix(rest) {
                    self.emit(len, TokenKind::Abbr)
                } else if let Some(len) = initial_len(rest, self.rules, ch) {
                    self.emit(len, TokenKind::Initial)
                } else {
                    self.emit(word_len(rest), TokenKind::Word)
                }
            }
            CharClass::Digit => self.emit(number_len(rest), TokenKind::Number),
            CharClass::Ellipsis => self.emit(ch.len_utf8(), TokenKind::Ellipsis),
            CharClass::Terminator if ch == '.' => {
                let dots = rest.chars().take_while(|&c| c == '.').count();
                if dots >= 3 {
                    self.emit(dots, TokenKind::Ellipsis)
                } else {
                    self.emit(1, TokenKind::Punct)
                }
            }
            CharClass::Other => {
                if let Some(len) = smiley_len(rest) {
                    self.emit(len, TokenKind::Other)
                } else {
                    self.emit(ch.len_utf8(), TokenKind::Other)
                }
            }
            _ => self.emit(ch.len_utf8(), TokenKind::Punct),
        };

        Some(token)
    }
}

/// Characters examined past an initial's period when looking for the rest
/// of the name.
const INITIAL_LOOKAHEAD: usize = 8;

/// Byte length of an initial (`А.`) at the start of `rest`, if the first
/// letter stands alone and is immediately followed by a period.
///
/// An initial abbreviates a name, so the window after the period must hold
/// another capital (`А. С. Пушкин`, `М.Видео`). Without one the period
/// stays a separate punctuation token and can end a sentence.
fn initial_len(rest: &str, rules: &BoundaryRuleSet, first: char) -> Option<usize> {
    if !rules.is_initial_letter(first) {
        return None;
    }
    let after = first.len_utf8();
    if !rest[after..].starts_with('.') {
        return None;
    }
    let len = after + 1;
    for ch in rest[len..].chars().take(INITIAL_LOOKAHEAD) {
        match CharClass::of(ch) {
            CharClass::Space => continue,
            CharClass::Letter if ch.is_uppercase() => return Some(len),
            _ => return None,
        }
    }
    None
}

/// Byte length of a word run at the start of `rest`. A single hyphen or
/// underscore between letters joins the run (`что-то`, `К_тому_же`).
fn word_len(rest: &str) -> usize {
    let mut len = 0;
    let mut chars = rest.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        match CharClass::of(ch) {
            CharClass::Letter => len = idx + ch.len_utf8(),
            CharClass::Hyphen | CharClass::Other if joins_word(ch) => {
                match chars.peek() {
                    Some((_, next)) if CharClass::of(*next) == CharClass::Letter => continue,
                    _ => break,
                }
            }
            _ => break,
        }
    }
    len
}

fn joins_word(ch: char) -> bool {
    matches!(ch, '-' | '‐' | '_')
}

/// Byte length of a number at the start of `rest`. Digit runs joined by a
/// single `.` `,` `:` or `/` with digits on both sides merge into one
/// token (`3.14`, `1,5`, `10:30`, `1/2`).
fn number_len(rest: &str) -> usize {
    let mut len = digit_run(rest);
    loop {
        let tail = &rest[len..];
        let sep = match tail.chars().next() {
            Some(c @ ('.' | ',' | ':' | '/')) => c,
            _ => break,
        };
        let after = digit_run(&tail[sep.len_utf8()..]);
        if after == 0 {
            break;
        }
        len += sep.len_utf8() + after;
    }
    len
}

/// Byte length of an emoticon at the start of `rest`: eyes (`:` `;` `=`),
/// an optional `-` nose, and one or more bracket mouths, so `:)`, `;-(`
/// and `:)))` each stay one token. All constituent characters are ASCII.
fn smiley_len(rest: &str) -> Option<usize> {
    let mut chars = rest.chars().peekable();
    if !matches!(chars.next()?, ':' | ';' | '=') {
        return None;
    }
    let mut len = 1;
    if chars.peek() == Some(&'-') {
        chars.next();
        len += 1;
    }
    let mut mouths = 0;
    while let Some(&c) = chars.peek() {
        if c != ')' && c != '(' {
            break;
        }
        chars.next();
        mouths += 1;
    }
    if mouths == 0 {
        return None;
    }
    Some(len + mouths)
}

fn digit_run(s: &str) -> usize {
    s.char_indices()
        .take_while(|&(_, c)| CharClass::of(c) == CharClass::Digit)
        .map(|(idx, c)| idx + c.len_utf8())
        .last()
        .unwrap_or(0)
}
