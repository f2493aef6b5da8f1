//! Sentence segmenter
//!
//! Consumes the token sequence in one pass and decides, for every candidate
//! boundary token, whether it closes the current sentence or is blocked by
//! context. All decisions use the current token plus one token of lookahead;
//! there is no backward scanning.

use std::ops::Range;

use smallvec::SmallVec;
use tracing::debug;

use crate::rules::{BoundaryRuleSet, EnclosureRole};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// A contiguous run of tokens treated as one linguistic sentence.
///
/// `tokens` is an index range into the token slice the sentence was built
/// from; `start`/`stop` span the first token through the last consumed
/// trailing punctuation or closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Exact substring covered, borrowed from the source
    pub text: &'a str,
    /// Byte offset of the first token
    pub start: usize,
    /// Byte offset one past the last consumed token
    pub stop: usize,
    /// Index range into the token sequence
    pub tokens: Range<usize>,
    /// True when the sentence opens with a direct-speech dash
    pub direct_speech: bool,
}

/// Scanner state. `AtCandidateBoundary` is entered on every terminal token
/// at delimiter depth zero and resolved immediately with one token of
/// lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InSentence,
    AtCandidateBoundary {
        /// Token before the terminal, if any
        prev: Option<usize>,
        /// The terminal token under decision
        term: usize,
    },
    InsideEnclosure,
    AfterDirectSpeechDash,
}

/// Why a candidate boundary was kept inside the current sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Preceding token is a known abbreviation
    Abbreviation,
    /// Preceding token is an initial
    Initial,
    /// Next token starts with a lowercase letter
    LowercaseContinuation,
}

/// Outcome of a boundary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Close the sentence at this token
    Confirm,
    /// Stay in the current sentence
    Block(BlockReason),
}

/// Decide a candidate boundary from its immediate neighborhood.
///
/// `!` and `?` are stronger signals than `.`/ellipsis and override the
/// lowercase-continuation heuristic; the heuristic itself can be switched
/// off via [`Segmenter::lowercase_continuation`].
pub fn decide(
    prev: Option<&Token<'_>>,
    terminal: &Token<'_>,
    next: Option<&Token<'_>>,
    lowercase_continuation: bool,
) -> Decision {
    if let Some(prev) = prev {
        match prev.kind {
            TokenKind::Abbr => return Decision::Block(BlockReason::Abbreviation),
            TokenKind::Initial => return Decision::Block(BlockReason::Initial),
            _ => {}
        }
    }
    let strong = matches!(terminal.single_char(), Some('!' | '?'));
    if !strong && lowercase_continuation {
        if let Some(next) = next {
            if next.starts_lowercase() {
                return Decision::Block(BlockReason::LowercaseContinuation);
            }
        }
    }
    Decision::Confirm
}

/// One-pass sentence segmenter over a rule set.
#[derive(Debug, Clone)]
pub struct Segmenter<'r> {
    rules: &'r BoundaryRuleSet,
    lowercase_continuation: bool,
}

impl<'r> Segmenter<'r> {
    /// Segmenter with the lowercase-continuation heuristic enabled.
    pub fn new(rules: &'r BoundaryRuleSet) -> Self {
        Segmenter {
            rules,
            lowercase_continuation: true,
        }
    }

    /// Enable or disable blocking on a lowercase next token.
    pub fn lowercase_continuation(mut self, enabled: bool) -> Self {
        self.lowercase_continuation = enabled;
        self
    }

    /// Tokenize `text` and segment the result.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let tokens: Vec<Token<'a>> = Tokenizer::new(text, self.rules).collect();
        self.segment_tokens(text, &tokens)
    }

    /// Segment pre-tokenized input. `tokens` must have been produced from
    /// `text` (offsets are resolved against it).
    pub fn segment_tokens<'a>(&self, text: &'a str, tokens: &[Token<'a>]) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut stack: SmallVec<[char; 4]> = SmallVec::new();
        let mut state = State::InSentence;
        let mut first: Option<usize> = None;
        let mut direct_speech = false;

        let mut i = 0;
        while i < tokens.len() {
            let tok = &tokens[i];
            debug_assert!(tok.stop <= text.len());

            if first.is_none() {
                first = Some(i);
                if self.is_direct_speech_dash(tok) {
                    direct_speech = true;
                    state = State::AfterDirectSpeechDash;
                } else {
                    state = State::InSentence;
                }
            } else if state == State::AfterDirectSpeechDash {
                // The dash only flags the sentence; scanning resumes as usual.
                state = State::InSentence;
            }

            let closed = apply_enclosure(&mut stack, tok, self.rules);
            if !stack.is_empty() {
                state = State::InsideEnclosure;
                i += 1;
                continue;
            }
            if state == State::InsideEnclosure {
                state = State::InSentence;
            }

            // A terminal token at depth zero is a candidate. A closer that
            // just returned the depth to zero re-evaluates the terminal it
            // encloses, so «Стой!» ends where the quote ends.
            if tok.is_terminal() {
                state = State::AtCandidateBoundary {
                    prev: i.checked_sub(1),
                    term: i,
                };
            } else if closed && i >= 1 && tokens[i - 1].is_terminal() {
                state = State::AtCandidateBoundary {
                    prev: i.checked_sub(2),
                    term: i - 1,
                };
            }

            if let State::AtCandidateBoundary { prev, term } = state {
                let prev = prev.map(|p| &tokens[p]);
                let terminal = &tokens[term];
                match decide(prev, terminal, tokens.get(i + 1), self.lowercase_continuation) {
                    Decision::Confirm => {
                        let last = absorb_trailing(tokens, i, self.rules);
                        if let Some(f) = first.take() {
                            debug!(
                                start = tokens[f].start,
                                stop = tokens[last].stop,
                                "sentence boundary confirmed"
                            );
                            sentences.push(make_sentence(text, tokens, f..last + 1, direct_speech));
                        }
                        direct_speech = false;
                        state = State::InSentence;
                        i = last + 1;
                        continue;
                    }
                    Decision::Block(reason) => {
                        debug!(?reason, at = tok.stop, "sentence boundary blocked");
                        state = State::InSentence;
                    }
                }
            }

            i += 1;
        }

        // End of tokens closes the final sentence, trailing punctuation or
        // not; an unclosed delimiter is treated as closed here.
        if let Some(f) = first {
            sentences.push(make_sentence(text, tokens, f..tokens.len(), direct_speech));
        }

        sentences
    }

    fn is_direct_speech_dash(&self, tok: &Token<'_>) -> bool {
        tok.kind == TokenKind::Punct
            && tok
                .single_char()
                .is_some_and(|c| self.rules.is_direct_speech_marker(c))
    }
}

/// Push/pop the pending-closer stack for a delimiter token. Returns true
/// when this token popped the stack back to empty. Unmatched closers are
/// ignored.
fn apply_enclosure(
    stack: &mut SmallVec<[char; 4]>,
    tok: &Token<'_>,
    rules: &BoundaryRuleSet,
) -> bool {
    if tok.kind != TokenKind::Punct {
        return false;
    }
    let Some(ch) = tok.single_char() else {
        return false;
    };
    let Some(enc) = rules.enclosure(ch) else {
        return false;
    };
    match enc.role {
        EnclosureRole::Open => {
            stack.push(enc.close);
            false
        }
        EnclosureRole::Close => {
            if stack.last() == Some(&ch) {
                stack.pop();
                stack.is_empty()
            } else {
                false
            }
        }
        EnclosureRole::Symmetric => {
            if stack.last() == Some(&ch) {
                stack.pop();
                stack.is_empty()
            } else {
                stack.push(ch);
                false
            }
        }
    }
}

/// Extend a confirmed boundary over immediately adjacent (no gap) extra
/// terminators and closing delimiters, so `?!` and `».` endings stay with
/// their sentence.
fn absorb_trailing(tokens: &[Token<'_>], mut last: usize, rules: &BoundaryRuleSet) -> usize {
    while let Some(next) = tokens.get(last + 1) {
        if next.start != tokens[last].stop {
            break;
        }
        let closer = next.kind == TokenKind::Punct
            && next
                .single_char()
                .and_then(|c| rules.enclosure(c))
                .is_some_and(|e| e.role == EnclosureRole::Close);
        if next.is_terminal() || closer {
            last += 1;
        } else {
            break;
        }
    }
    last
}

fn make_sentence<'a>(
    text: &'a str,
    tokens: &[Token<'a>],
    range: Range<usize>,
    direct_speech: bool,
) -> Sentence<'a> {
    let start = tokens[range.start].start;
    let stop = tokens[range.end - 1].stop;
    Sentence {
        text: &text[start..stop],
        start,
        stop,
        tokens: range,
        direct_speech,
    }
}
