//! Boundary rule set
//!
//! Externally supplied segmentation knowledge: abbreviations, the initials
//! pattern, direct-speech markers and matched delimiter pairs. The set is
//! immutable after [`BoundaryRuleSet::load`] and safe to share across
//! threads for concurrent read-only use.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::{CoreError, Result};

/// Trie node for forward longest-match abbreviation lookup.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

/// Trie over abbreviation strings (trailing period included, e.g. `"г."`,
/// `"т.д."`), matched forward against a prefix of the remaining text.
#[derive(Debug, Clone, Default)]
struct AbbrTrie {
    root: TrieNode,
}

impl AbbrTrie {
    fn insert(&mut self, abbreviation: &str) {
        let mut current = &mut self.root;
        for ch in abbreviation.chars() {
            current = current.children.entry(ch).or_default();
        }
        current.is_end = true;
    }

    /// Byte length of the longest abbreviation that is a prefix of `text`,
    /// if any. Entries always end with a period, so a match never stops
    /// mid-word.
    fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut current = &self.root;
        let mut best = None;
        for (idx, ch) in text.char_indices() {
            match current.children.get(&ch) {
                Some(node) => {
                    current = node;
                    if current.is_end {
                        best = Some(idx + ch.len_utf8());
                    }
                }
                None => break,
            }
        }
        best
    }
}

/// Role a delimiter character plays in its pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureRole {
    /// Distinct opening delimiter, e.g. `«` or `(`
    Open,
    /// Distinct closing delimiter, e.g. `»` or `)`
    Close,
    /// Same character opens and closes, e.g. `"`
    Symmetric,
}

/// Lookup result for a delimiter character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enclosure {
    /// Whether the character opens, closes, or toggles
    pub role: EnclosureRole,
    /// The closer this character expects (itself for closers/symmetric)
    pub close: char,
}

/// A matched delimiter pair. `symmetric` marks pairs whose opener and
/// closer are the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosurePair {
    /// Opening character
    pub open: char,
    /// Closing character
    pub close: char,
    /// True when `open == close` semantics apply (straight quotes)
    pub symmetric: bool,
}

impl EnclosurePair {
    /// An asymmetric pair such as `(` / `)` or `«` / `»`.
    pub fn new(open: char, close: char) -> Self {
        EnclosurePair {
            open,
            close,
            symmetric: false,
        }
    }

    /// A symmetric pair such as `"` / `"`.
    pub fn symmetric(ch: char) -> Self {
        EnclosurePair {
            open: ch,
            close: ch,
            symmetric: true,
        }
    }
}

/// Immutable segmentation knowledge handed to the core at initialization.
///
/// Construction is the only fallible operation in the crate; segmentation
/// itself never fails. The set never changes after `load`, so a single
/// instance can back concurrent segmentation calls.
#[derive(Debug, Clone)]
pub struct BoundaryRuleSet {
    abbreviations: AbbrTrie,
    initials: Regex,
    direct_speech: HashSet<char>,
    enclosures: HashMap<char, Enclosure>,
}

impl BoundaryRuleSet {
    /// Build a rule set from pre-parsed in-memory data.
    ///
    /// `abbreviations` must keep their trailing period (`"ул."` not `"ул"`);
    /// an entry without one is rejected. `initials_pattern` is a regex that
    /// must match exactly the letters that can form an initial; it is
    /// anchored here, so pass the character class only (e.g. `[А-ЯЁA-Z]`).
    pub fn load<A, D>(
        abbreviations: A,
        initials_pattern: &str,
        direct_speech_markers: D,
        quote_pairs: Vec<EnclosurePair>,
        bracket_pairs: Vec<EnclosurePair>,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = String>,
        D: IntoIterator<Item = char>,
    {
        let mut trie = AbbrTrie::default();
        for entry in abbreviations {
            if !entry.ends_with('.') {
                return Err(CoreError::InvalidRule(format!(
                    "abbreviation '{entry}' is missing its trailing period"
                )));
            }
            trie.insert(&entry);
        }

        let initials = Regex::new(&format!("^(?:{initials_pattern})$"))?;

        let mut enclosures = HashMap::new();
        for pair in quote_pairs.into_iter().chain(bracket_pairs) {
            if pair.symmetric || pair.open == pair.close {
                enclosures.insert(
                    pair.open,
                    Enclosure {
                        role: EnclosureRole::Symmetric,
                        close: pair.open,
                    },
                );
            } else {
                enclosures.insert(
                    pair.open,
                    Enclosure {
                        role: EnclosureRole::Open,
                        close: pair.close,
                    },
                );
                enclosures.insert(
                    pair.close,
                    Enclosure {
                        role: EnclosureRole::Close,
                        close: pair.close,
                    },
                );
            }
        }

        Ok(BoundaryRuleSet {
            abbreviations: trie,
            initials,
            direct_speech: direct_speech_markers.into_iter().collect(),
            enclosures,
        })
    }

    /// Byte length of the longest known abbreviation at the start of `text`.
    pub fn abbreviation_prefix(&self, text: &str) -> Option<usize> {
        self.abbreviations.longest_prefix(text)
    }

    /// True when `ch` can form an initial (`А.` in `А. С. Пушкин`).
    pub fn is_initial_letter(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.initials.is_match(ch.encode_utf8(&mut buf))
    }

    /// True when `ch` introduces direct speech at sentence-initial position.
    pub fn is_direct_speech_marker(&self, ch: char) -> bool {
        self.direct_speech.contains(&ch)
    }

    /// Delimiter lookup for quote/bracket tracking.
    pub fn enclosure(&self, ch: char) -> Option<Enclosure> {
        self.enclosures.get(&ch).copied()
    }
}

impl Default for BoundaryRuleSet {
    /// Bare rule set: no abbreviations, Cyrillic/Latin capitals as
    /// initials, em/en dash direct speech, the usual quote and bracket
    /// pairs. Real callers load corpus-derived data instead.
    fn default() -> Self {
        BoundaryRuleSet::load(
            [],
            "[А-ЯЁA-Z]",
            ['—', '–'],
            vec![
                EnclosurePair::new('«', '»'),
                EnclosurePair::symmetric('"'),
                EnclosurePair::new('„', '“'),
            ],
            vec![
                EnclosurePair::new('(', ')'),
                EnclosurePair::new('[', ']'),
                EnclosurePair::new('{', '}'),
            ],
        )
        .expect("static default rules are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_with(abbrs: &[&str]) -> BoundaryRuleSet {
        BoundaryRuleSet::load(
            abbrs.iter().map(|s| s.to_string()),
            "[А-ЯЁA-Z]",
            ['—'],
            vec![EnclosurePair::new('«', '»')],
            vec![EnclosurePair::new('(', ')')],
        )
        .unwrap()
    }

    #[test]
    fn test_longest_prefix_match() {
        let rules = rules_with(&["т.", "т.д.", "ул."]);

        assert_eq!(rules.abbreviation_prefix("т.д. и проч."), Some("т.д.".len()));
        assert_eq!(rules.abbreviation_prefix("т. 5"), Some("т.".len()));
        assert_eq!(rules.abbreviation_prefix("ул. Ленина"), Some("ул.".len()));
        assert_eq!(rules.abbreviation_prefix("улица"), None);
    }

    #[test]
    fn test_trailing_period_required() {
        let err = BoundaryRuleSet::load(
            vec!["ул".to_string()],
            "[А-ЯЁ]",
            [],
            vec![],
            vec![],
        );
        assert!(matches!(err, Err(CoreError::InvalidRule(_))));
    }

    #[test]
    fn test_initials_letter() {
        let rules = rules_with(&[]);
        assert!(rules.is_initial_letter('А'));
        assert!(rules.is_initial_letter('Ё'));
        assert!(rules.is_initial_letter('S'));
        assert!(!rules.is_initial_letter('а'));
        assert!(!rules.is_initial_letter('1'));
    }

    #[test]
    fn test_bad_initials_pattern() {
        let err = BoundaryRuleSet::load(vec![], "[unclosed", [], vec![], vec![]);
        assert!(matches!(err, Err(CoreError::InvalidPattern(_))));
    }

    #[test]
    fn test_enclosure_roles() {
        let rules = BoundaryRuleSet::default();

        let open = rules.enclosure('«').unwrap();
        assert_eq!(open.role, EnclosureRole::Open);
        assert_eq!(open.close, '»');

        let close = rules.enclosure('»').unwrap();
        assert_eq!(close.role, EnclosureRole::Close);

        let straight = rules.enclosure('"').unwrap();
        assert_eq!(straight.role, EnclosureRole::Symmetric);

        assert_eq!(rules.enclosure('и'), None);
    }

    #[test]
    fn test_direct_speech_markers() {
        let rules = BoundaryRuleSet::default();
        assert!(rules.is_direct_speech_marker('—'));
        assert!(!rules.is_direct_speech_marker('-'));
    }
}
