//! Rule profiles
//!
//! A [`RuleProfile`] is the serializable form of the segmentation
//! knowledge: abbreviation categories, initials pattern, direct-speech
//! markers and delimiter pairs. Profiles are parsed from TOML; the Russian
//! profile ships embedded in the crate. Building a
//! [`fraza_core::BoundaryRuleSet`] from a profile is where trailing
//! periods get appended and the pattern gets compiled.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use fraza_core::{BoundaryRuleSet, EnclosurePair};

/// Profile identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Short language code, e.g. `ru`
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Initials recognizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialsConfig {
    /// Character class matching letters that can form an initial
    pub pattern: String,
}

/// Direct-speech marker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectSpeechConfig {
    /// Dash-like characters introducing reported dialogue
    pub markers: Vec<char>,
}

/// A delimiter pair as written in the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairConfig {
    /// Opening character
    pub open: char,
    /// Closing character
    pub close: char,
    /// True when the same character opens and closes
    #[serde(default)]
    pub symmetric: bool,
}

/// A list of delimiter pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairList {
    /// The pairs, in priority order
    pub pairs: Vec<PairConfig>,
}

/// Abbreviations grouped by category; categories are free-form keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    /// Category name to entries (stored without the trailing period)
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Serializable segmentation rule profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleProfile {
    /// Identification block
    pub metadata: ProfileMetadata,
    /// Initials recognizer
    pub initials: InitialsConfig,
    /// Direct-speech markers
    pub direct_speech: DirectSpeechConfig,
    /// Quote pairs
    pub quotes: PairList,
    /// Bracket pairs
    pub brackets: PairList,
    /// Abbreviation categories
    pub abbreviations: AbbreviationConfig,
}

static RUSSIAN_TOML: &str = include_str!("../configs/russian.toml");

impl RuleProfile {
    /// The embedded Russian profile.
    pub fn russian() -> &'static RuleProfile {
        static PROFILE: OnceLock<RuleProfile> = OnceLock::new();
        PROFILE.get_or_init(|| {
            toml::from_str(RUSSIAN_TOML).expect("embedded russian profile is valid")
        })
    }

    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<RuleProfile> {
        toml::from_str(text).map_err(|e| ApiError::Profile(e.to_string()))
    }

    /// All abbreviation entries with their trailing period appended.
    pub fn abbreviation_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = self
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|entry| {
                if entry.ends_with('.') {
                    entry.clone()
                } else {
                    format!("{entry}.")
                }
            })
            .collect();
        entries.sort();
        entries.dedup();
        entries
    }

    /// Compile the profile into an immutable rule set.
    pub fn build_rules(&self) -> Result<BoundaryRuleSet> {
        let to_pairs = |list: &PairList| {
            list.pairs
                .iter()
                .map(|p| {
                    if p.symmetric {
                        EnclosurePair::symmetric(p.open)
                    } else {
                        EnclosurePair::new(p.open, p.close)
                    }
                })
                .collect::<Vec<_>>()
        };

        let rules = BoundaryRuleSet::load(
            self.abbreviation_entries(),
            &self.initials.pattern,
            self.direct_speech.markers.iter().copied(),
            to_pairs(&self.quotes),
            to_pairs(&self.brackets),
        )?;
        Ok(rules)
    }
}
