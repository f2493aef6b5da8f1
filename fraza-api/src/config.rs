//! High-level configuration

use crate::error::{ApiError, Result};
use crate::profile::RuleProfile;

/// Configuration for a [`crate::TextSegmenter`].
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) profile: RuleProfile,
    pub(crate) extra_abbreviations: Vec<String>,
    pub(crate) lowercase_continuation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profile: RuleProfile::russian().clone(),
            extra_abbreviations: Vec::new(),
            lowercase_continuation: true,
        }
    }
}

impl Config {
    /// The embedded Russian profile with default heuristics.
    pub fn russian() -> Self {
        Config::default()
    }

    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The profile this configuration uses.
    pub fn profile(&self) -> &RuleProfile {
        &self.profile
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    profile: Option<RuleProfile>,
    extra_abbreviations: Vec<String>,
    lowercase_continuation: Option<bool>,
}

impl ConfigBuilder {
    /// Use a pre-parsed rule profile.
    pub fn profile(mut self, profile: RuleProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Parse and use a TOML rule profile.
    pub fn profile_toml(mut self, toml_text: &str) -> Result<Self> {
        self.profile = Some(RuleProfile::from_toml(toml_text)?);
        Ok(self)
    }

    /// Add abbreviations on top of the profile's list. Trailing periods
    /// are appended if missing.
    pub fn abbreviations<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_abbreviations
            .extend(entries.into_iter().map(Into::into));
        self
    }

    /// Enable or disable the "next token starts lowercase" continuation
    /// heuristic (enabled by default).
    pub fn lowercase_continuation(mut self, enabled: bool) -> Self {
        self.lowercase_continuation = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        let profile = self
            .profile
            .unwrap_or_else(|| RuleProfile::russian().clone());
        if profile.initials.pattern.is_empty() {
            return Err(ApiError::Config(
                "profile has an empty initials pattern".to_string(),
            ));
        }

        Ok(Config {
            profile,
            extra_abbreviations: self.extra_abbreviations,
            lowercase_continuation: self.lowercase_continuation.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_russian() {
        let config = Config::default();
        assert_eq!(config.profile().metadata.code, "ru");
        assert!(config.lowercase_continuation);
    }

    #[test]
    fn test_builder_extras() {
        let config = Config::builder()
            .abbreviations(["тел", "ср.г."])
            .lowercase_continuation(false)
            .build()
            .unwrap();
        assert_eq!(config.extra_abbreviations.len(), 2);
        assert!(!config.lowercase_continuation);
    }
}
