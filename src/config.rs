//! Engine configuration.
//!
//! All tunables live in one immutable [`ReflowConfig`] passed into every
//! stage. There is no process-wide mutable state; hosts that want
//! different behavior per document build a config per document.

use crate::detect::RuleWeights;
use crate::error::{Error, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Default Tier-3 acceptance threshold on the accumulated rule score.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f32 = 0.7;

/// Document kind presets with tuned detection settings.
///
/// Different document kinds reward different aggressiveness:
/// - Academic: section headers and lists dominate, all tiers pay off
/// - Book: long narrative paragraphs, weak textual cues mislead
/// - Conservative: archival reprocessing where a missed break is
///   cheaper than a false one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Academic papers, theses, technical reports
    Academic,
    /// Novels, books, long narrative prose
    Book,
    /// Certain-breaks-only processing for archival corpora
    Conservative,
}

impl DocumentKind {
    /// Build the tuned configuration for this document kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::config::DocumentKind;
    ///
    /// let config = DocumentKind::Conservative.create_config();
    /// assert!(config.conservative_mode);
    /// ```
    pub fn create_config(&self) -> ReflowConfig {
        match self {
            DocumentKind::Academic => ReflowConfig {
                acceptance_threshold: 0.6,
                ..ReflowConfig::default()
            },
            DocumentKind::Book => ReflowConfig {
                tier3_enabled: false,
                ..ReflowConfig::default()
            },
            DocumentKind::Conservative => ReflowConfig {
                conservative_mode: true,
                ..ReflowConfig::default()
            },
        }
    }
}

/// Configuration for one reflow run.
///
/// Immutable once handed to the engine. The default configuration
/// enables all three tiers with the calibrated production weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflowConfig {
    /// Document language, selects the lexical profile
    pub language: Language,
    /// Restrict detection to Tier 1 regardless of tier toggles
    pub conservative_mode: bool,
    /// Enable the Tier-2 (high confidence) pass
    pub tier2_enabled: bool,
    /// Enable the Tier-3 (medium confidence) pass
    pub tier3_enabled: bool,
    /// Minimum accumulated score for Tier-3 acceptance
    pub acceptance_threshold: f32,
    /// Rule weight table used by the scorer
    pub weights: RuleWeights,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            conservative_mode: false,
            tier2_enabled: true,
            tier3_enabled: true,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            weights: RuleWeights::default(),
        }
    }
}

impl ReflowConfig {
    /// Build a default configuration for a given language.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Set the document language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the Tier-3 acceptance threshold.
    pub fn with_acceptance_threshold(mut self, threshold: f32) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    /// Check the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the acceptance threshold is
    /// non-finite or not positive, or when any rule weight is negative or
    /// non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.acceptance_threshold.is_finite() || self.acceptance_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "acceptance_threshold must be a positive finite number, got {}",
                self.acceptance_threshold
            )));
        }

        let weights = [
            ("large_vertical_gap", self.weights.large_vertical_gap),
            ("section_headers", self.weights.section_headers),
            ("numbered_lists", self.weights.numbered_lists),
            ("indentation_change", self.weights.indentation_change),
            ("triple_condition", self.weights.triple_condition),
            ("medium_gap_with_pattern", self.weights.medium_gap_with_pattern),
            ("line_length_change", self.weights.line_length_change),
            ("weak_indicators", self.weights.weak_indicators),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "rule weight {name} must be a non-negative finite number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
