//! Fixed break-rule set and its weight table.
//!
//! The detection rules form a closed, enumerated set so the scorer is total
//! and exhaustively testable: every rule is a flag, every weight lives in
//! one immutable table, and no stage consults ad hoc priority maps.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The fixed set of break-detection rules.
    ///
    /// A [`RuleSet`](RuleSet) records which rules fired for an adjacent
    /// line pair; the tier selector keys off individual flags and the
    /// scorer sums the matching weights.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RuleSet: u8 {
        /// Vertical gap exceeds the large paragraph threshold
        const LARGE_VERTICAL_GAP = 1 << 0;

        /// Either line of the pair is a section header
        const SECTION_HEADERS = 1 << 1;

        /// Next line opens with a number, letter marker, or bullet
        const NUMBERED_LISTS = 1 << 2;

        /// Left edge shifts by more than three character widths
        const INDENTATION_CHANGE = 1 << 3;

        /// Current line is short, ends a sentence, and the next starts
        /// with a capital
        const TRIPLE_CONDITION = 1 << 4;

        /// Medium vertical gap backed by a supporting text pattern
        const MEDIUM_GAP_WITH_PATTERN = 1 << 5;

        /// Line width changes by more than 40% of the average width
        const LINE_LENGTH_CHANGE = 1 << 6;

        /// Weak textual cues: colon/semicolon into a capital, or a
        /// quotation-mark transition
        const WEAK_INDICATORS = 1 << 7;
    }
}

impl RuleSet {
    /// Check whether any Tier-1 (certain) rule is present.
    pub fn has_certain_rule(&self) -> bool {
        self.intersects(
            RuleSet::LARGE_VERTICAL_GAP | RuleSet::SECTION_HEADERS | RuleSet::NUMBERED_LISTS,
        )
    }
}

/// Immutable weight table for the break rules.
///
/// Weights are additive and uncapped: a pair satisfying several rules
/// accumulates the sum of their weights. The defaults are the calibrated
/// production values; hosts tuning for a corpus can supply their own table
/// through the configuration rather than mutating globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleWeights {
    /// Weight of [`RuleSet::LARGE_VERTICAL_GAP`]
    pub large_vertical_gap: f32,
    /// Weight of [`RuleSet::SECTION_HEADERS`]
    pub section_headers: f32,
    /// Weight of [`RuleSet::NUMBERED_LISTS`]
    pub numbered_lists: f32,
    /// Weight of [`RuleSet::INDENTATION_CHANGE`]
    pub indentation_change: f32,
    /// Weight of [`RuleSet::TRIPLE_CONDITION`]
    pub triple_condition: f32,
    /// Weight of [`RuleSet::MEDIUM_GAP_WITH_PATTERN`]
    pub medium_gap_with_pattern: f32,
    /// Weight of [`RuleSet::LINE_LENGTH_CHANGE`]
    pub line_length_change: f32,
    /// Weight of [`RuleSet::WEAK_INDICATORS`]
    pub weak_indicators: f32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            large_vertical_gap: 1.00,
            section_headers: 0.95,
            numbered_lists: 0.90,
            indentation_change: 0.80,
            triple_condition: 0.75,
            medium_gap_with_pattern: 0.60,
            line_length_change: 0.50,
            weak_indicators: 0.30,
        }
    }
}

impl RuleWeights {
    /// Sum the weights of every rule present in `rules`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::detect::{RuleSet, RuleWeights};
    ///
    /// let weights = RuleWeights::default();
    /// let fired = RuleSet::SECTION_HEADERS | RuleSet::WEAK_INDICATORS;
    /// assert!((weights.total(fired) - 1.25).abs() < 1e-6);
    /// ```
    pub fn total(&self, rules: RuleSet) -> f32 {
        let mut score = 0.0;
        if rules.contains(RuleSet::LARGE_VERTICAL_GAP) {
            score += self.large_vertical_gap;
        }
        if rules.contains(RuleSet::SECTION_HEADERS) {
            score += self.section_headers;
        }
        if rules.contains(RuleSet::NUMBERED_LISTS) {
            score += self.numbered_lists;
        }
        if rules.contains(RuleSet::INDENTATION_CHANGE) {
            score += self.indentation_change;
        }
        if rules.contains(RuleSet::TRIPLE_CONDITION) {
            score += self.triple_condition;
        }
        if rules.contains(RuleSet::MEDIUM_GAP_WITH_PATTERN) {
            score += self.medium_gap_with_pattern;
        }
        if rules.contains(RuleSet::LINE_LENGTH_CHANGE) {
            score += self.line_length_change;
        }
        if rules.contains(RuleSet::WEAK_INDICATORS) {
            score += self.weak_indicators;
        }
        score
    }
}
