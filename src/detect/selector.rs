//! Tiered break selection.
//!
//! Selection runs three ordered passes over the scored candidates, from
//! most to least certain. Each pass may only add indices the earlier
//! passes did not accept; nothing is ever re-evaluated or revoked, so
//! the accepted set grows monotonically and the whole selector is
//! deterministic for a given input and configuration.

use crate::config::ReflowConfig;
use crate::detect::rules::RuleSet;
use crate::detect::scorer::BreakCandidate;
use crate::layout::thresholds::Thresholds;
use std::collections::BTreeSet;

/// Select break indices from scored candidates.
///
/// Tier 1 (certain) always runs: a candidate is accepted when one of
/// the certain rules fired or its gap alone exceeds the certain cutoff.
/// Tier 2 (high) and Tier 3 (medium) run when enabled and the
/// configuration is not in conservative mode. Returns the accepted pair
/// indices in ascending order.
///
/// # Examples
///
/// ```
/// use ocr_reflow::config::ReflowConfig;
/// use ocr_reflow::detect::{BreakCandidate, RuleSet, select_breaks};
/// use ocr_reflow::layout::Thresholds;
///
/// let candidate = BreakCandidate {
///     index: 0,
///     score: 0.95,
///     rules: RuleSet::SECTION_HEADERS,
///     gap: 4.0,
/// };
/// let breaks = select_breaks(&[candidate], &Thresholds::default_for_scan(), &ReflowConfig::default());
/// assert_eq!(breaks, vec![0]);
/// ```
pub fn select_breaks(
    candidates: &[BreakCandidate],
    thresholds: &Thresholds,
    config: &ReflowConfig,
) -> Vec<usize> {
    let mut accepted = BTreeSet::new();

    // Tier 1: certain breaks, independent of total score
    for c in candidates {
        if c.rules.has_certain_rule() || c.gap > thresholds.certain_gap {
            accepted.insert(c.index);
        }
    }

    let lower_tiers_allowed = !config.conservative_mode;

    // Tier 2: strong structural evidence backed by a minimum gap
    if lower_tiers_allowed && config.tier2_enabled {
        for c in candidates {
            if accepted.contains(&c.index) {
                continue;
            }
            let indent_backed =
                c.rules.contains(RuleSet::INDENTATION_CHANGE) && c.gap > thresholds.line_gap;
            let triple_backed =
                c.rules.contains(RuleSet::TRIPLE_CONDITION) && c.gap > thresholds.small_para_gap;
            if indent_backed || triple_backed {
                accepted.insert(c.index);
            }
        }
    }

    // Tier 3: accumulated score against the acceptance threshold
    if lower_tiers_allowed && config.tier3_enabled {
        for c in candidates {
            if accepted.contains(&c.index) {
                continue;
            }
            if c.score >= config.acceptance_threshold {
                accepted.insert(c.index);
            }
        }
    }

    accepted.into_iter().collect()
}
