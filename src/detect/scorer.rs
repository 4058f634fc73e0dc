//! Weighted break scoring over adjacent line pairs.
//!
//! The scorer walks the line sequence once and, for each adjacent pair,
//! evaluates the full rule set against the pair's geometry and features.
//! Every satisfied rule contributes its weight; the output is one
//! [`BreakCandidate`] per pair carrying the accumulated score, the fired
//! rules, and the measured vertical gap for the tier selector.

use crate::detect::rules::{RuleSet, RuleWeights};
use crate::language::LanguageProfile;
use crate::layout::line::{LineFeatures, OcrLine, average_line_width};
use crate::layout::patterns;
use crate::layout::thresholds::Thresholds;
use serde::{Deserialize, Serialize};

/// Indentation shift threshold, in multiples of the average char width.
const INDENT_CHAR_WIDTHS: f32 = 3.0;

/// Width change fraction of the average line width for
/// [`RuleSet::LINE_LENGTH_CHANGE`].
const WIDTH_CHANGE_FRACTION: f32 = 0.4;

/// One scored adjacent line pair.
///
/// `index` identifies the pair `(lines[index], lines[index + 1])`; a
/// selected candidate means the paragraph ends at `lines[index]`.
/// Immutable once scored. The fired rule set is retained for
/// diagnostics and for the tier selector's per-rule gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakCandidate {
    /// Index of the upper line of the pair, 0..N-1
    pub index: usize,
    /// Accumulated rule-weight score, non-negative and uncapped
    pub score: f32,
    /// Rules that fired for this pair
    #[serde(with = "rule_set_bits")]
    pub rules: RuleSet,
    /// Vertical whitespace between the pair, clamped at zero
    pub gap: f32,
}

mod rule_set_bits {
    use super::RuleSet;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(rules: &RuleSet, serializer: S) -> Result<S::Ok, S::Error> {
        rules.bits().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RuleSet, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(RuleSet::from_bits_truncate(bits))
    }
}

/// Score every adjacent line pair of a document.
///
/// `features` must be index-aligned with `lines` (the per-line output of
/// [`classify_lines`](crate::layout::line::classify_lines)). Returns one
/// candidate per pair, in pair order; an input of fewer than two lines
/// yields no candidates.
///
/// Geometry rules degrade gracefully on degenerate boxes: a pair with
/// unusable coordinates simply never satisfies the spatial conditions,
/// while the textual rules still apply.
pub fn score_pairs(
    lines: &[OcrLine],
    features: &[LineFeatures],
    thresholds: &Thresholds,
    profile: &LanguageProfile,
    weights: &RuleWeights,
) -> Vec<BreakCandidate> {
    debug_assert_eq!(lines.len(), features.len());

    let avg_width = average_line_width(lines);
    let mut candidates = Vec::with_capacity(lines.len().saturating_sub(1));

    for index in 0..lines.len().saturating_sub(1) {
        let (cur, next) = (&lines[index], &lines[index + 1]);
        let (cur_feat, next_feat) = (&features[index], &features[index + 1]);

        let gap = cur.bbox.gap_below(&next.bbox);
        let rules = evaluate_rules(
            cur, next, cur_feat, next_feat, gap, thresholds, profile, avg_width,
        );

        candidates.push(BreakCandidate {
            index,
            score: weights.total(rules),
            rules,
            gap,
        });
    }

    candidates
}

#[allow(clippy::too_many_arguments)]
fn evaluate_rules(
    cur: &OcrLine,
    next: &OcrLine,
    cur_feat: &LineFeatures,
    next_feat: &LineFeatures,
    gap: f32,
    thresholds: &Thresholds,
    profile: &LanguageProfile,
    avg_width: Option<f32>,
) -> RuleSet {
    let mut rules = RuleSet::empty();

    if gap > thresholds.large_para_gap {
        rules |= RuleSet::LARGE_VERTICAL_GAP;
    }

    if cur_feat.is_section_header || next_feat.is_section_header {
        rules |= RuleSet::SECTION_HEADERS;
    }

    if next_feat.starts_with_number_or_bullet {
        rules |= RuleSet::NUMBERED_LISTS;
    }

    if !cur.bbox.is_degenerate() && !next.bbox.is_degenerate() {
        let indent_shift = (next.bbox.left() - cur.bbox.left()).abs();
        if indent_shift > thresholds.avg_char_width * INDENT_CHAR_WIDTHS {
            rules |= RuleSet::INDENTATION_CHANGE;
        }
    }

    if cur_feat.is_short && cur_feat.ends_strong && next_feat.starts_with_capital {
        rules |= RuleSet::TRIPLE_CONDITION;
    }

    if gap > thresholds.small_para_gap
        && gap < thresholds.large_para_gap
        && has_supporting_pattern(next, cur_feat, next_feat, profile)
    {
        rules |= RuleSet::MEDIUM_GAP_WITH_PATTERN;
    }

    if let Some(avg) = avg_width {
        if !cur.bbox.is_degenerate() && !next.bbox.is_degenerate() {
            let width_change = (next.bbox.width - cur.bbox.width).abs();
            if width_change > WIDTH_CHANGE_FRACTION * avg {
                rules |= RuleSet::LINE_LENGTH_CHANGE;
            }
        }
    }

    let weak_punctuation = cur_feat.ends_weak && next_feat.starts_with_capital;
    if weak_punctuation || patterns::quotation_transition(&cur.text, &next.text) {
        rules |= RuleSet::WEAK_INDICATORS;
    }

    rules
}

/// A textual pattern that backs up a medium-sized gap: the current line
/// finishes a sentence, or the next line opens like a new unit (list
/// item, locale paragraph cue, citation).
fn has_supporting_pattern(
    next: &OcrLine,
    cur_feat: &LineFeatures,
    next_feat: &LineFeatures,
    profile: &LanguageProfile,
) -> bool {
    cur_feat.ends_strong
        || next_feat.starts_with_number_or_bullet
        || next_feat.looks_like_citation
        || profile.starts_with_cue(&next.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::language::Language;
    use crate::layout::line::classify_lines;

    // Standard test page: avg font height 20, so thresholds are
    // line_gap 16, small_para 30, large_para 60, char width 12.
    fn thresholds() -> Thresholds {
        let lines = vec![line_at("calibration line for the estimator.", 50.0, 0.0, 400.0)];
        Thresholds::estimate(&lines).unwrap()
    }

    fn line_at(text: &str, x: f32, y: f32, width: f32) -> OcrLine {
        OcrLine::new(text, Rect::new(x, y, width, 20.0), 90.0)
    }

    fn score(lines: &[OcrLine]) -> Vec<BreakCandidate> {
        let t = thresholds();
        let profile = Language::English.profile();
        let features = classify_lines(lines, &t, &profile);
        score_pairs(lines, &features, &t, &profile, &RuleWeights::default())
    }

    #[test]
    fn test_empty_and_single_line_inputs() {
        assert!(score(&[]).is_empty());
        assert!(score(&[line_at("only line", 50.0, 0.0, 400.0)]).is_empty());
    }

    #[test]
    fn test_candidate_per_pair() {
        let lines = vec![
            line_at("one", 50.0, 0.0, 400.0),
            line_at("two", 50.0, 24.0, 400.0),
            line_at("three", 50.0, 48.0, 400.0),
        ];
        let candidates = score(&lines);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].index, 0);
        assert_eq!(candidates[1].index, 1);
    }

    #[test]
    fn test_large_vertical_gap_fires() {
        // Gap of 80 exceeds large_para_gap (60)
        let lines = vec![
            line_at("First paragraph ends here.", 50.0, 0.0, 400.0),
            line_at("Second paragraph starts.", 50.0, 100.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::LARGE_VERTICAL_GAP));
        assert!(candidates[0].score >= 1.0);
        assert_eq!(candidates[0].gap, 80.0);
    }

    #[test]
    fn test_tight_gap_scores_low() {
        // Gap of 4: normal line spacing, mid-sentence continuation
        let lines = vec![
            line_at("the quick brown fox jumps over the lazy and", 50.0, 0.0, 400.0),
            line_at("sleeping dog without any trouble at all and", 50.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert_eq!(candidates[0].rules, RuleSet::empty());
        assert_eq!(candidates[0].score, 0.0);
    }

    #[test]
    fn test_section_header_fires_for_either_line() {
        let lines = vec![
            line_at("body text continues here without end", 50.0, 0.0, 400.0),
            line_at("Introduction", 50.0, 24.0, 150.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::SECTION_HEADERS));
    }

    #[test]
    fn test_numbered_list_fires_on_next_line() {
        let lines = vec![
            line_at("the items are as follows and continue on", 50.0, 0.0, 400.0),
            line_at("1. first item", 50.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::NUMBERED_LISTS));
    }

    #[test]
    fn test_indentation_change() {
        // Shift of 40 exceeds 3 x char width (36)
        let lines = vec![
            line_at("paragraph body text runs to the margin and", 50.0, 0.0, 400.0),
            line_at("indented opening of the next paragraph and", 90.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::INDENTATION_CHANGE));

        // Shift of 20 stays under the threshold
        let lines = vec![
            line_at("paragraph body text runs to the margin and", 50.0, 0.0, 400.0),
            line_at("slightly shifted line within tolerance and", 70.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(!candidates[0].rules.contains(RuleSet::INDENTATION_CHANGE));
    }

    #[test]
    fn test_triple_condition() {
        // Short line (width 120 < 0.7 x avg), strong ending, capital next
        let lines = vec![
            line_at("It ends.", 50.0, 0.0, 120.0),
            line_at("The next paragraph begins with more text", 50.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::TRIPLE_CONDITION));
    }

    #[test]
    fn test_medium_gap_needs_pattern() {
        // Gap of 40 sits between small_para (30) and large_para (60).
        // With a sentence-final current line the rule fires.
        let lines = vec![
            line_at("sentence ends cleanly right here and now.", 50.0, 0.0, 400.0),
            line_at("and continues in lowercase afterwards and", 50.0, 60.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::MEDIUM_GAP_WITH_PATTERN));

        // Same gap, no supporting pattern: mid-sentence on both sides
        let lines = vec![
            line_at("sentence that does not end and keeps on", 50.0, 0.0, 400.0),
            line_at("going in lowercase without any marker or", 50.0, 60.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(!candidates[0].rules.contains(RuleSet::MEDIUM_GAP_WITH_PATTERN));
    }

    #[test]
    fn test_line_length_change() {
        // Widths 400 and 100: change of 300 against avg 250 exceeds 40%
        let lines = vec![
            line_at("a full width body line of ordinary prose", 50.0, 0.0, 400.0),
            line_at("short tail.", 50.0, 24.0, 100.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::LINE_LENGTH_CHANGE));
    }

    #[test]
    fn test_weak_indicators() {
        let lines = vec![
            line_at("consider the following:", 50.0, 0.0, 400.0),
            line_at("First, the data is loaded into memory and", 50.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::WEAK_INDICATORS));

        let lines = vec![
            line_at("he said \u{201C}enough.\u{201D}", 50.0, 0.0, 400.0),
            line_at("the narrator resumed the tale quietly and", 50.0, 24.0, 400.0),
        ];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::WEAK_INDICATORS));
    }

    #[test]
    fn test_scores_accumulate_across_rules() {
        // Large gap + indentation + triple condition all at once
        let lines = vec![
            line_at("It ends.", 50.0, 0.0, 120.0),
            line_at("Indented new paragraph with a fresh start", 100.0, 100.0, 400.0),
        ];
        let candidates = score(&lines);
        let c = &candidates[0];
        assert!(c.rules.contains(RuleSet::LARGE_VERTICAL_GAP));
        assert!(c.rules.contains(RuleSet::INDENTATION_CHANGE));
        assert!(c.rules.contains(RuleSet::TRIPLE_CONDITION));
        assert!(c.score > 2.5, "additive score expected, got {}", c.score);
    }

    #[test]
    fn test_degenerate_geometry_keeps_textual_rules() {
        let cur = OcrLine::new("the list follows:", Rect::new(0.0, 0.0, 0.0, 0.0), 80.0);
        let next = OcrLine::new("1. First item", Rect::new(0.0, 0.0, f32::NAN, 0.0), 80.0);
        let lines = vec![cur, next];
        let candidates = score(&lines);
        assert!(candidates[0].rules.contains(RuleSet::NUMBERED_LISTS));
        assert!(!candidates[0].rules.contains(RuleSet::LARGE_VERTICAL_GAP));
        assert!(!candidates[0].rules.contains(RuleSet::INDENTATION_CHANGE));
        assert_eq!(candidates[0].gap, 0.0);
    }
}
