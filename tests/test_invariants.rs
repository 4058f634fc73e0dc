//! Property-based tests for the pipeline's structural invariants.
//!
//! These properties hold for arbitrary well-typed input, not just the
//! curated scenarios: line coverage, tier monotonicity, threshold
//! ordering, and assembly idempotence.

use ocr_reflow::detect::{assemble_paragraphs, score_pairs, select_breaks};
use ocr_reflow::geometry::Rect;
use ocr_reflow::layout::{classify_lines, OcrLine, Thresholds};
use ocr_reflow::{Language, ReflowConfig, ReflowEngine};
use proptest::prelude::*;

/// Generate a plausible OCR line: trimmed single-line text, positive
/// geometry, full confidence range.
fn arb_line() -> impl Strategy<Value = (String, f32, f32, f32, f32)> {
    (
        "[a-zA-Z0-9][a-zA-Z0-9 .,:;]{0,40}[a-zA-Z0-9.]",
        0.0f32..300.0,   // x
        0.0f32..100.0,   // gap to previous line
        20.0f32..500.0,  // width
        5.0f32..40.0,    // height
    )
}

/// Stack generated lines top to bottom in reading order.
fn build_document(specs: Vec<(String, f32, f32, f32, f32)>, confidence: f32) -> Vec<OcrLine> {
    let mut y = 0.0;
    specs
        .into_iter()
        .map(|(text, x, gap, width, height)| {
            y += gap;
            let line = OcrLine::new(text, Rect::new(x, y, width, height), confidence);
            y += height;
            line
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_every_line_appears_exactly_once(
        specs in proptest::collection::vec(arb_line(), 1..30)
    ) {
        let lines = build_document(specs, 90.0);
        let result = ReflowEngine::new().reflow(&lines);

        let output: Vec<&str> = result
            .paragraphs
            .iter()
            .flat_map(|p| p.text.split('\n'))
            .collect();
        let input: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_tiers_accumulate_monotonically(
        specs in proptest::collection::vec(arb_line(), 2..25)
    ) {
        let lines = build_document(specs, 90.0);
        let thresholds = Thresholds::estimate(&lines)
            .unwrap_or_else(|_| Thresholds::default_for_scan());
        let profile = Language::English.profile();
        let features = classify_lines(&lines, &thresholds, &profile);
        let config = ReflowConfig::default();
        let candidates =
            score_pairs(&lines, &features, &thresholds, &profile, &config.weights);

        let tier1 = select_breaks(&candidates, &thresholds, &ReflowConfig {
            tier2_enabled: false,
            tier3_enabled: false,
            ..config.clone()
        });
        let tier12 = select_breaks(&candidates, &thresholds, &ReflowConfig {
            tier3_enabled: false,
            ..config.clone()
        });
        let all = select_breaks(&candidates, &thresholds, &config);

        prop_assert!(tier1.iter().all(|i| tier12.contains(i)));
        prop_assert!(tier12.iter().all(|i| all.contains(i)));
    }

    #[test]
    fn prop_threshold_ordering(
        specs in proptest::collection::vec(arb_line(), 1..20)
    ) {
        let lines = build_document(specs, 85.0);
        let t = Thresholds::estimate(&lines).unwrap();
        prop_assert!(t.tiny_gap < t.line_gap);
        prop_assert!(t.line_gap < t.small_para_gap);
        prop_assert!(t.small_para_gap < t.medium_para_gap);
        prop_assert!(t.medium_para_gap < t.certain_gap);
        prop_assert!(t.certain_gap < t.large_para_gap);
        prop_assert!(t.large_para_gap < t.section_gap);
    }

    #[test]
    fn prop_assembly_is_idempotent(
        specs in proptest::collection::vec(arb_line(), 1..20),
        raw_breaks in proptest::collection::vec(0usize..30, 0..10)
    ) {
        let lines = build_document(specs, 90.0);
        let first = assemble_paragraphs(&lines, &raw_breaks);

        // Feed each paragraph back as a single line with no breaks
        for p in &first {
            let reline = OcrLine::new(p.text.clone(), Rect::new(0.0, 0.0, 300.0, 20.0), 90.0);
            let again = assemble_paragraphs(&[reline], &[]);
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(&again[0].text, &p.text);
        }
    }

    #[test]
    fn prop_runs_are_deterministic(
        specs in proptest::collection::vec(arb_line(), 0..20)
    ) {
        let lines = build_document(specs, 75.0);
        let engine = ReflowEngine::new();
        prop_assert_eq!(engine.reflow(&lines), engine.reflow(&lines));
    }
}
