//! Paragraph assembly from accepted break indices.
//!
//! The assembler partitions the line sequence into contiguous runs, one
//! ending at each accepted break index (inclusive) plus a trailing run,
//! joins each run with a newline, and trims the result. Runs that trim
//! to nothing are dropped. Every input line lands in exactly one
//! paragraph and output order matches input order.

use crate::layout::line::OcrLine;
use serde::{Deserialize, Serialize};

/// One assembled paragraph.
///
/// Created once by the assembler, immutable, handed to the storage
/// collaborator. `confidence` is the mean recognition confidence of the
/// paragraph's source lines, normalized to 0..1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Trimmed, newline-joined paragraph text
    pub text: String,
    /// Mean source-line confidence, 0..1
    pub confidence: f32,
}

/// Assemble paragraphs from lines and accepted break indices.
///
/// `breaks` may arrive unsorted or with duplicates; it is normalized
/// before cutting. Indices outside `0..lines.len() - 1` are ignored. A
/// break at index `i` ends a paragraph after `lines[i]`.
///
/// # Examples
///
/// ```
/// use ocr_reflow::detect::assemble_paragraphs;
/// use ocr_reflow::geometry::Rect;
/// use ocr_reflow::layout::OcrLine;
///
/// let lines = vec![
///     OcrLine::new("First sentence.", Rect::new(0.0, 0.0, 300.0, 20.0), 90.0),
///     OcrLine::new("Second paragraph.", Rect::new(0.0, 80.0, 300.0, 20.0), 80.0),
/// ];
/// let paragraphs = assemble_paragraphs(&lines, &[0]);
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].text, "First sentence.");
/// assert_eq!(paragraphs[1].text, "Second paragraph.");
/// ```
pub fn assemble_paragraphs(lines: &[OcrLine], breaks: &[usize]) -> Vec<Paragraph> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut cuts: Vec<usize> = breaks
        .iter()
        .copied()
        .filter(|&i| i + 1 < lines.len())
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut paragraphs = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        push_paragraph(&mut paragraphs, &lines[start..=cut]);
        start = cut + 1;
    }
    push_paragraph(&mut paragraphs, &lines[start..]);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<Paragraph>, run: &[OcrLine]) {
    let text = run
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    if text.is_empty() {
        return;
    }

    let confidence = run.iter().map(|l| l.confidence).sum::<f32>() / run.len() as f32 / 100.0;
    paragraphs.push(Paragraph { text, confidence });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn mock_line(text: &str, y: f32) -> OcrLine {
        OcrLine::new(text, Rect::new(50.0, y, 400.0, 20.0), 90.0)
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble_paragraphs(&[], &[]).is_empty());
        assert!(assemble_paragraphs(&[], &[0, 3]).is_empty());
    }

    #[test]
    fn test_no_breaks_single_paragraph() {
        let lines = vec![mock_line("one", 0.0), mock_line("two", 30.0)];
        let paragraphs = assemble_paragraphs(&lines, &[]);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "one\ntwo");
    }

    #[test]
    fn test_break_is_inclusive() {
        let lines = vec![
            mock_line("alpha", 0.0),
            mock_line("beta", 30.0),
            mock_line("gamma", 60.0),
        ];
        let paragraphs = assemble_paragraphs(&lines, &[1]);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text, "alpha\nbeta");
        assert_eq!(paragraphs[1].text, "gamma");
    }

    #[test]
    fn test_unsorted_duplicate_breaks_normalized() {
        let lines = vec![
            mock_line("a", 0.0),
            mock_line("b", 30.0),
            mock_line("c", 60.0),
            mock_line("d", 90.0),
        ];
        let paragraphs = assemble_paragraphs(&lines, &[2, 0, 2, 0]);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].text, "a");
        assert_eq!(paragraphs[1].text, "b\nc");
        assert_eq!(paragraphs[2].text, "d");
    }

    #[test]
    fn test_out_of_range_breaks_ignored() {
        let lines = vec![mock_line("a", 0.0), mock_line("b", 30.0)];
        // Index 1 would end a paragraph after the last line; no cut results
        let paragraphs = assemble_paragraphs(&lines, &[1, 5]);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "a\nb");
    }

    #[test]
    fn test_blank_runs_dropped() {
        let lines = vec![
            mock_line("visible", 0.0),
            mock_line("   ", 30.0),
            mock_line("also visible", 60.0),
        ];
        let paragraphs = assemble_paragraphs(&lines, &[0, 1]);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text, "visible");
        assert_eq!(paragraphs[1].text, "also visible");
    }

    #[test]
    fn test_every_line_appears_once() {
        let lines: Vec<OcrLine> = (0..7)
            .map(|i| mock_line(&format!("line{i}"), i as f32 * 30.0))
            .collect();
        let paragraphs = assemble_paragraphs(&lines, &[1, 4]);
        let joined: Vec<&str> = paragraphs
            .iter()
            .flat_map(|p| p.text.split('\n'))
            .collect();
        let expected: Vec<String> = (0..7).map(|i| format!("line{i}")).collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_paragraph_confidence_is_mean() {
        let lines = vec![
            OcrLine::new("high", Rect::new(0.0, 0.0, 300.0, 20.0), 100.0),
            OcrLine::new("low", Rect::new(0.0, 30.0, 300.0, 20.0), 60.0),
        ];
        let paragraphs = assemble_paragraphs(&lines, &[]);
        assert!((paragraphs[0].confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_reassembly_preserves_text() {
        // Feeding paragraphs back through as single lines with no breaks
        // reproduces the same content
        let lines = vec![mock_line("  padded  ", 0.0), mock_line("tail", 30.0)];
        let first = assemble_paragraphs(&lines, &[0]);
        let relines: Vec<OcrLine> = first
            .iter()
            .enumerate()
            .map(|(i, p)| mock_line(&p.text, i as f32 * 30.0))
            .collect();
        let second = assemble_paragraphs(&relines, &[]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].text, "padded\ntail");
    }
}
