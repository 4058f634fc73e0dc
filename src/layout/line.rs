//! OCR line records and per-line feature extraction.
//!
//! An [`OcrLine`] is the engine's unit of input: one recognized text line
//! with its bounding box and recognition confidence, produced by an
//! external OCR collaborator. Reading order is assumed correct on entry;
//! the engine never reorders lines.
//!
//! [`LineFeatures`] is the derived, per-line view the break rules operate
//! on. Features are a pure function of the line, the estimated thresholds,
//! and the active language profile; they are recomputed per run and never
//! mutated.

use crate::geometry::Rect;
use crate::language::LanguageProfile;
use crate::layout::patterns;
use crate::layout::thresholds::Thresholds;
use serde::{Deserialize, Serialize};

/// Maximum trimmed length for a line to qualify as a section header.
///
/// Headers are set as short display lines; without this gate a body
/// sentence containing "results" would match the header vocabulary.
const SECTION_HEADER_MAX_CHARS: usize = 64;

/// Text-length fallback for the short-line test when width metadata is
/// missing or degenerate.
const SHORT_LINE_FALLBACK_CHARS: usize = 50;

/// A single recognized text line from OCR output.
///
/// Immutable once ingested. The bounding box uses scanner raster
/// coordinates (top-left origin, y grows downward); `confidence` is the
/// recognizer's 0–100 score for the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    /// Recognized text content
    pub text: String,
    /// Position and extent on the page
    pub bbox: Rect,
    /// Recognition confidence, 0–100
    pub confidence: f32,
}

impl OcrLine {
    /// Create a new OCR line record.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::layout::OcrLine;
    /// use ocr_reflow::geometry::Rect;
    ///
    /// let line = OcrLine::new("Hello world", Rect::new(50.0, 100.0, 300.0, 24.0), 91.5);
    /// assert_eq!(line.text, "Hello world");
    /// assert_eq!(line.confidence, 91.5);
    /// ```
    pub fn new(text: impl Into<String>, bbox: Rect, confidence: f32) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence,
        }
    }

    /// Check whether the line carries any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Derived per-line classification features.
///
/// Pure function of (line, thresholds, language profile, running average
/// width); see [`LineFeatures::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFeatures {
    /// Line is noticeably narrower than the running average width
    pub is_short: bool,
    /// First character of trimmed text is uppercase
    pub starts_with_capital: bool,
    /// Line opens with a list marker or bullet
    pub starts_with_number_or_bullet: bool,
    /// Line matches the section-header vocabulary
    pub is_section_header: bool,
    /// Trimmed text ends with a strong sentence terminator (`.` `!` `?`)
    pub ends_strong: bool,
    /// Trimmed text ends with a weak terminator (`:` `;`)
    pub ends_weak: bool,
    /// Line matches an author or citation pattern (auxiliary signal)
    pub looks_like_citation: bool,
}

impl LineFeatures {
    /// Classify a single line.
    ///
    /// `avg_width` is the document's running average line width as computed
    /// by [`average_line_width`]. When the line's own width metadata is
    /// degenerate (zero or non-finite), the short-line test falls back to a
    /// text-length heuristic rather than failing the document.
    ///
    /// All predicates are total over well-typed input; classification
    /// never fails.
    pub fn classify(
        line: &OcrLine,
        _thresholds: &Thresholds,
        profile: &LanguageProfile,
        avg_width: Option<f32>,
    ) -> Self {
        let trimmed = line.text.trim();

        let is_short = match (line.bbox.is_degenerate(), avg_width) {
            (false, Some(avg)) if avg > 0.0 => line.bbox.width < 0.7 * avg,
            _ => trimmed.chars().count() < SHORT_LINE_FALLBACK_CHARS,
        };

        let starts_with_capital = trimmed.chars().next().is_some_and(char::is_uppercase);
        let starts_with_number_or_bullet = patterns::starts_with_list_marker(trimmed);
        let is_section_header = trimmed.chars().count() <= SECTION_HEADER_MAX_CHARS
            && !trimmed.is_empty()
            && patterns::contains_section_header_word(trimmed);

        let ends_strong =
            trimmed.ends_with('.') || trimmed.ends_with('!') || trimmed.ends_with('?');
        let ends_weak = trimmed.ends_with(':') || trimmed.ends_with(';');

        // Locale terminator sets extend the strong test for scripts whose
        // sentence enders are multi-char (e.g. Korean final-verb endings).
        let ends_strong = ends_strong || (!ends_weak && profile.ends_sentence(trimmed));

        let looks_like_citation = patterns::looks_like_citation(trimmed);

        Self {
            is_short,
            starts_with_capital,
            starts_with_number_or_bullet,
            is_section_header,
            ends_strong,
            ends_weak,
            looks_like_citation,
        }
    }
}

/// Compute the running average line width over usable geometry.
///
/// Lines with degenerate boxes are excluded; returns `None` when no line
/// carries usable width metadata, in which case classification falls back
/// to text-length heuristics throughout.
pub fn average_line_width(lines: &[OcrLine]) -> Option<f32> {
    let usable: Vec<f32> = lines
        .iter()
        .filter(|l| !l.bbox.is_degenerate())
        .map(|l| l.bbox.width)
        .collect();

    if usable.is_empty() {
        None
    } else {
        Some(usable.iter().sum::<f32>() / usable.len() as f32)
    }
}

/// Classify every line of a document in one pass.
///
/// Computes the running average width once, then derives features per
/// line. Returns one [`LineFeatures`] per input line, index-aligned.
pub fn classify_lines(
    lines: &[OcrLine],
    thresholds: &Thresholds,
    profile: &LanguageProfile,
) -> Vec<LineFeatures> {
    let avg_width = average_line_width(lines);
    lines
        .iter()
        .map(|line| LineFeatures::classify(line, thresholds, profile, avg_width))
        .collect()
}
