//! Adaptive spatial thresholds derived from document metrics.
//!
//! All break-detection cutoffs are expressed as multiples of the
//! document's estimated average font height, which makes detection
//! resolution-independent: a 300 dpi scan and a 96 dpi screenshot of the
//! same page produce equivalent threshold sets.
//!
//! Estimation is a pure computation over the input lines and is safe to
//! memoize per document.

use crate::error::{Error, Result};
use crate::layout::line::OcrLine;
use serde::{Deserialize, Serialize};

/// Minimum recognition confidence for a line to participate in
/// threshold estimation.
const ESTIMATION_MIN_CONFIDENCE: f32 = 50.0;

/// Fallback average font height, in raster units, for documents whose
/// lines carry no usable metrics. Matches a 12 pt face scanned at
/// roughly 150 dpi.
const DEFAULT_AVG_FONT_HEIGHT: f32 = 24.0;

/// Derived spacing and size thresholds for one document.
///
/// Read-only after estimation. Gap thresholds are ordered:
/// `tiny_gap < line_gap < small_para_gap < medium_para_gap <
/// certain_gap < large_para_gap < section_gap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Gaps below this are noise (0.3 x font height)
    pub tiny_gap: f32,
    /// Normal inter-line spacing within a paragraph (0.8 x)
    pub line_gap: f32,
    /// Smallest gap suggestive of a paragraph break (1.5 x)
    pub small_para_gap: f32,
    /// Clear paragraph spacing (2.0 x)
    pub medium_para_gap: f32,
    /// Single-condition certain break cutoff for the top tier (2.5 x)
    pub certain_gap: f32,
    /// Generic large paragraph gap used by the scorer (3.0 x)
    pub large_para_gap: f32,
    /// Section-level whitespace (4.0 x)
    pub section_gap: f32,
    /// Estimated average character width (0.6 x font height)
    pub avg_char_width: f32,
    /// Estimated average font height in raster units
    pub avg_font_height: f32,
}

impl Thresholds {
    /// Derive all thresholds from an average font height.
    fn from_font_height(avg_font_height: f32) -> Self {
        Self {
            tiny_gap: 0.3 * avg_font_height,
            line_gap: 0.8 * avg_font_height,
            small_para_gap: 1.5 * avg_font_height,
            medium_para_gap: 2.0 * avg_font_height,
            certain_gap: 2.5 * avg_font_height,
            large_para_gap: 3.0 * avg_font_height,
            section_gap: 4.0 * avg_font_height,
            avg_char_width: 0.6 * avg_font_height,
            avg_font_height,
        }
    }

    /// Estimate thresholds from a document's line set.
    ///
    /// Only lines with non-blank text and confidence above 50 contribute.
    /// The average font height is the confidence-weighted mean of line
    /// heights, refined by discarding heights more than two standard
    /// deviations from that mean and re-averaging the survivors. When
    /// every height is an outlier the weighted mean stands unrefined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] when no line qualifies.
    /// Callers are expected to fall back to [`Thresholds::default_for_scan`]
    /// rather than abort the document.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::layout::{OcrLine, Thresholds};
    /// use ocr_reflow::geometry::Rect;
    ///
    /// let lines = vec![
    ///     OcrLine::new("First line", Rect::new(50.0, 100.0, 400.0, 20.0), 90.0),
    ///     OcrLine::new("Second line", Rect::new(50.0, 130.0, 400.0, 20.0), 85.0),
    /// ];
    /// let thresholds = Thresholds::estimate(&lines).unwrap();
    /// assert_eq!(thresholds.avg_font_height, 20.0);
    /// assert_eq!(thresholds.line_gap, 16.0);
    /// ```
    pub fn estimate(lines: &[OcrLine]) -> Result<Self> {
        let usable: Vec<&OcrLine> = lines
            .iter()
            .filter(|l| {
                !l.is_blank()
                    && l.confidence > ESTIMATION_MIN_CONFIDENCE
                    && !l.bbox.is_degenerate()
            })
            .collect();

        if usable.is_empty() {
            return Err(Error::InsufficientData {
                reason: "no line with non-blank text and confidence above 50".to_string(),
            });
        }

        let weight_sum: f32 = usable.iter().map(|l| l.confidence).sum();
        let weighted_mean: f32 = usable
            .iter()
            .map(|l| l.bbox.height * l.confidence)
            .sum::<f32>()
            / weight_sum;

        let heights: Vec<f32> = usable.iter().map(|l| l.bbox.height).collect();
        let avg_font_height = refine_mean(&heights, weighted_mean);

        Ok(Self::from_font_height(avg_font_height))
    }

    /// Hard-coded defaults for a typical 150 dpi scan of 12 pt body text.
    ///
    /// Used when estimation fails for lack of trustworthy lines; the
    /// downstream stages still run, at reduced spatial precision.
    pub fn default_for_scan() -> Self {
        Self::from_font_height(DEFAULT_AVG_FONT_HEIGHT)
    }
}

/// Discard heights beyond two standard deviations of `weighted_mean` and
/// re-average; the weighted mean stands when every height is discarded
/// or the spread is zero.
fn refine_mean(heights: &[f32], weighted_mean: f32) -> f32 {
    let n = heights.len() as f32;
    let variance = heights
        .iter()
        .map(|h| (h - weighted_mean).powi(2))
        .sum::<f32>()
        / n;
    let std_dev = variance.sqrt();

    if std_dev <= f32::EPSILON {
        return weighted_mean;
    }

    let survivors: Vec<f32> = heights
        .iter()
        .copied()
        .filter(|h| (h - weighted_mean).abs() <= 2.0 * std_dev)
        .collect();

    if survivors.is_empty() {
        weighted_mean
    } else {
        survivors.iter().sum::<f32>() / survivors.len() as f32
    }
}
