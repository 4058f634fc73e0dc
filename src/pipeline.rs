//! The reflow pipeline.
//!
//! [`ReflowEngine`] wires the stages together: threshold estimation,
//! line classification, pair scoring, tiered selection, and paragraph
//! assembly, in that order, with no feedback loops. A run is a pure
//! function of the input lines and the engine configuration, so one
//! engine can serve many documents and hosts can process documents
//! concurrently with an engine per worker.

use crate::config::ReflowConfig;
use crate::detect::{assemble_paragraphs, score_pairs, select_breaks, Paragraph};
use crate::error::Result;
use crate::layout::line::{classify_lines, OcrLine};
use crate::layout::thresholds::Thresholds;
use serde::{Deserialize, Serialize};

/// Result of one document run.
///
/// `confidence` is the mean recognition confidence over all input lines
/// normalized to 0..1, and 0.0 for empty input. `thresholds` records
/// the estimated (or fallback) threshold set the run used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReflow {
    /// Assembled paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
    /// Overall document confidence, 0..1
    pub confidence: f32,
    /// Threshold set used for this document
    pub thresholds: Thresholds,
}

/// Paragraph-boundary detection engine.
///
/// Construction validates the configuration once; every subsequent
/// [`reflow`](ReflowEngine::reflow) call is infallible and returns a
/// (possibly degraded) result even for hostile input.
///
/// # Examples
///
/// ```
/// use ocr_reflow::ReflowEngine;
/// use ocr_reflow::geometry::Rect;
/// use ocr_reflow::layout::OcrLine;
///
/// let engine = ReflowEngine::new();
/// let lines = vec![
///     OcrLine::new("Sentence one.", Rect::new(50.0, 100.0, 200.0, 20.0), 92.0),
///     OcrLine::new("New paragraph starts.", Rect::new(50.0, 200.0, 380.0, 20.0), 88.0),
/// ];
/// let result = engine.reflow(&lines);
/// assert_eq!(result.paragraphs.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReflowEngine {
    config: ReflowConfig,
}

impl ReflowEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::error::Error::InvalidConfig)
    /// when the configuration fails validation.
    pub fn with_config(config: ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ReflowConfig {
        &self.config
    }

    /// Run the full pipeline on one document.
    ///
    /// Empty input yields an empty paragraph list with zero confidence.
    /// When threshold estimation finds no trustworthy line, the run
    /// continues on the fixed scan defaults rather than failing.
    pub fn reflow(&self, lines: &[OcrLine]) -> DocumentReflow {
        if lines.is_empty() {
            return DocumentReflow {
                paragraphs: Vec::new(),
                confidence: 0.0,
                thresholds: Thresholds::default_for_scan(),
            };
        }

        let thresholds = match Thresholds::estimate(lines) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("threshold estimation failed ({e}), using scan defaults");
                Thresholds::default_for_scan()
            }
        };
        log::debug!(
            "estimated avg_font_height={:.2} over {} lines",
            thresholds.avg_font_height,
            lines.len()
        );

        let profile = self.config.language.profile();
        let features = classify_lines(lines, &thresholds, &profile);

        let candidates = score_pairs(lines, &features, &thresholds, &profile, &self.config.weights);
        let breaks = select_breaks(&candidates, &thresholds, &self.config);
        log::debug!(
            "selected {} breaks from {} candidates",
            breaks.len(),
            candidates.len()
        );

        let paragraphs = assemble_paragraphs(lines, &breaks);
        let confidence =
            lines.iter().map(|l| l.confidence).sum::<f32>() / lines.len() as f32 / 100.0;

        DocumentReflow {
            paragraphs,
            confidence,
            thresholds,
        }
    }
}
