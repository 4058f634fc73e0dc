//! Layout analysis for OCR documents.
//!
//! This module holds the spatial and lexical groundwork the break
//! detector builds on:
//! - Line records and per-line feature extraction
//! - Adaptive threshold estimation from line-height statistics
//! - Textual pattern matchers (list markers, headers, citations)

pub mod line;
pub mod patterns;
pub mod thresholds;

// Re-export main types
pub use line::{LineFeatures, OcrLine, average_line_width, classify_lines};
pub use thresholds::Thresholds;
