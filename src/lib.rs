// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::match_like_matches_macro)]

//! # OCR Reflow
//!
//! Adaptive paragraph-boundary detection for OCR output: reconstructs
//! paragraph structure from positioned, confidence-scored text lines.
//!
//! ## Core Features
//!
//! - **Adaptive Thresholds**: spacing cutoffs derived from the
//!   confidence-weighted line-height distribution, resolution-independent
//! - **Line Classification**: short-line, capitalization, list-marker,
//!   section-header, and sentence-ending features per line
//! - **Weighted Break Scoring**: eight fixed rules with an explicit,
//!   immutable weight table; scores accumulate additively
//! - **Tiered Selection**: certain / high / medium confidence passes,
//!   independently toggleable, monotonic accumulation
//! - **Language Profiles**: English, German, Korean, Spanish lexical cues
//!   behind one profile type
//!
//! ## Quick Start
//!
//! ```
//! use ocr_reflow::{ReflowEngine, geometry::Rect, layout::OcrLine};
//!
//! let lines = vec![
//!     OcrLine::new("Abstract", Rect::new(50.0, 40.0, 120.0, 20.0), 95.0),
//!     OcrLine::new("This paper studies paragraph", Rect::new(50.0, 90.0, 400.0, 20.0), 91.0),
//!     OcrLine::new("reconstruction from noisy scans.", Rect::new(50.0, 114.0, 400.0, 20.0), 90.0),
//! ];
//!
//! let engine = ReflowEngine::new();
//! let result = engine.reflow(&lines);
//! assert_eq!(result.paragraphs.len(), 2);
//! assert_eq!(result.paragraphs[0].text, "Abstract");
//! ```
//!
//! ## Architecture
//!
//! Estimator → Classifier → Scorer → Selector → Assembler, a strict
//! sequential pipeline with no feedback loops. A run is a pure function
//! of the input lines and the configuration, so documents can be
//! processed concurrently with zero shared state.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Layout analysis
pub mod geometry;
pub mod layout;

// Break detection
pub mod detect;

// Language profiles
pub mod language;

// Configuration
pub mod config;

// Pipeline
pub mod pipeline;

// Re-exports
pub use config::{DocumentKind, ReflowConfig};
pub use detect::{BreakCandidate, Paragraph, RuleSet, RuleWeights};
pub use error::{Error, Result};
pub use language::{Language, LanguageProfile};
pub use layout::{LineFeatures, OcrLine, Thresholds};
pub use pipeline::{DocumentReflow, ReflowEngine};
