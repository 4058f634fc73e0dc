//! Paragraph-break detection.
//!
//! The detection stages in pipeline order:
//! - Rule set and weight table
//! - Scoring of adjacent line pairs
//! - Tiered break selection
//! - Paragraph assembly

pub mod assembler;
pub mod rules;
pub mod scorer;
pub mod selector;

// Re-export main types
pub use assembler::{Paragraph, assemble_paragraphs};
pub use rules::{RuleSet, RuleWeights};
pub use scorer::{BreakCandidate, score_pairs};
pub use selector::select_breaks;
