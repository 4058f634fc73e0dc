//! Textual pattern matchers for line classification.
//!
//! This module detects the lexical shapes that signal structure in OCR
//! text: list markers, section-header vocabulary, and author/citation
//! patterns. Regexes are compiled once on first use and shared across
//! runs.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed multilingual section-header vocabulary.
///
/// Matching is case-insensitive substring containment, restricted by the
/// classifier to short lines so body sentences mentioning "results" are
/// not misread as headers.
const SECTION_HEADER_WORDS: &[&str] = &[
    // English
    "abstract",
    "introduction",
    "method",
    "methods",
    "result",
    "results",
    "discussion",
    "conclusion",
    "conclusions",
    "references",
    "bibliography",
    "acknowledgments",
    "appendix",
    // Spanish
    "resumen",
    "introducción",
    "métodos",
    "resultados",
    "discusión",
    "conclusiones",
    "referencias",
    "bibliografía",
    // German
    "kurzfassung",
    "zusammenfassung",
    "einleitung",
    "methoden",
    "ergebnisse",
    "diskussion",
    "schlussfolgerung",
    "literatur",
    "literaturverzeichnis",
    // Korean
    "초록",
    "서론",
    "방법",
    "결과",
    "고찰",
    "결론",
    "참고문헌",
];

/// Check whether text contains a section-header word.
///
/// # Examples
///
/// ```
/// use ocr_reflow::layout::patterns::contains_section_header_word;
///
/// assert!(contains_section_header_word("1. Introduction"));
/// assert!(contains_section_header_word("ZUSAMMENFASSUNG"));
/// assert!(contains_section_header_word("참고문헌"));
/// assert!(!contains_section_header_word("The quick brown fox"));
/// ```
pub fn contains_section_header_word(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SECTION_HEADER_WORDS.iter().any(|w| lowered.contains(w))
}

/// Check whether text opens with a list marker or bullet.
///
/// Recognized shapes: decimal lists (`1. `, `1 `), parenthesized numbers
/// (`(1)`), lettered lists (`a. `, `A `), bullet glyphs followed by
/// whitespace, and Roman numerals followed by `.` or whitespace.
///
/// # Examples
///
/// ```
/// use ocr_reflow::layout::patterns::starts_with_list_marker;
///
/// assert!(starts_with_list_marker("1. First item"));
/// assert!(starts_with_list_marker("(2) Second item"));
/// assert!(starts_with_list_marker("a. Lettered item"));
/// assert!(starts_with_list_marker("• Bulleted item"));
/// assert!(starts_with_list_marker("IV. Roman section"));
/// assert!(!starts_with_list_marker("Plain sentence."));
/// ```
pub fn starts_with_list_marker(text: &str) -> bool {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return false;
    }

    if let Some(regex) = get_decimal_list_regex() {
        if regex.is_match(trimmed) {
            return true;
        }
    }
    if let Some(regex) = get_paren_number_regex() {
        if regex.is_match(trimmed) {
            return true;
        }
    }
    if let Some(regex) = get_lettered_list_regex() {
        if regex.is_match(trimmed) {
            return true;
        }
    }
    if let Some(regex) = get_bullet_regex() {
        if regex.is_match(trimmed) {
            return true;
        }
    }
    if let Some(regex) = get_roman_numeral_regex() {
        if regex.is_match(trimmed) {
            return true;
        }
    }

    false
}

/// Check whether text looks like an author line or bibliographic citation.
///
/// Recognized shapes: `Name, I. &` author lists, `Name et al.`, a
/// parenthesized year `(1998)`, and bracketed reference numbers `[12]`.
/// This is an auxiliary signal for the scorer; it never gates
/// classification on its own.
///
/// # Examples
///
/// ```
/// use ocr_reflow::layout::patterns::looks_like_citation;
///
/// assert!(looks_like_citation("Smith, J. & Jones, K."));
/// assert!(looks_like_citation("Kim et al. reported similar findings"));
/// assert!(looks_like_citation("as shown earlier (2019)"));
/// assert!(looks_like_citation("[14] Architecture of large systems"));
/// assert!(!looks_like_citation("An ordinary sentence."));
/// ```
pub fn looks_like_citation(text: &str) -> bool {
    if let Some(regex) = get_author_initial_regex() {
        if regex.is_match(text) {
            return true;
        }
    }
    if let Some(regex) = get_et_al_regex() {
        if regex.is_match(text) {
            return true;
        }
    }
    if let Some(regex) = get_year_paren_regex() {
        if regex.is_match(text) {
            return true;
        }
    }
    if let Some(regex) = get_ref_number_regex() {
        if regex.is_match(text) {
            return true;
        }
    }

    false
}

/// Check whether the boundary between two lines crosses a quotation mark.
///
/// Fires when the first line closes a quotation or the second opens one,
/// a weak hint that dialogue or quoted material changes hands.
pub fn quotation_transition(current: &str, next: &str) -> bool {
    const CLOSING: &[char] = &['"', '\u{201D}', '\u{2019}', '»'];
    const OPENING: &[char] = &['"', '\u{201C}', '\u{2018}', '«'];

    let cur_end = current.trim_end().chars().last();
    let next_start = next.trim_start().chars().next();

    cur_end.is_some_and(|c| CLOSING.contains(&c)) || next_start.is_some_and(|c| OPENING.contains(&c))
}

// Regex patterns for structural markers (lazy-initialized)

static DECIMAL_LIST_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static PAREN_NUMBER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static LETTERED_LIST_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static BULLET_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static ROMAN_NUMERAL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static AUTHOR_INITIAL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static ET_AL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static YEAR_PAREN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static REF_NUMBER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn get_decimal_list_regex() -> Option<&'static Regex> {
    DECIMAL_LIST_REGEX
        .get_or_init(|| Regex::new(r"^\d{1,3}[.\s]\s*\S").ok())
        .as_ref()
}

fn get_paren_number_regex() -> Option<&'static Regex> {
    PAREN_NUMBER_REGEX
        .get_or_init(|| Regex::new(r"^\(\d{1,3}\)").ok())
        .as_ref()
}

fn get_lettered_list_regex() -> Option<&'static Regex> {
    LETTERED_LIST_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z][.\s]\s*\S").ok())
        .as_ref()
}

fn get_bullet_regex() -> Option<&'static Regex> {
    BULLET_REGEX
        .get_or_init(|| Regex::new(r"^[-•*▪▫○●]\s").ok())
        .as_ref()
}

fn get_roman_numeral_regex() -> Option<&'static Regex> {
    ROMAN_NUMERAL_REGEX
        .get_or_init(|| Regex::new(r"^(?:[IVXLC]{1,7})(?:\.|\s)\s*\S").ok())
        .as_ref()
}

fn get_author_initial_regex() -> Option<&'static Regex> {
    AUTHOR_INITIAL_REGEX
        .get_or_init(|| Regex::new(r"[A-Z][a-z]+,\s*[A-Z]\.\s*[&,]").ok())
        .as_ref()
}

fn get_et_al_regex() -> Option<&'static Regex> {
    ET_AL_REGEX
        .get_or_init(|| Regex::new(r"[A-Z][a-z]+\s+et\s+al\.?").ok())
        .as_ref()
}

fn get_year_paren_regex() -> Option<&'static Regex> {
    YEAR_PAREN_REGEX
        .get_or_init(|| Regex::new(r"\((?:19|20)\d{2}\)").ok())
        .as_ref()
}

fn get_ref_number_regex() -> Option<&'static Regex> {
    REF_NUMBER_REGEX
        .get_or_init(|| Regex::new(r"^\[\d{1,3}\]").ok())
        .as_ref()
}
