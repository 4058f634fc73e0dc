//! Language profiles for textual break cues.
//!
//! Physical layout signals (gaps, indentation) transfer across languages,
//! but textual signals do not: sentence terminators, the words that commonly
//! open a paragraph, and discourse transition markers are all
//! locale-specific. This module models them as one polymorphic
//! [`LanguageProfile`] selected at configuration time instead of
//! per-language duplicated rule bodies.

use serde::{Deserialize, Serialize};

/// Supported document languages.
///
/// Selected externally per document locale; the profile stays read-only
/// for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// German
    German,
    /// Korean
    Korean,
    /// Spanish
    Spanish,
}

/// Locale-specific lexical cues used to bias textual-pattern rules.
///
/// All three sets are static data; a profile is cheap to copy around and
/// never mutated during a run.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    /// Strings a sentence may legitimately end with
    pub sentence_endings: &'static [&'static str],
    /// Words that commonly open a new paragraph
    pub paragraph_starters: &'static [&'static str],
    /// Discourse transition markers ("however", "furthermore", ...)
    pub transition_markers: &'static [&'static str],
}

impl Language {
    /// Get the lexical profile for this language.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::language::Language;
    ///
    /// let profile = Language::English.profile();
    /// assert!(profile.sentence_endings.contains(&"."));
    /// assert!(profile.transition_markers.contains(&"however"));
    /// ```
    pub fn profile(&self) -> LanguageProfile {
        match self {
            Language::English => ENGLISH,
            Language::German => GERMAN,
            Language::Korean => KOREAN,
            Language::Spanish => SPANISH,
        }
    }
}

const ENGLISH: LanguageProfile = LanguageProfile {
    sentence_endings: &[".", "!", "?", ".\"", ".'", ".)"],
    paragraph_starters: &[
        "the", "this", "these", "in", "on", "we", "it", "a", "an", "our",
    ],
    transition_markers: &[
        "however",
        "furthermore",
        "moreover",
        "therefore",
        "additionally",
        "finally",
        "nevertheless",
        "consequently",
        "in contrast",
        "for example",
    ],
};

const GERMAN: LanguageProfile = LanguageProfile {
    sentence_endings: &[".", "!", "?", ".\"", ".“", ".)"],
    paragraph_starters: &[
        "der", "die", "das", "ein", "eine", "in", "wir", "es", "dies", "unsere",
    ],
    transition_markers: &[
        "jedoch",
        "außerdem",
        "darüber hinaus",
        "daher",
        "zusätzlich",
        "schließlich",
        "dennoch",
        "folglich",
        "im gegensatz",
        "zum beispiel",
    ],
};

// Korean sentences end in final-verb suffixes rather than dedicated
// punctuation, but OCR output of printed Korean carries western-style
// terminators, so the terminator set still applies.
const KOREAN: LanguageProfile = LanguageProfile {
    sentence_endings: &[".", "!", "?", "다.", "요.", "함."],
    paragraph_starters: &["이", "그", "저", "또한", "우리", "본", "하지만", "그리고"],
    transition_markers: &[
        "그러나",
        "또한",
        "게다가",
        "따라서",
        "추가로",
        "마지막으로",
        "그럼에도",
        "결과적으로",
        "반면에",
        "예를 들어",
    ],
};

const SPANISH: LanguageProfile = LanguageProfile {
    sentence_endings: &[".", "!", "?", ".\"", ".»", ".)"],
    paragraph_starters: &[
        "el", "la", "los", "las", "un", "una", "en", "este", "esta", "nuestro",
    ],
    transition_markers: &[
        "sin embargo",
        "además",
        "por otra parte",
        "por lo tanto",
        "adicionalmente",
        "finalmente",
        "no obstante",
        "en consecuencia",
        "en cambio",
        "por ejemplo",
    ],
};

impl LanguageProfile {
    /// Check whether trimmed text begins with a paragraph starter or a
    /// transition marker for this locale.
    ///
    /// Matching is case-insensitive and requires a word boundary after the
    /// cue so "therefore" matches but "thermal" does not match "the".
    pub fn starts_with_cue(&self, text: &str) -> bool {
        let lowered = text.trim_start().to_lowercase();
        self.paragraph_starters
            .iter()
            .chain(self.transition_markers.iter())
            .any(|cue| {
                lowered.starts_with(cue)
                    && lowered[cue.len()..]
                        .chars()
                        .next()
                        .map_or(true, |c| !c.is_alphanumeric())
            })
    }

    /// Check whether trimmed text ends with one of this locale's sentence
    /// terminators.
    pub fn ends_sentence(&self, text: &str) -> bool {
        let trimmed = text.trim_end();
        self.sentence_endings.iter().any(|e| trimmed.ends_with(e))
    }
}
