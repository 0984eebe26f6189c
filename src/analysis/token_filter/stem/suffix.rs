//! Suffix-truncation stemmer for English and Russian.
//!
//! This is a heuristic stemmer: it picks a suffix table by script and cuts
//! off at most one ending. There is no dictionary and no exception list.
//!
//! Length thresholds count characters, so Cyrillic words keep endings that
//! a byte-counting stemmer would cut (`слов` stays `слов`, not `сл`).

use super::Stemmer;

/// Words shorter than this many characters are never stemmed.
const MIN_STEM_LENGTH: usize = 4;

/// Characters that must remain in front of a removed suffix, plus one.
const MIN_REMAINDER: usize = 2;

/// English endings, tried in order; the first applicable one is removed.
const ENGLISH_SUFFIXES: &[&str] = &[
    "ization", "ation", "sion", "tion", "ness", "ment", "ing", "ed", "er", "est", "ly", "s", "es",
];

/// Russian endings, tried in order; the first applicable one is removed.
const RUSSIAN_SUFFIXES: &[&str] = &[
    "ами", "ями", "ов", "ев", "ей", "ой", "ом", "ем", "ая", "ое", "ые", "ие",
];

/// Script of a word as far as the stemmer is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Contains at least one Cyrillic character.
    Cyrillic,
    /// No Cyrillic, at least one ASCII letter.
    Latin,
    /// Neither; the word is left alone.
    Unknown,
}

/// Detect the dominant script of `word`.
///
/// Any character in the Cyrillic block (U+0400..=U+04FF) wins over Latin
/// letters, so mixed words use the Russian table.
pub fn detect_script(word: &str) -> Script {
    let mut has_latin = false;
    for c in word.chars() {
        if ('\u{0400}'..='\u{04FF}').contains(&c) {
            return Script::Cyrillic;
        }
        if c.is_ascii_alphabetic() {
            has_latin = true;
        }
    }
    if has_latin { Script::Latin } else { Script::Unknown }
}

/// Stem `word` with the English or Russian suffix table.
///
/// # Examples
///
/// ```
/// use boolex::analysis::stem;
///
/// assert_eq!(stem("jumping"), "jump");
/// assert_eq!(stem("книгами"), "книг");
/// assert_eq!(stem("cat"), "cat");
/// assert_eq!(stem("2024"), "2024");
/// ```
pub fn stem(word: &str) -> String {
    let suffixes = match detect_script(word) {
        Script::Cyrillic => RUSSIAN_SUFFIXES,
        Script::Latin => ENGLISH_SUFFIXES,
        Script::Unknown => return word.to_string(),
    };
    strip_suffix(word, suffixes)
}

fn strip_suffix(word: &str, suffixes: &[&str]) -> String {
    let length = word.chars().count();
    if length < MIN_STEM_LENGTH {
        return word.to_string();
    }

    for suffix in suffixes {
        if length > suffix.chars().count() + MIN_REMAINDER
            && let Some(stemmed) = word.strip_suffix(suffix)
        {
            return stemmed.to_string();
        }
    }

    word.to_string()
}

/// [`Stemmer`] wrapper around [`stem`].
#[derive(Debug, Clone, Default)]
pub struct SuffixStemmer;

impl SuffixStemmer {
    /// Create a new suffix stemmer.
    pub fn new() -> Self {
        SuffixStemmer
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        stem(word)
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
