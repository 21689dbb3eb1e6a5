// src/utils/slug.rs
//
// Slug Normalizer
//
// Turns arbitrary human/directory names into the canonical comparison key
// used for season matching. The catalog computes the same slug server-side
// and compares by equality, so the output must be byte-identical for the
// same Unicode input. Total over all strings, deterministic, idempotent.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Normalize a display name into a lowercase hyphenated slug.
///
/// Steps, in order:
/// 1. Decompose to NFD and drop combining marks (accent stripping)
/// 2. Recompose to NFC
/// 3. Lowercase (locale-invariant)
/// 4. Strip everything that is not a word character, whitespace or hyphen
/// 5. Collapse whitespace/underscore runs into a single hyphen
/// 6. Collapse hyphen runs into one
/// 7. Trim leading/trailing hyphens
pub fn slugify(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let recomposed: String = stripped.nfc().collect();
    let lowered = recomposed.to_lowercase();

    let cleaned = NON_WORD.replace_all(&lowered, "");
    let hyphenated = SPACES.replace_all(&cleaned, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}
