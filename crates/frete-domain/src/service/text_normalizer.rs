//! Accent-, case- and whitespace-insensitive text folding

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics, collapse whitespace runs, trim and upper-case
///
/// `"  São   José "` becomes `"SAO JOSE"`.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Combining Diacritical Marks block
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
