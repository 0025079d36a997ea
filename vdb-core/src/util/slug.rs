use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new("[^a-z0-9]+").unwrap();
}

const fn is_combining_diacritical_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Turns human readable text into a URL path segment.
///
/// The result only consists of `[a-z0-9]` separated by single hyphens
/// and might be empty.
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritical_mark(*c))
        // Does not decompose
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect();
    NON_SLUG_CHARS
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

/// Appends `-2`, `-3`, ... to `base` until `is_taken` returns `false`.
pub fn unique_slug<E>(
    base: &str,
    mut is_taken: impl FnMut(&str) -> Result<bool, E>,
) -> Result<String, E> {
    if !is_taken(base)? {
        return Ok(base.to_string());
    }
    let mut suffix = 2_u64;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !is_taken(&candidate)? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
