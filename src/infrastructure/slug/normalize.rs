use crate::domain::post::value_objects::SLUG_SEPARATOR;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Joins `tokens` and rewrites the result into `[a-z0-9]` words separated by
/// single hyphens. Returns an empty string when nothing survives.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut joined = String::new();
    for token in tokens {
        if !joined.is_empty() {
            joined.push(SLUG_SEPARATOR);
        }
        joined.push_str(token.as_ref());
    }

    let folded: String = joined
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| if ch.is_alphanumeric() { ch } else { SLUG_SEPARATOR })
        .collect();

    // lowercases, folds leftovers like `ß` or `ø`, collapses and trims hyphens
    slug::slugify(folded)
}
