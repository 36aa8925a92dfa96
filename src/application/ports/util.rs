// src/application/ports/util.rs

/// Turns free text into a slug candidate in the `[a-z0-9-]` alphabet.
///
/// Implementations must be pure and deterministic. An empty result is
/// allowed and means the text had nothing to transliterate.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
