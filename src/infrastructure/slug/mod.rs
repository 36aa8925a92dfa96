//! Title-to-slug pipeline: transliterate into Latin tokens, then normalize
//! into the `[a-z0-9-]` alphabet.
mod normalize;
mod transliterate;

pub use normalize::normalize;
pub use transliterate::transliterate;

use crate::application::ports::util::SlugGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        normalize(&transliterate(input))
    }
}
