// tests/support/mocks/util.rs

/// 入力をそのまま返すスラグ生成器
#[derive(Clone)]
pub struct IdentitySlug;

impl pinyin_press::application::ports::util::SlugGenerator for IdentitySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
