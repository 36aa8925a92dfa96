use deunicode::deunicode_char;
use pinyin::ToPinyin;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Splits `title` into Latin tokens, one per word or per ideograph.
///
/// Han characters take their most common pinyin reading only; alternative
/// readings are discarded, which is lossy but fine for URL shaping. Letters
/// from other scripts are romanized per character and stay inside the
/// surrounding word. Whitespace, punctuation, symbols and emoji separate
/// words and never produce a token.
///
/// The title is composed to NFC first, so decomposed and precomposed
/// spellings of the same text yield the same tokens. Marks left over after
/// composition stay attached to their word.
pub fn transliterate(title: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in title.nfc() {
        if let Some(reading) = ch.to_pinyin() {
            flush(&mut word, &mut tokens);
            tokens.push(reading.plain().to_string());
        } else if is_latin_alphanumeric(ch) {
            word.push(ch);
        } else if ch.is_alphanumeric() {
            match romanize(ch) {
                Some(Romanized::Letters(letters)) => {
                    word.extend(letters.chars().filter(char::is_ascii_alphanumeric));
                }
                Some(Romanized::Ideograph(reading)) => {
                    flush(&mut word, &mut tokens);
                    tokens.push(reading.to_string());
                }
                // unmappable letters vanish without splitting the word
                None => {}
            }
        } else if is_combining_mark(ch) {
            if !word.is_empty() {
                word.push(ch);
            }
        } else {
            flush(&mut word, &mut tokens);
        }
    }

    flush(&mut word, &mut tokens);
    tokens
}

enum Romanized {
    Letters(&'static str),
    Ideograph(&'static str),
}

// deunicode pads ideograph readings with a trailing space ("Ni "), while
// alphabetic scripts map to bare letters. Some letters map to apostrophes or
// backticks (Arabic alef, ain); only their alphanumeric part is kept.
fn romanize(ch: char) -> Option<Romanized> {
    let mapped = deunicode_char(ch)?;
    let reading = mapped.trim();
    if reading.is_empty() {
        return None;
    }

    if mapped.ends_with(' ') && reading.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Some(Romanized::Ideograph(reading))
    } else {
        Some(Romanized::Letters(reading))
    }
}

fn is_latin_alphanumeric(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || (ch.is_alphabetic()
            && matches!(ch, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}'))
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    if !word.is_empty() {
        tokens.push(std::mem::take(word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideographs_become_one_token_each() {
        assert_eq!(transliterate("你好世界"), ["ni", "hao", "shi", "jie"]);
    }

    #[test]
    fn latin_words_keep_their_diacritics() {
        assert_eq!(transliterate("Café, crème!"), ["Café", "crème"]);
    }

    #[test]
    fn digits_stay_inside_words() {
        assert_eq!(transliterate("Top 10 tips4u"), ["Top", "10", "tips4u"]);
    }

    #[test]
    fn mixed_latin_and_han_split_at_script_change() {
        assert_eq!(transliterate("Rust基础"), ["Rust", "ji", "chu"]);
    }

    #[test]
    fn cyrillic_words_are_romanized_whole() {
        assert_eq!(transliterate("Привет мир"), ["Privet", "mir"]);
    }

    #[test]
    fn decomposed_accents_do_not_split_words() {
        assert_eq!(transliterate("e\u{301}cole"), ["école"]);
        assert_eq!(transliterate("e\u{301}cole"), transliterate("école"));
        // no precomposed form exists for q + acute
        assert_eq!(transliterate("q\u{301}uiz"), ["q\u{301}uiz"]);
    }

    #[test]
    fn stray_marks_outside_words_are_dropped() {
        assert_eq!(transliterate("\u{301}hi"), ["hi"]);
        assert_eq!(transliterate("你\u{301}"), ["ni"]);
    }

    #[test]
    fn arabic_words_survive_apostrophe_romanizations() {
        let tokens = transliterate("مرحبا بالعالم");
        assert_eq!(tokens.len(), 2, "{tokens:?}");
        assert!(tokens.iter().all(|t| t.bytes().all(|b| b.is_ascii_alphanumeric())));
    }

    #[test]
    fn emoji_and_symbols_are_dropped() {
        assert_eq!(transliterate("🎉 launch ✨ day ©"), ["launch", "day"]);
        assert!(transliterate("!!! ??? ...").is_empty());
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(transliterate("").is_empty());
    }
}
