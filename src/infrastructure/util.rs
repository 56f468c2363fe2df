use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Fixed transliteration set applied before the generic slugifier; Persian
/// titles come out as readable ASCII instead of being stripped.
const PERSIAN_MAP: &[(char, &str)] = &[
    (' ', "-"),
    ('\u{200c}', "-"), // zero-width non-joiner
    ('،', ""),
    ('؟', ""),
    ('آ', "a"),
    ('ا', "a"),
    ('ب', "b"),
    ('پ', "p"),
    ('ت', "t"),
    ('ث', "s"),
    ('ج', "j"),
    ('چ', "ch"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "z"),
    ('ر', "r"),
    ('ز', "z"),
    ('ژ', "zh"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "z"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', "a"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "gh"),
    ('ک', "k"),
    ('گ', "g"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('و', "v"),
    ('ه', "h"),
    ('ی', "y"),
];

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let mut transliterated = String::with_capacity(lowered.len());
        for ch in lowered.chars() {
            match PERSIAN_MAP.iter().find(|(from, _)| *from == ch) {
                Some((_, to)) => transliterated.push_str(to),
                None => transliterated.push(ch),
            }
        }
        slugify(transliterated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_titles_slugify_directly() {
        let generator = DefaultSlugGenerator;
        assert_eq!(
            generator.slugify("A Valid Article Title"),
            "a-valid-article-title"
        );
    }

    #[test]
    fn persian_titles_are_transliterated() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("سلام"), "slam");
        assert_eq!(generator.slugify("کتاب خوب"), "ktab-khvb");
    }

    #[test]
    fn punctuation_is_dropped() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("چی؟"), "chy");
    }
}
