//! Leading noise words (articles) ignored when ordering titles

/// Noise words of one language, upper case, each ending in its separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseWords {
    words: &'static [&'static str],
}

const ENGLISH: &[&str] = &["THE ", "AN ", "A "];
const FRENCH: &[&str] = &["LES ", "LE ", "LA ", "L'", "L\u{2019}", "UNE ", "UN ", "DES "];
const GERMAN: &[&str] = &["DER ", "DIE ", "DAS ", "EINE ", "EIN "];
const SPANISH: &[&str] = &["LOS ", "LAS ", "EL ", "LA ", "UNA ", "UN "];
const ITALIAN: &[&str] = &[
    "GLI ", "IL ", "LO ", "LA ", "LE ", "L'", "L\u{2019}", "I ", "UNO ", "UNA ", "UN ",
];
const DUTCH: &[&str] = &["HET ", "DE ", "EEN "];

impl NoiseWords {
    /// Noise words for a language tag (`en`, `en-GB`, `fra`, ...)
    ///
    /// Unknown languages have no noise words.
    pub fn for_language(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let words = match primary.as_str() {
            "en" | "eng" => ENGLISH,
            "fr" | "fra" | "fre" => FRENCH,
            "de" | "deu" | "ger" => GERMAN,
            "es" | "spa" => SPANISH,
            "it" | "ita" => ITALIAN,
            "nl" | "nld" | "dut" => DUTCH,
            _ => &[],
        };
        Self { words }
    }

    /// Remove one leading noise word from an upper-cased title
    ///
    /// A title that is nothing but a noise word is returned unchanged.
    pub fn strip_leading<'a>(&self, upper: &'a str) -> &'a str {
        for word in self.words {
            if let Some(rest) = upper.strip_prefix(word) {
                let rest = rest.trim_start();
                if !rest.is_empty() {
                    return rest;
                }
            }
        }
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_articles() {
        let noise = NoiseWords::for_language("en");
        assert_eq!(noise.strip_leading("THE HOBBIT"), "HOBBIT");
        assert_eq!(noise.strip_leading("A GAME OF THRONES"), "GAME OF THRONES");
        assert_eq!(noise.strip_leading("AN ECHO"), "ECHO");
        assert_eq!(noise.strip_leading("THEATRE"), "THEATRE");
        assert_eq!(noise.strip_leading("ANIMALS"), "ANIMALS");
    }

    #[test]
    fn test_only_one_word_is_stripped() {
        let noise = NoiseWords::for_language("en-GB");
        assert_eq!(noise.strip_leading("THE A TEAM"), "A TEAM");
    }

    #[test]
    fn test_bare_noise_word_is_kept() {
        let noise = NoiseWords::for_language("en");
        assert_eq!(noise.strip_leading("THE"), "THE");
        assert_eq!(noise.strip_leading("THE "), "THE ");
    }

    #[test]
    fn test_elision_and_other_languages() {
        assert_eq!(
            NoiseWords::for_language("fra").strip_leading("L'ÉTRANGER"),
            "ÉTRANGER"
        );
        assert_eq!(
            NoiseWords::for_language("de").strip_leading("DIE VERWANDLUNG"),
            "VERWANDLUNG"
        );
        assert_eq!(
            NoiseWords::for_language("xx").strip_leading("THE HOBBIT"),
            "THE HOBBIT"
        );
    }
}
