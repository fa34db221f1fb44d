//! Title tokenization for the lexicon classifier.

/// Lower-cased word tokens of at least two characters, French stop words removed.
/// Accents are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .filter(|s| !is_stop_word(s))
        .map(str::to_string)
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "au", "aux", "avec", "ce", "ces", "cet", "cette", "dans", "de", "des", "du", "en", "et",
        "il", "ils", "la", "le", "les", "leur", "leurs", "lui", "ma", "mais", "me", "mes", "ne",
        "nos", "notre", "nous", "on", "ou", "où", "par", "pas", "pour", "qu", "que", "qui", "sa",
        "se", "ses", "son", "sur", "ta", "te", "tes", "un", "une", "vos", "votre", "vous",
    ];

    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(
            tokenize("Végétaliser la rue d'Oberkampf"),
            vec!["végétaliser", "rue", "oberkampf"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("Kiosque à musique; square du Temple"),
            vec!["kiosque", "musique", "square", "temple"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("  ").is_empty());
    }
}
