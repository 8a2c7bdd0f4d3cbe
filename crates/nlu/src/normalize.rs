//! Arabic text normalization

/// Normalize an utterance before matching: strip the Arabic tashkeel range
/// (U+064B..=U+065F combining marks), collapse whitespace runs to a single
/// space, and trim the ends.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !('\u{064B}'..='\u{065F}').contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        // "مَرْحَبًا" with fatha/sukun/tanwin marks
        assert_eq!(normalize("مَرْحَبًا"), "مرحبا");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  ابحث   عن \t شقة \n"), "ابحث عن شقة");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(normalize("اريد شراء فيلا"), "اريد شراء فيلا");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize("   "), "");
    }
}
