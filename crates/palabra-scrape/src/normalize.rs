use unicode_normalization::UnicodeNormalization;

/// Normalize a text fragment pulled out of an HTML element.
///
/// NFC-normalizes so accented characters have a consistent representation
/// (important for Spanish: á, é, í, ó, ú, ñ, ü) and collapses the
/// whitespace runs that nested markup leaves behind into single spaces.
pub fn clean_fragment(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc() {
        // n + combining tilde -> ñ (precomposed)
        let decomposed = "n\u{0303}";
        assert_eq!(clean_fragment(decomposed), "ñ");
    }

    #[test]
    fn test_collapse_whitespace() {
        let input = "  1.   m. \n\t Mamífero  doméstico. ";
        assert_eq!(clean_fragment(input), "1. m. Mamífero doméstico.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_fragment("   \n "), "");
    }
}
