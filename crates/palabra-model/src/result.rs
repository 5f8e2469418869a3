/// The outcome of a single dictionary lookup.
///
/// `definitions` is empty exactly when the word does not exist on the site
/// or the HTTP call returned a non-200 status; `header` then carries the
/// user-facing explanation instead of the word and its introduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub header: String,
    pub definitions: String,
}

impl LookupResult {
    /// A successful lookup: the word, its introduction, and its definitions.
    pub fn entry(word: &str, entry: &DictionaryEntry) -> Self {
        Self {
            header: format!("{word}:\n{}", entry.intro),
            definitions: entry.joined_definitions(),
        }
    }

    /// The page exists but carries no definition elements.
    pub fn not_found(word: &str) -> Self {
        Self {
            header: format!("Word '{word}' not found in the dictionary. Check the spelling."),
            definitions: String::new(),
        }
    }

    /// The entry page answered with a non-200 status.
    pub fn http_error(status: u16) -> Self {
        Self {
            header: format!("HTTP error code: {status}"),
            definitions: String::new(),
        }
    }

    /// Whether the lookup produced any definitions.
    pub fn found(&self) -> bool {
        !self.definitions.is_empty()
    }
}

/// An entry as parsed from a single dictionary page.
///
/// Transient: exists only between page extraction and result construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Introduction block, empty when the page has none.
    pub intro: String,
    /// Definition texts in document order.
    pub definitions: Vec<String>,
}

impl DictionaryEntry {
    /// Collapse the definitions into one newline-joined string.
    pub fn joined_definitions(&self) -> String {
        self.definitions.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_result() {
        let entry = DictionaryEntry {
            intro: "Del lat. canis.".to_string(),
            definitions: vec![
                "1. m. Mamífero doméstico.".to_string(),
                "2. m. coloq. Persona despreciable.".to_string(),
            ],
        };
        let result = LookupResult::entry("perro", &entry);
        assert_eq!(result.header, "perro:\nDel lat. canis.");
        assert_eq!(
            result.definitions,
            "1. m. Mamífero doméstico.\n2. m. coloq. Persona despreciable."
        );
        assert!(result.found());
    }

    #[test]
    fn test_entry_result_without_intro() {
        let entry = DictionaryEntry {
            intro: String::new(),
            definitions: vec!["1. f. Prueba.".to_string()],
        };
        let result = LookupResult::entry("prueba", &entry);
        assert_eq!(result.header, "prueba:\n");
        assert!(result.found());
    }

    #[test]
    fn test_not_found_result() {
        let result = LookupResult::not_found("xyzzynotaword");
        assert_eq!(
            result.header,
            "Word 'xyzzynotaword' not found in the dictionary. Check the spelling."
        );
        assert!(result.definitions.is_empty());
        assert!(!result.found());
    }

    #[test]
    fn test_http_error_result() {
        let result = LookupResult::http_error(503);
        assert_eq!(result.header, "HTTP error code: 503");
        assert!(!result.found());
    }
}
