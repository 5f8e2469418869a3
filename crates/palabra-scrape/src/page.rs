use crate::normalize;
use anyhow::{Context, Result};
use palabra_model::{DictionaryEntry, SelectorSet};
use scraper::{ElementRef, Html, Selector};

/// Extract the word-of-day text from the home page.
///
/// The element is assumed present; its absence means the page structure
/// changed and is an error, not a recoverable outcome.
pub fn extract_word_of_day(html: &str, selectors: &SelectorSet) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = parse_selector(&selectors.word_of_day)?;

    let element = document
        .select(&selector)
        .next()
        .with_context(|| format!("No `{}` element on the home page", selectors.word_of_day))?;

    Ok(element_text(element))
}

/// Extract the introduction and definitions from an entry page.
///
/// The intro element is optional and defaults to an empty string. Zero
/// definition elements is a normal outcome: the word is not in the
/// dictionary.
pub fn extract_entry(html: &str, selectors: &SelectorSet) -> Result<DictionaryEntry> {
    let document = Html::parse_document(html);
    let intro_selector = parse_selector(&selectors.intro)?;
    let definition_selector = parse_selector(&selectors.definition)?;

    let intro = document
        .select(&intro_selector)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let definitions: Vec<String> = document
        .select(&definition_selector)
        .map(element_text)
        .collect();

    Ok(DictionaryEntry { intro, definitions })
}

// Selectors are configuration, so a malformed one is a reportable error.
fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid selector `{css}`: {e}"))
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    normalize::clean_fragment(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME_PAGE: &str = r#"
    <html><body>
    <header>Diccionario de la lengua española</header>
    <div class="c-word-day">
        <span class="c-word-day__title">Palabra del día</span>
        <span class="c-word-day__word">perro</span>
    </div>
    </body></html>
    "#;

    const ENTRY_PAGE: &str = r#"
    <html><body>
    <article>
        <div class="n2 c-text-intro">Del lat. <i>canis</i>.</div>
        <ol>
            <li class="j">1. m. Mamífero doméstico de la familia de los cánidos.</li>
            <li class="otra">no es una acepción</li>
            <li class="j">2. m. coloq.
                Persona despreciable.</li>
        </ol>
    </article>
    </body></html>
    "#;

    #[test]
    fn test_extract_word_of_day() {
        let word = extract_word_of_day(HOME_PAGE, &SelectorSet::default()).unwrap();
        assert_eq!(word, "perro");
    }

    #[test]
    fn test_word_of_day_missing_is_error() {
        let html = "<html><body><p>maintenance page</p></body></html>";
        assert!(extract_word_of_day(html, &SelectorSet::default()).is_err());
    }

    #[test]
    fn test_extract_entry() {
        let entry = extract_entry(ENTRY_PAGE, &SelectorSet::default()).unwrap();
        assert_eq!(entry.intro, "Del lat. canis.");
        assert_eq!(
            entry.definitions,
            vec![
                "1. m. Mamífero doméstico de la familia de los cánidos.",
                "2. m. coloq. Persona despreciable.",
            ]
        );
    }

    #[test]
    fn test_extract_entry_without_intro() {
        let html = r#"<html><body><li class="j">1. f. Cosa.</li></body></html>"#;
        let entry = extract_entry(html, &SelectorSet::default()).unwrap();
        assert_eq!(entry.intro, "");
        assert_eq!(entry.definitions, vec!["1. f. Cosa."]);
    }

    #[test]
    fn test_extract_entry_no_definitions() {
        let html = r#"<html><body><div class="n2 c-text-intro">intro sin acepciones</div></body></html>"#;
        let entry = extract_entry(html, &SelectorSet::default()).unwrap();
        assert!(entry.definitions.is_empty());
    }

    #[test]
    fn test_bad_selector_is_error() {
        let selectors = SelectorSet {
            word_of_day: ":::".to_string(),
            ..SelectorSet::default()
        };
        assert!(extract_word_of_day(HOME_PAGE, &selectors).is_err());
    }
}
