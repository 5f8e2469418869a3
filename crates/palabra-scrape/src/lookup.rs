use crate::fetch::Fetcher;
use crate::page;
use anyhow::Result;
use palabra_model::{BrowserProfile, LookupResult, SelectorSet};
use reqwest::StatusCode;

pub const BASE_URL: &str = "https://dle.rae.es";

// The site serves the entry form view under this query.
const SEARCH_QUERY: &str = "m=form";

/// Lookup service for the RAE dictionary: direct word search and
/// word-of-day discovery.
pub struct Dictionary {
    fetcher: Fetcher,
    base_url: String,
    selectors: SelectorSet,
}

impl Dictionary {
    pub fn new(profile: &BrowserProfile) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(profile)?,
            base_url: BASE_URL.to_string(),
            selectors: SelectorSet::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_selectors(mut self, selectors: SelectorSet) -> Self {
        self.selectors = selectors;
        self
    }

    /// Look up a specific word.
    ///
    /// Transport failures propagate; everything else comes back as a
    /// [`LookupResult`], including non-200 statuses and missing words.
    pub async fn search(&self, word: &str) -> Result<LookupResult> {
        let url = format!("{}/{}?{}", self.base_url, word, SEARCH_QUERY);
        tracing::info!(url = %url, word = %word, "Fetching dictionary entry");

        let fetched = self.fetcher.fetch(&url).await?;
        result_from_response(word, fetched.status, &fetched.body, &self.selectors)
    }

    /// Discover the word of the day on the home page and look it up.
    ///
    /// A home page without the word-of-day element is an error; the page
    /// structure is an assumed-stable external contract with no fallback.
    pub async fn word_of_day(&self) -> Result<LookupResult> {
        tracing::info!(url = %self.base_url, "Fetching dictionary home page");
        let fetched = self.fetcher.fetch(&self.base_url).await?;

        let word = page::extract_word_of_day(&fetched.body, &self.selectors)?;
        tracing::info!(word = %word, "Extracted word of the day");

        println!("Word of the day:\n");
        self.search(&word).await
    }
}

fn result_from_response(
    word: &str,
    status: StatusCode,
    html: &str,
    selectors: &SelectorSet,
) -> Result<LookupResult> {
    if status != StatusCode::OK {
        return Ok(LookupResult::http_error(status.as_u16()));
    }

    let entry = page::extract_entry(html, selectors)?;
    if entry.definitions.is_empty() {
        tracing::debug!(word = %word, "No definition elements on the page");
        return Ok(LookupResult::not_found(word));
    }

    Ok(LookupResult::entry(word, &entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_PAGE: &str = r#"
    <html><body>
    <div class="n2 c-text-intro">Del lat. canis.</div>
    <li class="j">1. m. Mamífero doméstico.</li>
    <li class="j">2. m. coloq. Persona despreciable.</li>
    </body></html>
    "#;

    #[test]
    fn test_result_from_entry_page() {
        let result = result_from_response(
            "perro",
            StatusCode::OK,
            ENTRY_PAGE,
            &SelectorSet::default(),
        )
        .unwrap();

        assert_eq!(result.header, "perro:\nDel lat. canis.");
        assert_eq!(
            result.definitions,
            "1. m. Mamífero doméstico.\n2. m. coloq. Persona despreciable."
        );
    }

    #[test]
    fn test_result_from_page_without_definitions() {
        let html = "<html><body><p>Aviso: la palabra no está en el Diccionario.</p></body></html>";
        let result =
            result_from_response("xyzzynotaword", StatusCode::OK, html, &SelectorSet::default())
                .unwrap();

        assert_eq!(
            result.header,
            "Word 'xyzzynotaword' not found in the dictionary. Check the spelling."
        );
        assert!(result.definitions.is_empty());
    }

    #[test]
    fn test_result_from_http_error_ignores_body() {
        let result = result_from_response(
            "perro",
            StatusCode::SERVICE_UNAVAILABLE,
            ENTRY_PAGE,
            &SelectorSet::default(),
        )
        .unwrap();

        assert_eq!(result.header, "HTTP error code: 503");
        assert!(result.definitions.is_empty());
    }

    #[test]
    fn test_search_url_shape() {
        let url = format!("{}/{}?{}", BASE_URL, "perro", SEARCH_QUERY);
        assert_eq!(url, "https://dle.rae.es/perro?m=form");
    }
}
