/// CSS selectors locating the dictionary's marked-up fragments.
///
/// The site's markup is an undocumented external contract: these class
/// names are what the pages currently serve, and a markup change on the
/// site is fixed here rather than in the extraction logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    /// Word-of-day element on the home page.
    pub word_of_day: String,
    /// Introduction block on an entry page, at most one per page.
    pub intro: String,
    /// Definition list items on an entry page, zero or more.
    pub definition: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            word_of_day: "span.c-word-day__word".to_string(),
            intro: "div.n2.c-text-intro".to_string(),
            definition: "li.j".to_string(),
        }
    }
}
