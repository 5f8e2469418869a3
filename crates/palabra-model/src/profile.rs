/// Browser identity presented to the dictionary site.
///
/// The site sits behind bot detection that rejects clients without a
/// plausible browser signature, so every request carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Browser {
    #[default]
    Firefox,
    Chrome,
}

/// Platform half of the browser signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Linux,
    Windows,
    Macos,
}

/// Browser + platform pair used to construct the fetcher's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserProfile {
    pub browser: Browser,
    pub platform: Platform,
}

impl BrowserProfile {
    pub fn new(browser: Browser, platform: Platform) -> Self {
        Self { browser, platform }
    }

    /// The User-Agent string matching this profile.
    pub fn user_agent(&self) -> &'static str {
        match (self.browser, self.platform) {
            (Browser::Firefox, Platform::Linux) => {
                "Mozilla/5.0 (X11; Linux x86_64; rv:141.0) Gecko/20100101 Firefox/141.0"
            }
            (Browser::Firefox, Platform::Windows) => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:141.0) Gecko/20100101 Firefox/141.0"
            }
            (Browser::Firefox, Platform::Macos) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:141.0) Gecko/20100101 Firefox/141.0"
            }
            (Browser::Chrome, Platform::Linux) => {
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            }
            (Browser::Chrome, Platform::Windows) => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            }
            (Browser::Chrome, Platform::Macos) => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = BrowserProfile::default();
        assert_eq!(profile.browser, Browser::Firefox);
        assert_eq!(profile.platform, Platform::Linux);
    }

    #[test]
    fn test_user_agent_matches_profile() {
        let firefox = BrowserProfile::new(Browser::Firefox, Platform::Linux);
        assert!(firefox.user_agent().contains("Firefox"));
        assert!(firefox.user_agent().contains("Linux"));

        let chrome = BrowserProfile::new(Browser::Chrome, Platform::Windows);
        assert!(chrome.user_agent().contains("Chrome"));
        assert!(chrome.user_agent().contains("Windows NT"));
    }
}
