use crate::TranslateError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "api_key";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let mut text = String::new();
        for part in candidate.content.parts {
            text.push_str(&part.text);
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Minimal client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.to_string(),
        }
    }

    /// Read the API key from the environment. A missing key is a
    /// configuration error at the point of use, not at startup.
    pub fn from_env(model: &str) -> Result<Self, TranslateError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| TranslateError::MissingApiKey(API_KEY_VAR))?;
        Ok(Self::new(api_key, model))
    }

    /// Submit one completion request and return the generated text verbatim.
    pub async fn generate(&self, prompt: &str) -> Result<String, TranslateError> {
        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Api(format!("HTTP {status}")));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(TranslateError::EmptyResponse)
    }
}
