pub mod gemini;

use palabra_model::LookupResult;
use std::fs;
use thiserror::Error;

pub use gemini::{GeminiClient, API_KEY_VAR, DEFAULT_MODEL};

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("environment variable `{0}` is not set")]
    MissingApiKey(&'static str),

    #[error("failed to read prompt template `{path}`: {source}")]
    PromptTemplate {
        path: String,
        source: std::io::Error,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("response contained no generated text")]
    EmptyResponse,
}

/// How a translation request is assembled and sent.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Path of the prompt template file.
    pub prompt_path: String,
    /// Generative model identifier.
    pub model: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            prompt_path: "prompt.txt".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Translate a lookup result and print the generated text.
///
/// A result without definitions is reported on stdout and skipped before
/// the prompt file, the environment, or the network are touched.
pub async fn translate(
    result: &LookupResult,
    options: &TranslateOptions,
) -> Result<(), TranslateError> {
    if !result.found() {
        println!("No definitions found for the word.");
        return Ok(());
    }

    let template =
        fs::read_to_string(&options.prompt_path).map_err(|source| TranslateError::PromptTemplate {
            path: options.prompt_path.clone(),
            source,
        })?;
    let prompt = build_prompt(&template, result);

    let client = GeminiClient::from_env(&options.model)?;
    tracing::info!(model = %options.model, chars = prompt.len(), "Requesting translation");
    let text = client.generate(&prompt).await?;

    println!("{text}");
    Ok(())
}

/// Merge the prompt template with a lookup result: template, blank line,
/// header, definitions.
pub fn build_prompt(template: &str, result: &LookupResult) -> String {
    format!("{template}\n\n{}\n{}", result.header, result.definitions)
}
