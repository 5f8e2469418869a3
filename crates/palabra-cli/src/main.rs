use anyhow::Result;
use clap::Parser;
use palabra_model::{Browser, BrowserProfile, LookupResult, Platform};
use palabra_scrape::Dictionary;
use palabra_translate::TranslateOptions;

#[derive(Parser)]
#[command(name = "palabra")]
#[command(about = "Look up Spanish words in the RAE dictionary, optionally translated to English")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Search for the definition of a Spanish word
    #[arg(short, long, value_name = "WORD")]
    search: Option<String>,

    /// Show the word of the day and its definition
    #[arg(short, long)]
    wotd: bool,

    /// Translate the result to English via the Gemini API
    #[arg(short, long)]
    translate: bool,

    /// Browser identity presented to the dictionary site
    #[arg(long, default_value = "firefox", value_enum)]
    browser: BrowserArg,

    /// Platform identity presented to the dictionary site
    #[arg(long, default_value = "linux", value_enum)]
    platform: PlatformArg,

    /// Base URL of the dictionary site
    #[arg(long, default_value = palabra_scrape::BASE_URL)]
    base_url: String,

    /// Path to the translation prompt template
    #[arg(long, default_value = "prompt.txt")]
    prompt: String,

    /// Generative model used for translation
    #[arg(long, default_value = palabra_translate::DEFAULT_MODEL)]
    model: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BrowserArg {
    Firefox,
    Chrome,
}

impl From<BrowserArg> for Browser {
    fn from(arg: BrowserArg) -> Self {
        match arg {
            BrowserArg::Firefox => Browser::Firefox,
            BrowserArg::Chrome => Browser::Chrome,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PlatformArg {
    Linux,
    Windows,
    Macos,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Macos => Platform::Macos,
        }
    }
}

/// Which primary mode the flags select. `-s` and `-w` are mutually
/// exclusive; picking neither or both is reported as guidance, not as a
/// parse error.
enum Mode<'a> {
    Search(&'a str),
    WordOfDay,
    Conflict,
    None,
}

fn pick_mode(search: Option<&str>, wotd: bool) -> Mode<'_> {
    match (search, wotd) {
        (Some(_), true) => Mode::Conflict,
        (Some(word), false) => Mode::Search(word),
        (None, true) => Mode::WordOfDay,
        (None, false) => Mode::None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli);

    let dictionary = || -> Result<Dictionary> {
        let profile = BrowserProfile::new(cli.browser.into(), cli.platform.into());
        Ok(Dictionary::new(&profile)?.with_base_url(&cli.base_url))
    };

    let result = match pick_mode(cli.search.as_deref(), cli.wotd) {
        Mode::Conflict => {
            println!("You can only pick one mode");
            return Ok(());
        }
        Mode::None => {
            println!("No valid option picked");
            println!("Use -h or --help for more information.");
            return Ok(());
        }
        Mode::Search(word) => {
            tracing::info!(word = %word, "Searching the dictionary");
            dictionary()?.search(word).await?
        }
        Mode::WordOfDay => {
            tracing::info!("Looking up the word of the day");
            dictionary()?.word_of_day().await?
        }
    };

    if cli.translate {
        let options = TranslateOptions {
            prompt_path: cli.prompt.clone(),
            model: cli.model.clone(),
        };
        palabra_translate::translate(&result, &options).await?;
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &LookupResult) {
    println!("{}", result.header);
    println!("{}", result.definitions);
}

fn init_tracing(cli: &Cli) {
    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-08-05 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(
                time_format.to_string(),
            ))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
                time_format.to_string(),
            ))
            .init();
    }
}
