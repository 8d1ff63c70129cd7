use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::gateway::{API_URL_ENV, DEFAULT_API_URL};
use services::{
    AssessmentGateway, AssessmentService, ChatGateway, ChatService, Clock, GatewayConfig,
    HttpGateway, LanguageService, UnsupportedVoiceCapture, VoiceCapture,
};
use storage::Storage;
use symptom_core::Language;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DB_URL_ENV: &str = "SYMPTOM_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://symptom.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    language: Language,
    assessment: Arc<AssessmentService>,
    chat: Arc<ChatService>,
    languages: Arc<LanguageService>,
    voice: Arc<dyn VoiceCapture>,
}

impl UiApp for DesktopApp {
    fn assessment_service(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    fn language_service(&self) -> Arc<LanguageService> {
        Arc::clone(&self.languages)
    }

    fn voice_capture(&self) -> Arc<dyn VoiceCapture> {
        Arc::clone(&self.voice)
    }

    fn initial_language(&self) -> Language {
        self.language
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    gateway: GatewayConfig,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <base_url>] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {DEFAULT_API_URL}");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, {DB_URL_ENV}, RUST_LOG");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut db_url =
            env(DB_URL_ENV).map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut api_flag: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api" => api_flag = Some(require_value(&mut args, "--api")?),
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let gateway = match api_flag {
            Some(raw) => GatewayConfig::parse(&raw).map_err(|_| ArgsError::InvalidApiUrl { raw })?,
            None => GatewayConfig::from_lookup(&env).map_err(|_| ArgsError::InvalidApiUrl {
                raw: env(API_URL_ENV).unwrap_or_default(),
            })?,
        };
        Ok(Parsed::Run(Self { db_url, gateway }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;

    let languages = Arc::new(LanguageService::new(Arc::clone(&storage.preferences)));
    let language = languages.load().await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not restore language preference");
        Language::default()
    });
    tracing::info!(api = args.gateway.base_url.as_str(), %language, "launching");

    let gateway = Arc::new(HttpGateway::new(args.gateway));
    let assessment_gateway: Arc<dyn AssessmentGateway> = gateway.clone();
    let chat_gateway: Arc<dyn ChatGateway> = gateway;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        language,
        assessment: Arc::new(AssessmentService::new(assessment_gateway)),
        chat: Arc::new(ChatService::new(chat_gateway, Clock::default_clock())),
        languages,
        voice: Arc::new(UnsupportedVoiceCapture),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Health Assistant")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let Parsed::Run(parsed) = Args::parse(Vec::new(), no_env).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(parsed.db_url, DEFAULT_DB_URL);
        assert_eq!(parsed.gateway.base_url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| (key == API_URL_ENV).then(|| "http://env.example".to_string());
        let Parsed::Run(parsed) =
            Args::parse(args(&["--api", "http://flag.example/", "--db", "sqlite::memory:"]), env)
                .unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(parsed.gateway.base_url.as_str(), "http://flag.example");
        assert_eq!(parsed.db_url, "sqlite::memory:");
    }

    #[test]
    fn missing_and_unknown_arguments_are_rejected() {
        assert!(matches!(
            Args::parse(args(&["--api"]), no_env),
            Err(ArgsError::MissingValue { flag: "--api" })
        ));
        assert!(matches!(
            Args::parse(args(&["--verbose"]), no_env),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            Args::parse(args(&["--api", "not a url"]), no_env),
            Err(ArgsError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(Args::parse(args(&["-h"]), no_env).unwrap(), Parsed::Help);
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/app.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/app.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
