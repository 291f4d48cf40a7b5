use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AuthService, Clock, GameLoopService, GameTiming};
use storage::repository::Storage;
use tracing::info;
use ui::{App, AppConfig, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://math-adventure.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMillis { flag: &'static str, raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMillis { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected milliseconds)")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

fn parse_millis(flag: &'static str, raw: &str) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidMillis {
        flag,
        raw: raw.to_string(),
    })
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

struct DesktopApp {
    services: AppServices,
    config: AppConfig,
}

impl UiApp for DesktopApp {
    fn config(&self) -> AppConfig {
        self.config
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        self.services.game_loop()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    muted: bool,
    feedback_ms: u64,
    latency_ms: u64,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--muted] [--verbose]");
    eprintln!("                           [--feedback-ms <ms>] [--latency-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --feedback-ms {}", GameTiming::DEFAULT_FEEDBACK_MS);
    eprintln!("  --latency-ms 0");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATH_DB_URL, MATH_MUTED, MATH_FEEDBACK_MS, MATH_LATENCY_MS, RUST_LOG");
}

impl Args {
    /// Parse flags after the optional `ui` subcommand. `env` looks up
    /// fallbacks so tests do not depend on the process environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env("MATH_DB_URL").map_or_else(
            || normalize_sqlite_url(DEFAULT_DB_URL.to_string()),
            normalize_sqlite_url,
        );
        let mut muted = env("MATH_MUTED").is_some_and(|value| parse_flag(&value));
        let mut feedback_ms = match env("MATH_FEEDBACK_MS") {
            Some(raw) => parse_millis("MATH_FEEDBACK_MS", &raw)?,
            None => GameTiming::DEFAULT_FEEDBACK_MS,
        };
        let mut latency_ms = match env("MATH_LATENCY_MS") {
            Some(raw) => parse_millis("MATH_LATENCY_MS", &raw)?,
            None => 0,
        };
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--muted" => muted = true,
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    feedback_ms = parse_millis("--feedback-ms", &value)?;
                }
                "--latency-ms" => {
                    let value = require_value(args, "--latency-ms")?;
                    latency_ms = parse_millis("--latency-ms", &value)?;
                }
                "--verbose" | "-v" => verbose = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            muted,
            feedback_ms,
            latency_ms,
            verbose,
        })
    }

    fn app_config(&self) -> AppConfig {
        AppConfig {
            muted_on_launch: self.muted,
            timing: GameTiming::default().with_feedback_ms(self.feedback_ms),
        }
    }
}

/// Turn `sqlite:relative/path` or a bare path into an absolute `sqlite://` URL.
fn normalize_sqlite_url(raw: String) -> String {
    let raw = raw.trim();
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw.to_string();
    }

    let path = std::path::Path::new(raw.strip_prefix("sqlite:").unwrap_or(raw));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the directory the database file lives in. The file itself is
/// created by the pool on first connect.
fn ensure_db_dir(db_url: &str) -> Result<(), ArgsError> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let invalid = || ArgsError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() {
        return Err(invalid());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent).map_err(|_| invalid())?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1).peekable();

    let first = argv.peek().cloned();
    match first.as_deref() {
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("ui") => {
            argv.next();
        }
        Some(first) if !first.starts_with('-') => {
            let err = ArgsError::UnknownArg(first.to_string());
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
        _ => {}
    }

    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(parsed.verbose);

    ensure_db_dir(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    info!(db = %parsed.db_url, "storage ready");

    let services = AppServices::from_storage_with_latency(
        &storage,
        Clock::system(),
        Duration::from_millis(parsed.latency_ms),
    );
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        config: parsed.app_config(),
    });
    let context = build_app_context(&app);

    // tao can open always-on-top in some macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math Adventure")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
