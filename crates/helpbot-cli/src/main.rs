mod admin;
mod cli;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use helpbot_client::{HttpConfig, HttpSupportClient};
use helpbot_common::HelpbotError;
use helpbot_config::schema::{HelpbotConfig, LogLevel};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Parse `.env` contents (KEY=VALUE lines, `#` comments, optional
/// `export` prefix and quotes).
fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Load environment variables from a `.env` file in the working directory.
/// Variables already set in the process win.
///
/// Must run before the tokio runtime starts any threads.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };

    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn init_logging(override_directive: Option<&str>, level: LogLevel) {
    let fallback = format!("helpbot={}", level.directive());
    let requested = override_directive.unwrap_or(&fallback);
    let directive: Directive = requested.parse().unwrap_or_else(|_| {
        eprintln!("Ignoring invalid log level '{requested}'");
        LevelFilter::INFO.into()
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Resolve the effective config: file (or defaults), env overrides, then
/// CLI flags.
fn resolve_config(
    args: &Args,
    loaded: Result<HelpbotConfig, helpbot_common::ConfigError>,
) -> Result<HelpbotConfig, HelpbotError> {
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = HelpbotConfig::default();
        helpbot_config::apply_env_overrides(&mut config);
        config
    });

    if let Some(base) = args.api_base.as_deref() {
        tracing::info!("Using API base override: {base}");
        config.api.base_url = base.trim().to_string();
        helpbot_config::validation::validate(&config)?;
    }
    Ok(config)
}

async fn run(args: Args, config: HelpbotConfig) -> Result<(), HelpbotError> {
    let client = Arc::new(HttpSupportClient::new(HttpConfig::from_config(&config))?);
    tracing::info!("Support API at {}", client.base_url());

    match args.command() {
        Command::Chat => repl::run(client, &config.chat).await,
        Command::Metrics => admin::metrics(client.as_ref()).await,
        Command::Faq {
            title,
            content,
            tags,
        } => admin::create_faq(client.as_ref(), title, content, tags).await,
        Command::Reindex => admin::reindex(client.as_ref()).await,
        Command::Config => {
            println!("{}", helpbot_config::config_to_json(&config));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    // Load .env file before anything else, while the process is still
    // single-threaded
    load_dotenv();

    let args = cli::parse();

    let loaded = helpbot_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(args.log_level.as_deref(), level);

    tracing::info!("HelpBot v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            eprintln!("helpbot: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match resolve_config(&args, loaded) {
        Ok(config) => runtime.block_on(run(args, config)),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("helpbot: {e}");
            ExitCode::FAILURE
        }
    }
}
