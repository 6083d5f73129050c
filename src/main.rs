//! jobrelay - job definitions over HTTP with GitLab commit relay
//!
//! Main entry point for the jobrelay server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobrelay_api::{ApiServer, AppState};
use jobrelay_config::{Config, ConfigLoader};

/// jobrelay CLI.
///
/// GitLab settings come from the environment (`GITLAB_TOKEN`,
/// `GITLAB_PROJECT_ID`, `GITLAB_PROJECT_PATH`, optional `GITLAB_BASE_URL`),
/// which a `.env` file in the working directory may populate.
#[derive(Parser)]
#[command(name = "jobrelay")]
#[command(about = "Serve job definitions and relay commits to GitLab")]
#[command(version)]
struct Cli {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Jobs file (overrides JOBRELAY_JOBS_FILE)
    #[arg(long)]
    jobs_file: Option<PathBuf>,

    /// Log directory (default: ~/.jobrelay/logs)
    #[arg(long, env = "JOBRELAY_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

/// Load variables from an env file. Variables already set in the process win.
///
/// Returns `Ok(false)` when the file does not exist.
fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

fn jobrelay_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobrelay")
}

/// Initialize tracing with console and daily-rotated file output.
fn init_tracing(log_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("jobrelay")
        .filename_suffix("log")
        .max_log_files(14)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard stops the background writer.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

fn apply_cli(mut config: Config, cli: &Cli) -> Config {
    config.server.host = cli.host.clone();
    config.server.port = cli.port;
    if let Some(jobs_file) = &cli.jobs_file {
        config.jobs.file = jobs_file.clone();
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before parsing, so env-backed flags see the file too.
    let env_file = load_env_file(Path::new(".env"));
    let cli = Cli::parse();

    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| jobrelay_dir().join("logs"));
    init_tracing(log_dir)?;

    match env_file {
        Ok(true) => info!("Loaded environment from .env"),
        Ok(false) => {}
        Err(e) => warn!("Ignoring unreadable .env: {}", e),
    }

    let config = match ConfigLoader::from_env() {
        Ok(config) => apply_cli(config, &cli),
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting jobrelay v{}", env!("CARGO_PKG_VERSION"));
    info!("Jobs file: {}", config.jobs.file.display());
    info!(
        "Remote: {} (project {} / {}, branch {})",
        config.remote.base_url,
        config.remote.project_id,
        config.remote.project_path,
        config.remote.branch
    );

    let state = Arc::new(AppState::from_config(&config));
    let server = ApiServer::new(config.server.clone(), state);

    info!("API Endpoints:");
    info!("  GET  /jobs               - List jobs");
    info!("  GET  /jobs/{{id}}          - Get job");
    info!("  POST /jobs/{{id}}/commit   - Commit job file");
    info!("  GET  /health             - Health check");

    server.run().await
}
