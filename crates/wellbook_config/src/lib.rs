// --- File: crates/wellbook_config/src/lib.rs ---

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use tracing::debug;

pub mod models;
pub use models::*;

const DEFAULT_ENV_PREFIX: &str = "WELLBOOK";

/// Loads the application configuration.
///
/// Sources, later ones winning: baseline defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, then environment variables with the `WELLBOOK`
/// prefix and `__` separator (e.g. `WELLBOOK__SERVER__PORT=8080`).
/// Secrets are not part of this model; the crates that need them read
/// their own env vars (ZOOM_CLIENT_SECRET, SMTP_PASSWORD).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_ENV_PREFIX.to_string());
    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    debug!(
        "Loading config from {}/ (run env: {}, prefix: {})",
        config_dir, run_env, prefix
    );

    let builder = with_defaults(Config::builder())?
        .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
        .add_source(File::with_name(&format!("{config_dir}/{run_env}")).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}

/// Baseline values used when neither a config file nor the environment sets them.
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000_i64)?
        .set_default("database.url", "sqlite:wellbook.db")?
        .set_default("smtp.port", 587_i64)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads `.env` into the process environment exactly once.
///
/// The file path can be overridden with `DOTENV_OVERRIDE`; a missing file
/// is not an error.
pub fn ensure_dotenv_loaded() {
    INIT_DOTENV.get_or_init(|| {
        let path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());
        dotenv::from_filename(path).ok();
    });
}
