use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod models;
pub use models::*;

/// Marker value that is swapped for an environment variable after loading.
pub const SECRET_FROM_ENV: &str = "secret_from_env";

/// Loads the application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `<CONFIG_DIR>/default.{toml,yaml,json,...}` (optional)
/// 2. `<CONFIG_DIR>/<RUN_ENV>.{...}` (optional, `RUN_ENV` defaults to `debug`)
/// 3. Environment variables prefixed with `PREFIX` (default `ARTISTRY`), nested with `__`,
///    e.g. `ARTISTRY_SERVER__PORT=8080`
///
/// Any string value equal to `"secret_from_env"` is then resolved from the environment
/// variable named after its path, e.g. `sendgrid.api_key` -> `SENDGRID_API_KEY`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "ARTISTRY".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env, &prefix)
}

/// Builds the configuration from `config_dir`, the `run_env` overlay and environment
/// variables named `<prefix>_<SECTION>__<KEY>`.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "Loading config from {} and {} (env prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::from(default_path.as_path()).required(false))
        .add_source(File::from(env_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Recursively replaces all "secret_from_env" string values with environment variable values
fn inject_env_secrets(value: &mut Value) {
    fn walk(path: Vec<String>, obj: &mut Value) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_FROM_ENV => {
                let env_key = path.join("_").to_uppercase();
                if let Ok(env_val) = env::var(&env_key) {
                    *obj = Value::String(env_val);
                } else {
                    warn!("env var {} not found for secret_from_env", env_key);
                }
            }
            _ => {}
        }
    }

    walk(vec![], value);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_env_secrets(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is taken from `DOTENV_OVERRIDE`, else from a first command line argument
/// starting with `.env`, else `.env`. Loading happens once per process; a missing file
/// is not an error. Returns the path that was (or would have been) used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
