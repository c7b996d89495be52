use config::{Config, Environment, File};
use potter_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[potter_derive::potter_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a base file overlaid with environment variables.
///
/// 1. **Base file**: `path` when given (must exist), otherwise `server.{toml,json,yaml,...}`
///    in the working directory if present.
/// 2. **Environment**: variables prefixed with `POTTER__`, nested with `__`
///    (`POTTER__SERVER__PORT=8080` sets `server.port`).
///
/// Sections missing from both layers keep the defaults of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source is
/// malformed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use potter_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
