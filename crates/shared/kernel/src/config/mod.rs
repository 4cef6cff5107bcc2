use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[fhub_derive::fhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Prefix of environment variables overriding file values.
pub const ENV_PREFIX: &str = "FHUB";

/// File loaded when no path is given (extension resolved by the `config` crate).
const DEFAULT_PATH: &str = "forms";

/// Loads an input configuration (or any deserializable structure) from a file,
/// layered with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `forms/age.toml`). If no path is provided,
///    it defaults to `"forms"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `FHUB__`.
///    Nested structures are accessed using double underscores, and snake-case segments are
///    converted to the camelCase keys used by the input configurations
///    (e.g., `FHUB__HINT_CONFIG__USE_LABEL` maps to `hintConfig.useLabel`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use fhub_domain::config::NumericalInputConfig;
/// use fhub_kernel::config::load_config;
///
/// let cfg: NumericalInputConfig = load_config(Some("forms/age.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from(DEFAULT_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Camel),
        );

    info!("Loading form config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Parses a configuration document held in memory, without environment overrides.
///
/// Useful for translation tables embedded with `include_str!`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the document is malformed or does not match `T`.
pub fn parse_config<T>(raw: &str, format: FileFormat) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from_str(raw, format))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
