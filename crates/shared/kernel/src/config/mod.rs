use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix for overrides (`SIGI__FORM__MARRIED_VALUE`).
pub const ENV_PREFIX: &str = "SIGI";
const DEFAULT_CONFIG: &str = "sigi";

#[sigi_derive::sigi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `SIGI__`-prefixed environment variables.
///
/// Nested keys use a double underscore: `SIGI__LOGGING__LEVEL=debug` sets `logging.level`.
///
/// With `Some(path)` the file must exist. With `None` an optional `sigi.{toml,json,yaml,...}`
/// in the working directory is used if present, so defaults of `T` apply otherwise.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source cannot be
/// parsed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use sigi_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     married_value: String,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

pub(crate) fn load_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(env.separator("__").convert_case(config::Case::Snake))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigi_domain::config::AppConfig;
    use std::collections::HashMap;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigi.toml");
        fs::write(&path, "[form]\nmarried_value = \"Casado\"\n").unwrap();

        let cfg: AppConfig = load_with_env(Some(&path), env(&[])).unwrap();
        assert_eq!(cfg.form.married_value, "Casado");
        assert_eq!(cfg.form.bindings.save, "salvarBtn");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigi.toml");
        fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let cfg: AppConfig =
            load_with_env(Some(&path), env(&[("SIGI__LOGGING__LEVEL", "debug")])).unwrap();
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let res: Result<AppConfig, _> =
            load_with_env(Some(dir.path().join("absent.toml")), env(&[]));
        let err = res.expect_err("file is required");
        assert!(err.to_string().contains("Failed to build config"));
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let cfg: AppConfig = load_with_env(None::<&Path>, env(&[])).unwrap();
        assert_eq!(cfg.form.married_value, "Married");
    }
}
