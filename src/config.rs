//! Runtime configuration for the lessons binary.
//!
//! Values come from the environment, optionally seeded from a `.env` file.
//! Command-line flags override them.
//!
//! # Environment Variables
//!
//! - `LESSONS_DATA_ROOT`: directory JSON paths are resolved against (default: `data`)
//! - `LESSONS_CODERS_PATH`: path of the coders document (default: `/coders.json`)

use std::env;
use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const DATA_ROOT_VAR: &str = "LESSONS_DATA_ROOT";
/// Environment variable naming the coders document.
pub const CODERS_PATH_VAR: &str = "LESSONS_CODERS_PATH";

const DEFAULT_DATA_ROOT: &str = "data";
const DEFAULT_CODERS_PATH: &str = "/coders.json";

/// Configuration loading errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but unusable.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Where the lessons find their JSON documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonsConfig {
    /// Directory that request paths are resolved against.
    pub data_root: PathBuf,
    /// Request path of the coders array.
    pub coders_path: String,
}

impl Default for LessonsConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            coders_path: DEFAULT_CODERS_PATH.to_owned(),
        }
    }
}

impl LessonsConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an empty
    /// string or to non-Unicode data.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`LessonsConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();

        let data_root = optional(&lookup, DATA_ROOT_VAR)?
            .map_or(defaults.data_root, PathBuf::from);
        let coders_path = optional(&lookup, CODERS_PATH_VAR)?.unwrap_or(defaults.coders_path);

        Ok(Self {
            data_root,
            coders_path,
        })
    }

    /// Replaces the data root if `data_root` is given.
    #[must_use]
    pub fn with_data_root(self, data_root: Option<PathBuf>) -> Self {
        Self {
            data_root: data_root.unwrap_or(self.data_root),
            ..self
        }
    }

    /// Replaces the coders path if `coders_path` is given.
    #[must_use]
    pub fn with_coders_path(self, coders_path: Option<String>) -> Self {
        Self {
            coders_path: coders_path.unwrap_or(self.coders_path),
            ..self
        }
    }
}

fn optional<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            message: "value is empty".to_owned(),
        }),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            message: "value is not valid Unicode".to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(
        variables: &HashMap<&str, &str>,
    ) -> impl Fn(&str) -> Result<String, env::VarError> {
        move |key: &str| {
            variables
                .get(key)
                .map(|value| (*value).to_owned())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn unset_variables_use_defaults() {
        let variables = HashMap::new();
        let config = LessonsConfig::from_lookup(lookup_in(&variables)).unwrap();
        assert_eq!(config, LessonsConfig::default());
    }

    #[test]
    fn set_variables_override_defaults() {
        let variables = HashMap::from([
            (DATA_ROOT_VAR, "/srv/lessons"),
            (CODERS_PATH_VAR, "/team.json"),
        ]);
        let config = LessonsConfig::from_lookup(lookup_in(&variables)).unwrap();
        assert_eq!(config.data_root, PathBuf::from("/srv/lessons"));
        assert_eq!(config.coders_path, "/team.json");
    }

    #[test]
    fn empty_value_is_rejected() {
        let variables = HashMap::from([(CODERS_PATH_VAR, "  ")]);
        let error = LessonsConfig::from_lookup(lookup_in(&variables)).unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: CODERS_PATH_VAR.to_owned(),
                message: "value is empty".to_owned(),
            }
        );
    }

    #[test]
    fn flags_take_precedence() {
        let config = LessonsConfig::default()
            .with_data_root(Some(PathBuf::from("fixtures")))
            .with_coders_path(None);
        assert_eq!(config.data_root, PathBuf::from("fixtures"));
        assert_eq!(config.coders_path, DEFAULT_CODERS_PATH);
    }
}
