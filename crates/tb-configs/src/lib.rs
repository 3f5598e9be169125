//! # tb-configs
//!
//! Settings for the tribuna binaries, layered from an optional config
//! file and `TRIBUNA_*` environment variables (a `.env` file is honored
//! first). Every field has a default, so a bare checkout runs.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the file backend keeps its collection files in.
    pub data_dir: PathBuf,
    /// Redirect target when a gate finds no session.
    pub login_target: String,
    /// Redirect target when a session lacks the required role.
    pub fallback_target: String,
    /// Usernames granted the admin role by the default resolver.
    pub admin_users: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            login_target: "login".to_string(),
            fallback_target: "home".to_string(),
            admin_users: vec!["admin".to_string()],
        }
    }
}

impl Settings {
    /// Loads `config/tribuna.{toml,yaml,...}` if present, then applies
    /// `TRIBUNA_*` environment overrides (lists are comma-separated).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name("config/tribuna").required(false))
            .add_source(
                config::Environment::with_prefix("TRIBUNA")
                    .try_parsing(true)
                    .list_separator(","),
            )
            .build()?
            .try_deserialize()?;

        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_bare_checkout() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.login_target, "login");
        assert_eq!(settings.fallback_target, "home");
        assert_eq!(settings.admin_users, vec!["admin".to_string()]);
    }

    #[test]
    fn file_values_override_defaults_field_by_field() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                login_target = "signin"
                admin_users = ["admin", "root"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.login_target, "signin");
        assert_eq!(settings.admin_users, vec!["admin".to_string(), "root".to_string()]);
        // Untouched fields keep their defaults.
        assert_eq!(settings.fallback_target, "home");
        assert_eq!(settings.data_dir, PathBuf::from("data"));
    }
}
