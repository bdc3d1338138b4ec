//! Application configuration loaded from CLI, environment, and files.
//!
//! Configuration values merge with the following precedence (lowest to
//! highest): built-in defaults, `.freda.toml` in the current directory,
//! home directory, or XDG config directory, `FREDA_*` environment
//! variables, and finally command-line arguments.
//!
//! # Configuration file
//!
//! ```toml
//! registry_url = "https://registry.example.com/api/v1/"
//! token = "frg_example"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::registry::error::RegistryError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment variables
///
/// - `FREDA_REGISTRY_URL` or `--registry-url`/`-u`: registry base URL
/// - `FREDA_TOKEN` or `--token`/`-t`: bearer token for the registry
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FREDA",
    discovery(
        dotfile_name = ".freda.toml",
        config_file_name = "freda.toml",
        app_name = "freda"
    )
)]
pub struct FredaConfig {
    /// Base URL of the feature registry API.
    ///
    /// Can be provided via:
    /// - CLI: `--registry-url <URL>` or `-u <URL>`
    /// - Environment: `FREDA_REGISTRY_URL`
    /// - Config file: `registry_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub registry_url: Option<String>,

    /// Bearer token for registry authentication, when the registry needs one.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `FREDA_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,
}

impl FredaConfig {
    /// Returns the registry URL or an error when it was not configured.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingRegistryUrl`] when no URL was supplied
    /// by any configuration source.
    pub fn require_registry_url(&self) -> Result<&str, RegistryError> {
        self.registry_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(RegistryError::MissingRegistryUrl)
    }

    /// Returns the configured token, trimmed, when one is present.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToOwned::to_owned)
    }
}
