//! Freda CLI entrypoint for the feature listing TUI.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bubbletea_rs::Program;
use freda::tui::set_runtime_context;
use freda::{FeatureListApp, FredaConfig, HttpFeatureGateway, LogNavigator, RegistryError};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RegistryError> {
    let config = load_config()?;

    let registry_url = config.require_registry_url()?;
    let gateway = HttpFeatureGateway::new(registry_url, config.resolve_token())?;

    // Inject the collaborators commands read at runtime. If already set
    // (e.g. re-running the TUI in the same process), the existing context
    // is kept.
    let _already_set = set_runtime_context(Arc::new(gateway), Arc::new(LogNavigator));

    run_tui().await.map_err(|error| RegistryError::Api {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RegistryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FredaConfig, RegistryError> {
    FredaConfig::load().map_err(|error| RegistryError::Configuration {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `FeatureListApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<FeatureListApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
