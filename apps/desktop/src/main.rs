#![windows_subsystem = "windows"]

use sigi::domain::config::AppConfig;
use sigi::kernel::config::load_config;
use sigi_desktop::{DesktopApp, logger_builder};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let (config, load_error) = match load_config::<AppConfig>(None::<&str>) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _logger = logger_builder(env!("CARGO_PKG_NAME"), &config.logging)?.init()?;
    if let Some(e) = load_error {
        warn!(error = %e, "Falling back to the default configuration");
    }

    DesktopApp::new().with_form(config.form.clone()).launch()?;

    Ok(())
}
