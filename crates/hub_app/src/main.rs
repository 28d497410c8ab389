mod platform;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use hub_logging::{hub_info, hub_warn};

use platform::{load_config, run_app, AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, config_error) = match load_config(&cli.config_path()) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    cli.apply_to(&mut config);

    let logging = hub_logging::initialize(&config.log.to_settings());
    if let Some(err) = config_error {
        if logging {
            hub_warn!("Using default configuration: {}", err);
        } else {
            eprintln!("Using default configuration: {err}");
        }
    }
    hub_info!("EntertainmentHub starting");

    let year = chrono::Local::now().year();
    run_app(&config, year).context("terminal session failed")?;
    hub_info!("EntertainmentHub stopped");
    Ok(())
}
