use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use crate::config::Config;
use crate::logging::init_logging;
use crate::payload::StdinProbe;
use crate::runtime::{AppContext, submit};

use super::types::{Cli, Commands};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    init_logging(&cli.loglevel);

    let config = Config::from_env();
    debug!(
        mode = ?config.plugin_mode,
        ci_mode = config.ci_mode,
        data_dir = ?config.data_dir,
        "configuration loaded"
    );
    let app = AppContext::new(config);

    match cli.command {
        Some(command) => switch_analytics(&app, command),
        None if app.config().is_trigger() => {
            let outcome = submit(&app, &StdinProbe).map_err(|error| error.to_string())?;
            debug!(?outcome, "submission finished");
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|error| format!("Failed to show help, error: {error}")),
    }
}

fn switch_analytics(app: &AppContext, command: Commands) -> Result<(), String> {
    info!("");
    info!("Turning analytics {command}...");
    app.preferences()
        .set_enabled(command.enables())
        .map_err(|error| format!("Failed to turn {command} analytics, error: {error}"))
}
