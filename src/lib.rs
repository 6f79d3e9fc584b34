pub mod analytics;
pub mod cli;
pub mod compat;
pub mod config;
pub mod delivery;
pub mod logging;
pub mod model;
pub mod payload;
pub mod preferences;
pub mod runtime;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
