use clap::{CommandFactory, Parser};

use super::types::{Cli, Commands};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn bare_invocation_has_no_subcommand() {
    let cli = Cli::parse_from(["build-analytics"]);
    assert!(cli.command.is_none());
}

#[test]
fn parses_switch_commands() {
    let on = Cli::parse_from(["build-analytics", "on"]);
    assert_eq!(on.command, Some(Commands::On));
    assert!(Commands::On.enables());

    let off = Cli::parse_from(["build-analytics", "off"]);
    assert_eq!(off.command, Some(Commands::Off));
    assert!(!Commands::Off.enables());
    assert_eq!(Commands::Off.to_string(), "off");
}

#[test]
fn parses_log_level_in_both_positions() {
    let short = Cli::parse_from(["build-analytics", "-l", "debug"]);
    assert_eq!(short.loglevel, "debug");

    let after = Cli::parse_from(["build-analytics", "off", "--loglevel", "error"]);
    assert_eq!(after.loglevel, "error");
    assert_eq!(after.command, Some(Commands::Off));
}

#[test]
fn rejects_unknown_subcommands() {
    assert!(Cli::try_parse_from(["build-analytics", "sideways"]).is_err());
}
