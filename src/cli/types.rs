use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "build-analytics", version, about = "Bitrise Analytics plugin")]
pub(super) struct Cli {
    /// Log level (options: debug, info, warn, error, fatal, panic).
    #[arg(
        short = 'l',
        long,
        env = "LOGLEVEL",
        default_value = "info",
        global = true
    )]
    pub(super) loglevel: String,

    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(super) enum Commands {
    /// Turn sending anonymized usage information on.
    On,
    /// Turn sending anonymized usage information off.
    Off,
}

impl Commands {
    pub(super) fn enables(self) -> bool {
        self == Self::On
    }
}

impl std::fmt::Display for Commands {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}
