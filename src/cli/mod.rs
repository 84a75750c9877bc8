//! Command-line interface.

pub mod check;
pub mod completions;
pub mod get;
pub mod init;
pub mod list;
pub mod output;
pub mod publish;
pub mod secret;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// Signpost - cross-unit deployment parameter propagation.
#[derive(Parser)]
#[command(
    name = "signpost",
    about = "Publish and resolve deployment parameters across deployable units",
    version
)]
pub struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize signpost in the current directory
    Init,

    /// Validate a profile and publish its required fields to the store
    Publish {
        /// Profile name (env/<name>.env)
        #[arg(short, long, env = "SIGNPOST_ENVIRONMENT")]
        profile: String,
    },

    /// Validate a profile without writing anything
    Check {
        /// Profile name (env/<name>.env)
        #[arg(short, long, env = "SIGNPOST_ENVIRONMENT")]
        profile: String,
    },

    /// Resolve one published parameter and print its value
    Get {
        /// Parameter name (e.g., owner)
        name: String,
    },

    /// List published parameter names
    List,

    /// Manage the secret store
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells completions can be generated for.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Secret store commands.
#[derive(Subcommand)]
pub enum SecretAction {
    /// Store a secret, prompting for the value (never taken from argv)
    Set {
        /// Secret name (e.g., oauth-token)
        name: String,
    },

    /// Check whether a secret exists, without printing its value
    Check {
        /// Secret name
        name: String,
    },
}

/// Dispatch a parsed command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Init => init::run(),
        Command::Publish { profile } => publish::run(&profile),
        Command::Check { profile } => check::run(&profile),
        Command::Get { name } => get::run(&name),
        Command::List => list::run(),
        Command::Secret { action } => match action {
            SecretAction::Set { name } => secret::set(&name),
            SecretAction::Check { name } => secret::check(&name),
        },
        Command::Completions { shell } => {
            completions::run(shell);
            Ok(())
        }
    }
}
