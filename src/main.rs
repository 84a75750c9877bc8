//! Signpost - cross-unit deployment parameter propagation.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use signpost::cli::output;
use signpost::cli::{execute, Cli};
use signpost::error::SignpostError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SIGNPOST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("signpost=debug")
        } else {
            EnvFilter::new("signpost=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            SignpostError::NotInitialized => Some("run: signpost init".to_string()),
            SignpostError::IncompleteEnvironment { profile, .. } => Some(format!(
                "fill in every required field in the '{}' profile",
                profile
            )),
            SignpostError::ConfigurationNotFound(_) => {
                Some("run: signpost publish --profile <name>".to_string())
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
