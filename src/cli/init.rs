//! Initialize signpost in the current directory.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::error::{Result, SignpostError};

/// Write a starter `.signpost.toml` and profiles directory.
pub fn run() -> Result<()> {
    if Config::exists() {
        return Err(SignpostError::AlreadyInitialized);
    }

    let config = Config::new();
    config.save()?;

    let profiles_dir = Path::new(&config.publish.profiles_dir);
    if !profiles_dir.exists() {
        fs::create_dir_all(profiles_dir)?;
        fs::write(
            profiles_dir.join("local.env.example"),
            "# Copy to local.env and fill in every field.\n\
             OWNER=\n\
             REPO=\n\
             BRANCH=\n\
             ZONE_NAME=\n\
             HOSTED_ZONE_ID=\n\
             WEB_REPO=\n",
        )?;
    }

    output::success(&format!("initialized {}", constants::CONFIG_FILE));
    output::kv("profiles", profiles_dir.display());
    output::hint(&format!(
        "create {}/local.env, then run: signpost publish --profile local",
        profiles_dir.display()
    ));

    Ok(())
}
