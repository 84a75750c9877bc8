//! Secret store commands.
//!
//! Secret values never appear in argv, logs, or stdout. `set` prompts with
//! hidden input; `check` reports existence only.

use dialoguer::Password;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::SecretStore;
use crate::error::{Result, SignpostError};

/// Store a secret, prompting for its value.
pub fn set(name: &str) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store()?;

    let value = Password::new()
        .with_prompt(format!("Value for secret '{}'", name))
        .interact()
        .map_err(|e| SignpostError::Prompt(e.to_string()))?;

    store.put_secret(name, &value)?;

    output::success(&format!("secret '{}' stored", name));
    Ok(())
}

/// Report whether a secret exists, without printing its value.
pub fn check(name: &str) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store()?;

    if !store.exists(name) {
        return Err(SignpostError::SecretNotFound(name.to_string()));
    }

    output::success(&format!("secret '{}' exists", name));
    Ok(())
}
