//! Validate a profile without writing to the store.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::profile::Profile;
use crate::core::publisher;
use crate::error::{Result, SignpostError};

/// Report whether the named profile supplies every required field.
///
/// Exits nonzero on an incomplete profile, same as `publish`, but never
/// touches the store either way.
pub fn run(profile_name: &str) -> Result<()> {
    let config = Config::load()?;

    let profile = Profile::load(&config.publish.profiles_dir, profile_name)?;
    let missing = publisher::missing_fields(&profile, &config.publish.required);

    if !missing.is_empty() {
        return Err(SignpostError::IncompleteEnvironment {
            profile: profile.name().to_string(),
            missing,
        });
    }

    output::success(&format!(
        "profile '{}' supplies all {} required fields",
        profile.name(),
        config.publish.required.len()
    ));

    Ok(())
}
