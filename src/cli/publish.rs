//! Publish a profile into the shared store.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::profile::Profile;
use crate::core::publisher;
use crate::error::Result;

/// Validate the named profile and publish every required field.
///
/// Fails without writing anything when the profile is incomplete.
pub fn run(profile_name: &str) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store()?;

    let profile = Profile::load(&config.publish.profiles_dir, profile_name)?;
    let published = publisher::publish(&store, &profile, &config.publish.required)?;

    output::success(&format!(
        "published {} parameters from profile '{}'",
        published.len(),
        profile.name()
    ));
    for name in &published {
        output::item(name);
    }

    Ok(())
}
