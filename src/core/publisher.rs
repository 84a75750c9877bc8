//! All-or-nothing parameter publishing.
//!
//! The publisher is the only writer of the shared store. It validates that
//! the selected profile supplies every required field before writing
//! anything: an incomplete environment aborts the deployment with zero
//! partial state, so dependent units can never observe a half-published
//! configuration.

use tracing::{debug, info};

use crate::core::profile::Profile;
use crate::core::store::ParameterStore;
use crate::error::{Result, SignpostError};

/// Collect the required fields missing from a profile.
///
/// A field counts as missing when it is absent or empty.
pub fn missing_fields(profile: &Profile, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|field| profile.get(field).map_or(true, str::is_empty))
        .cloned()
        .collect()
}

/// Publish every required field of a profile into the shared store.
///
/// Store entries take the lowercased field name: `OWNER` becomes `owner`,
/// `HOSTED_ZONE_ID` becomes `hosted_zone_id`. Each entry is written as its
/// own independently updatable record; republishing overwrites by name.
///
/// # Returns
///
/// The store names written, in required-field order.
///
/// # Errors
///
/// Returns `IncompleteEnvironment` before any write when one or more
/// required fields are absent or empty. On that path the store is left
/// exactly as it was.
pub fn publish(
    store: &dyn ParameterStore,
    profile: &Profile,
    required: &[String],
) -> Result<Vec<String>> {
    let mut entries = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for field in required {
        match profile.get(field) {
            Some(value) if !value.is_empty() => {
                entries.push((field.to_ascii_lowercase(), value.to_string()));
            }
            _ => missing.push(field.clone()),
        }
    }

    // The gate: no writes happen unless every required field is present.
    if !missing.is_empty() {
        return Err(SignpostError::IncompleteEnvironment {
            profile: profile.name().to_string(),
            missing,
        });
    }

    let mut published = Vec::with_capacity(entries.len());
    for (name, value) in &entries {
        store.put(name, value)?;
        debug!(name = %name, "parameter published");
        published.push(name.clone());
    }

    info!(
        profile = profile.name(),
        count = published.len(),
        "profile published"
    );

    Ok(published)
}
