//! Environment profile selection and loading.
//!
//! A profile is a named KEY=value file under the profiles directory
//! (env/local.env, env/production.env). The profile name arrives as an
//! explicit parameter; the only environment-variable indirection lives at
//! the CLI edge, where `SIGNPOST_ENVIRONMENT` can supply `--profile`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::env::EnvFile;
use crate::core::validation::validate_store_name;
use crate::error::{Result, SignpostError};

/// A loaded environment profile
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    values: EnvFile,
}

impl Profile {
    /// Load a profile by name from a profiles directory.
    ///
    /// Looks for `<profiles_dir>/<name>.env`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for malformed profile names and
    /// `ProfileNotFound` if the file does not exist.
    pub fn load(profiles_dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        validate_store_name(name)?;

        let path = Self::path_for(profiles_dir.as_ref(), name);
        if !path.exists() {
            return Err(SignpostError::ProfileNotFound(path.display().to_string()));
        }

        debug!(profile = name, path = %path.display(), "loading profile");
        let values = EnvFile::load(&path)?;

        Ok(Self {
            name: name.to_string(),
            values,
        })
    }

    /// Create a profile from already-parsed values.
    pub fn from_values(name: &str, values: EnvFile) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    /// Profile name ("local", "production", ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field)
    }

    /// Path a profile name resolves to.
    pub fn path_for(profiles_dir: &Path, name: &str) -> PathBuf {
        profiles_dir.join(format!("{}.{}", name, constants::PROFILE_EXT))
    }
}
