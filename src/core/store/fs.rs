//! Filesystem-based store implementation.
//!
//! Stores each entry as its own file under the store root:
//! `<root>/parameters/<name>` for plain parameters and
//! `<root>/secrets/<name>` for secrets. One file per name keeps entries
//! independently updatable, exactly like the named records of a hosted
//! parameter service.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tracing::debug;

use super::{ParameterStore, SecretStore};
use crate::core::constants;
use crate::core::validation::validate_store_name;
use crate::error::{Result, SignpostError};

/// Filesystem-backed shared store.
///
/// The root directory maps to one deployment account/region scope; every
/// deployable unit in that scope reads the same root.
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    /// Open a store at an explicit root directory.
    ///
    /// The directory does not have to exist yet; it is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open the default store (`~/.signpost/store`).
    ///
    /// # Errors
    ///
    /// Returns a config error if the home directory cannot be determined.
    pub fn default_store() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            SignpostError::Config("unable to determine home directory".to_string())
        })?;
        Ok(Self::new(home.join(constants::STORE_DIR)))
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a secret value.
    ///
    /// Not part of the `SecretStore` trait: resolvers are read-only, and
    /// secrets normally arrive out of band. This exists for the
    /// `signpost secret set` command and for tests.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for malformed names, or an io error on write
    /// failure.
    pub fn put_secret(&self, name: &str, value: &str) -> Result<()> {
        validate_store_name(name)?;
        let path = self.secret_path(name);
        write_entry(&path, value)?;
        debug!(name, "secret stored");
        Ok(())
    }

    fn parameter_path(&self, name: &str) -> PathBuf {
        self.root.join(constants::PARAMETERS_DIR).join(name)
    }

    fn secret_path(&self, name: &str) -> PathBuf {
        self.root.join(constants::SECRETS_DIR).join(name)
    }
}

impl ParameterStore for Filesystem {
    fn put(&self, name: &str, value: &str) -> Result<()> {
        validate_store_name(name)?;
        let path = self.parameter_path(name);
        write_entry(&path, value)?;
        debug!(name, "parameter stored");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<String> {
        validate_store_name(name)?;
        let path = self.parameter_path(name);
        if !path.exists() {
            return Err(SignpostError::ConfigurationNotFound(name.to_string()));
        }
        Ok(fs::read_to_string(&path)?)
    }

    fn names(&self) -> Result<Vec<String>> {
        let dir = self.root.join(constants::PARAMETERS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl SecretStore for Filesystem {
    fn get(&self, name: &str) -> Result<SecretString> {
        validate_store_name(name)?;
        let path = self.secret_path(name);
        if !path.exists() {
            return Err(SignpostError::SecretNotFound(name.to_string()));
        }
        let value = fs::read_to_string(&path)?;
        Ok(SecretString::from(value))
    }

    fn exists(&self, name: &str) -> bool {
        validate_store_name(name).is_ok() && self.secret_path(name).exists()
    }
}

/// Write a single store entry, creating parent directories as needed.
///
/// Entries are written with restricted permissions (0600 on Unix).
fn write_entry(path: &Path, value: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;

        // Ensure restricted permissions even when overwriting an existing entry.
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, value)?;
    }

    Ok(())
}
