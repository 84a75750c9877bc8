//! Configuration file management.
//!
//! Handles reading, writing, and validating `.signpost.toml` configuration
//! files. The config pins down the deployment topology: where profile files
//! live, where the shared store root is, and the fixed set of profile fields
//! a publish must supply.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::store::Filesystem;
use crate::core::validation::validate_field_name;
use crate::error::{Result, SignpostError};

/// Project configuration stored in `.signpost.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration
    pub signpost: Meta,
    /// Publishing topology
    #[serde(default)]
    pub publish: Publish,
    /// Shared store location override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

/// Metadata section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Publishing section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Publish {
    /// Directory holding `<profile>.env` files, relative to the project root
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: String,
    /// Profile fields every publish must supply, e.g. ["OWNER", "REPO"].
    ///
    /// Store entries take the lowercased field name ("OWNER" -> "owner").
    #[serde(default)]
    pub required: Vec<String>,
}

/// Store section of the configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Store root directory. Defaults to `~/.signpost/store` when absent.
    pub root: String,
}

fn default_profiles_dir() -> String {
    constants::PROFILES_DIR.to_string()
}

impl Default for Publish {
    fn default() -> Self {
        Self {
            profiles_dir: default_profiles_dir(),
            required: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with the canonical required field set.
    pub fn new() -> Self {
        Self {
            signpost: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            publish: Publish {
                profiles_dir: default_profiles_dir(),
                required: vec![
                    "OWNER".to_string(),
                    "REPO".to_string(),
                    "BRANCH".to_string(),
                    "ZONE_NAME".to_string(),
                    "HOSTED_ZONE_ID".to_string(),
                    "WEB_REPO".to_string(),
                ],
            },
            store: None,
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.signpost.toml`
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the file doesn't exist, or a TOML parse
    /// error if it is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(SignpostError::NotInitialized);
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&contents)?;

        debug!(
            required = config.publish.required.len(),
            profiles_dir = %config.publish.profiles_dir,
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `.signpost.toml`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(Self::config_path(), contents)?;

        Ok(())
    }

    /// Open the shared store this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns a config error if no root is configured and the home
    /// directory cannot be determined.
    pub fn open_store(&self) -> Result<Filesystem> {
        match &self.store {
            Some(store) => Ok(Filesystem::new(&store.root)),
            None => Filesystem::default_store(),
        }
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is non-empty semver-ish
    /// - Profiles directory is non-empty
    /// - Required field names are valid environment variable names
    ///
    /// # Errors
    ///
    /// Returns a config or `InvalidName` error on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.signpost.version.is_empty() {
            return Err(SignpostError::Config("missing version".to_string()));
        }

        let version_parts: Vec<&str> = self.signpost.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(SignpostError::Config(format!(
                "not a valid semver: {}",
                self.signpost.version
            )));
        }

        if self.publish.profiles_dir.is_empty() {
            return Err(SignpostError::Config(
                "profiles_dir cannot be empty".to_string(),
            ));
        }

        for field in &self.publish.required {
            validate_field_name(field)?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
