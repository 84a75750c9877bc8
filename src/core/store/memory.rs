//! In-memory store implementation.
//!
//! A test double for the filesystem store. Keeping the store behind an
//! explicitly passed handle is what makes this possible: unit tests for the
//! publisher and resolver run against `Memory` without touching disk.

use std::collections::BTreeMap;
use std::sync::Mutex;

use secrecy::SecretString;

use super::{ParameterStore, SecretStore};
use crate::core::validation::validate_store_name;
use crate::error::{Result, SignpostError};

/// In-memory shared store.
#[derive(Default)]
pub struct Memory {
    parameters: Mutex<BTreeMap<String, String>>,
    secrets: Mutex<BTreeMap<String, String>>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a secret value.
    pub fn put_secret(&self, name: &str, value: &str) -> Result<()> {
        validate_store_name(name)?;
        self.secrets
            .lock()
            .expect("secret map poisoned")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.parameters.lock().expect("parameter map poisoned").len()
    }

    /// Whether no parameters have been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ParameterStore for Memory {
    fn put(&self, name: &str, value: &str) -> Result<()> {
        validate_store_name(name)?;
        self.parameters
            .lock()
            .expect("parameter map poisoned")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<String> {
        validate_store_name(name)?;
        self.parameters
            .lock()
            .expect("parameter map poisoned")
            .get(name)
            .cloned()
            .ok_or_else(|| SignpostError::ConfigurationNotFound(name.to_string()))
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .parameters
            .lock()
            .expect("parameter map poisoned")
            .keys()
            .cloned()
            .collect())
    }
}

impl SecretStore for Memory {
    fn get(&self, name: &str) -> Result<SecretString> {
        validate_store_name(name)?;
        self.secrets
            .lock()
            .expect("secret map poisoned")
            .get(name)
            .map(|v| SecretString::from(v.clone()))
            .ok_or_else(|| SignpostError::SecretNotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        validate_store_name(name).is_ok()
            && self
                .secrets
                .lock()
                .expect("secret map poisoned")
                .contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_memory_roundtrip() {
        let store = Memory::new();

        store.put("owner", "octocat").unwrap();

        assert_eq!(ParameterStore::get(&store, "owner").unwrap(), "octocat");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_missing_parameter() {
        let store = Memory::new();

        let err = ParameterStore::get(&store, "owner").unwrap_err();
        assert!(matches!(err, SignpostError::ConfigurationNotFound(_)));
    }

    #[test]
    fn test_memory_overwrite() {
        let store = Memory::new();

        store.put("branch", "main").unwrap();
        store.put("branch", "develop").unwrap();

        assert_eq!(ParameterStore::get(&store, "branch").unwrap(), "develop");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_secret_roundtrip() {
        let store = Memory::new();

        store.put_secret("oauth-token", "ghp_abc").unwrap();

        assert!(store.exists("oauth-token"));
        let secret = SecretStore::get(&store, "oauth-token").unwrap();
        assert_eq!(secret.expose_secret(), "ghp_abc");
    }

    #[test]
    fn test_memory_names_sorted() {
        let store = Memory::new();

        store.put("repo", "app").unwrap();
        store.put("branch", "main").unwrap();

        assert_eq!(store.names().unwrap(), vec!["branch", "repo"]);
    }
}
