//! Fail-fast parameter resolution.
//!
//! Dependent deployable units resolve published parameters by well-known
//! name at their own deployment time. A missing name is fatal: the resolver
//! never supplies a default and never retries, so a unit whose
//! configuration was never published cannot proceed with a placeholder.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::core::secret::SecretHandle;
use crate::core::store::{ParameterStore, SecretStore};
use crate::error::Result;

/// Read-side view of the shared store for one dependent unit.
///
/// Holds explicit store handles; nothing here reaches for ambient global
/// state, which keeps resolvers testable against in-memory doubles.
pub struct Resolver<'a> {
    parameters: &'a dyn ParameterStore,
    secrets: Arc<dyn SecretStore>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a parameter store and a secret store.
    pub fn new(parameters: &'a dyn ParameterStore, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            parameters,
            secrets,
        }
    }

    /// Resolve one parameter by name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationNotFound` if the name was never published.
    pub fn get(&self, name: &str) -> Result<String> {
        let value = self.parameters.get(name)?;
        debug!(name, "parameter resolved");
        Ok(value)
    }

    /// Resolve a dependent unit's fixed set of parameter names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationNotFound` for the first missing name; the
    /// unit must not proceed with a partial configuration.
    pub fn require_all(&self, names: &[&str]) -> Result<BTreeMap<String, String>> {
        let mut resolved = BTreeMap::new();
        for name in names {
            resolved.insert(name.to_string(), self.get(name)?);
        }
        Ok(resolved)
    }

    /// Hand out a deferred handle for a named secret.
    ///
    /// The store is not consulted here; the value is read only when the
    /// consumer resolves the handle.
    pub fn secret(&self, name: &str) -> SecretHandle {
        SecretHandle::new(name, Arc::clone(&self.secrets))
    }
}
