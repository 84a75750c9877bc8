//! Deferred secret handles.
//!
//! A [`SecretHandle`] is an opaque reference to a named secret. Handing one
//! out touches nothing: the value is only read when the downstream consumer
//! calls [`SecretHandle::resolve`], which consumes the handle. The value
//! comes back as a [`SecretString`], so it never passes through ordinary
//! string formatting, and `Debug`/`Display` on the handle show the name only.

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::core::store::SecretStore;
use crate::error::Result;

/// Deferred reference to a secret in the secret store.
#[derive(Clone)]
pub struct SecretHandle {
    name: String,
    store: Arc<dyn SecretStore>,
}

impl SecretHandle {
    /// Create a handle for a named secret.
    ///
    /// Does not check existence; a dangling handle fails at resolve time,
    /// which aborts whatever deployment step tried to consume it.
    pub fn new(name: &str, store: Arc<dyn SecretStore>) -> Self {
        Self {
            name: name.to_string(),
            store,
        }
    }

    /// Secret name this handle refers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the secret value, consuming the handle.
    ///
    /// # Errors
    ///
    /// Returns `SecretNotFound` if the underlying secret no longer exists.
    pub fn resolve(self) -> Result<SecretString> {
        self.store.get(&self.name)
    }
}

impl fmt::Debug for SecretHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretHandle").field(&self.name).finish()
    }
}

impl fmt::Display for SecretHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
