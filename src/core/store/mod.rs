//! Shared store abstractions.
//!
//! The shared store is the only thing tying the publisher and dependent
//! deployable units together: the publisher writes named entries, dependent
//! units read them back during their own deployment. Store handles are
//! passed explicitly so call sites never reach for ambient global state.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `ParameterStore` and/or `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `ssm.rs`, `vault.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl ParameterStore for Vault {
//!     fn put(&self, name: &str, value: &str) -> Result<()> {
//!         // Write through to the vault service
//!     }
//!     fn get(&self, name: &str) -> Result<String> {
//!         // Read back, ConfigurationNotFound on miss
//!     }
//!     fn names(&self) -> Result<Vec<String>> {
//!         // Enumerate published names
//!     }
//! }
//! ```

use secrecy::SecretString;

use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Durable named parameter storage.
///
/// One entry per name, independently updatable, last write wins. Readers
/// never mutate the store; only the publisher writes.
pub trait ParameterStore {
    /// Write a parameter, creating the store on first use.
    ///
    /// Overwrites any existing entry with the same name. No history is
    /// retained.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for malformed names, or an io error if the
    /// store cannot be written.
    fn put(&self, name: &str, value: &str) -> Result<()>;

    /// Read a parameter back by name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationNotFound` if the name was never published.
    /// There is no default value and no retry.
    fn get(&self, name: &str) -> Result<String>;

    /// All published parameter names, sorted.
    ///
    /// # Errors
    ///
    /// Returns an io error if the store cannot be read.
    fn names(&self) -> Result<Vec<String>>;
}

/// Read access to the secret store.
///
/// Secrets are provisioned out of band; this crate only ever reads them,
/// and only through [`SecretString`] so values stay out of logs and
/// `Debug` output.
pub trait SecretStore {
    /// Read a secret by name.
    ///
    /// # Errors
    ///
    /// Returns `SecretNotFound` if the secret does not exist. The caller
    /// must abort; there is no fallback value.
    fn get(&self, name: &str) -> Result<SecretString>;

    /// Whether a secret exists, without reading its value.
    fn exists(&self, name: &str) -> bool;
}
