//! Resolve one published parameter.

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::resolver::Resolver;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Resolve a parameter by name and print its value to stdout.
///
/// Fails with `ConfigurationNotFound` if the name was never published.
pub fn run(name: &str) -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store()?;
    let secrets: Arc<dyn SecretStore> = Arc::new(config.open_store()?);

    let resolver = Resolver::new(&store, secrets);
    let value = resolver.get(name)?;

    println!("{}", value);
    Ok(())
}
