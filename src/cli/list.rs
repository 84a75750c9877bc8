//! List published parameter names.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::ParameterStore;
use crate::error::Result;

/// Print every published parameter name, sorted.
///
/// Names only; values are resolved one at a time with `signpost get`.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let store = config.open_store()?;

    let names = store.names()?;
    if names.is_empty() {
        output::warn("nothing published yet");
        output::hint("run: signpost publish --profile <name>");
        return Ok(());
    }

    output::success(&format!("{} parameters published", names.len()));
    for name in &names {
        output::item(name);
    }

    Ok(())
}
