//! Constants used throughout signpost.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.signpost.toml).
pub const CONFIG_FILE: &str = ".signpost.toml";

/// Default directory holding environment profile files, relative to the
/// project root.
pub const PROFILES_DIR: &str = "env";

/// Extension of environment profile files (env/local.env, env/production.env).
pub const PROFILE_EXT: &str = "env";

/// Store directory relative to HOME (~/.signpost/store).
pub const STORE_DIR: &str = ".signpost/store";

/// Subdirectory of the store root holding plain parameters.
pub const PARAMETERS_DIR: &str = "parameters";

/// Subdirectory of the store root holding secrets.
pub const SECRETS_DIR: &str = "secrets";

/// Environment variable that selects the active profile when --profile
/// is not given on the command line.
pub const PROFILE_ENV_VAR: &str = "SIGNPOST_ENVIRONMENT";
