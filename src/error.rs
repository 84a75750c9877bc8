use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignpostError {
    #[error("not initialized: run `signpost init` first")]
    NotInitialized,

    #[error("already initialized: .signpost.toml exists")]
    AlreadyInitialized,

    #[error("incomplete environment '{profile}': missing {}", missing.join(", "))]
    IncompleteEnvironment {
        profile: String,
        missing: Vec<String>,
    },

    #[error("configuration not found: {0}")]
    ConfigurationNotFound(String),

    #[error("secret not found: {0}")]
    SecretNotFound(String),

    #[error("profile not found: no such file {0}")]
    ProfileNotFound(String),

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SignpostError>;
