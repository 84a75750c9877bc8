//! Signpost - cross-unit deployment parameter propagation.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize signpost
//! │   ├── publish       # Publish a profile into the store
//! │   ├── check         # Validate a profile without writing
//! │   ├── get           # Resolve one parameter
//! │   ├── list          # List published parameters
//! │   ├── secret        # Secret store commands
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .signpost.toml management
//!     ├── env           # KEY=value profile file parsing
//!     ├── profile       # Environment profile selection
//!     ├── store/        # Shared store backends
//!     │   ├── mod       # ParameterStore / SecretStore traits
//!     │   ├── fs        # Filesystem storage implementation
//!     │   └── memory    # In-memory store for tests
//!     ├── publisher     # All-or-nothing parameter publishing
//!     ├── resolver      # Fail-fast parameter resolution
//!     └── secret        # Deferred secret handles
//! ```
//!
//! # Features
//!
//! - All-or-nothing publishing: an incomplete environment profile writes
//!   nothing and fails the deployment
//! - Fail-fast resolution: a missing parameter is an error, never a default
//! - Deferred secret handles that keep values out of logs and argv
//! - Extensible store backends behind explicit handles

pub mod cli;
pub mod core;
pub mod error;
