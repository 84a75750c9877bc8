//! Core library components.
//!
//! This module contains the reusable business logic for publishing and
//! resolving deployment parameters across deployable units.

pub mod config;
pub mod constants;
pub mod env;
pub mod profile;
pub mod publisher;
pub mod resolver;
pub mod secret;
pub mod store;
pub mod validation;
