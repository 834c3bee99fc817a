//! Gradle build script generation from `script.toml` manifests.
//!
//! The binary is a thin layer over this library: [`ops`] holds the
//! operations behind each command, [`reports`] their printable results.

pub mod dialect;
pub mod ops;
pub mod reports;
