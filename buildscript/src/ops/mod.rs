//! Core operations.
//!
//! This module contains the business logic for the commands, separated from
//! argument parsing and output rendering.

pub mod check;
pub mod comments;
pub mod generate;
pub mod lower;

pub use check::check;
pub use comments::comments;
pub use generate::{GenerateOptions, generate};
pub use lower::{LowerOptions, lower};
