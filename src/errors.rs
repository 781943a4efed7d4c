// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The engine deliberately defines no error types of its own: a failing
//! task's cause passes through the run verbatim as the caller's `E`, and
//! the ordered-sequence shape of the input is enforced by the type system
//! rather than checked at run time. These aliases exist for test tooling
//! and as a single place to add structured error types later.

pub use anyhow::{Error, Result};
