//! Core types and trait definitions for the agenda contact service.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod error;
pub mod store;

pub use error::{Error, Result};
