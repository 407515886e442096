//! In-memory backend for the agenda contact store.
//!
//! The collection lives only for the lifetime of the process; nothing is
//! ever written to disk.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
