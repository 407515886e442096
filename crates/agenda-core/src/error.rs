//! Error types for `agenda-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more contact fields are missing or malformed. The payload names
  /// the offending fields by their wire-level (camelCase) names.
  #[error("invalid contact fields: {}", .0.join(", "))]
  InvalidFields(Vec<String>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
