//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `agenda-store-memory`).
//! The HTTP layer (`agenda-api`) depends on this abstraction, not on any
//! concrete backend, so a persistent or otherwise wrapped store can be
//! substituted without touching endpoint logic.

use std::future::Future;

use uuid::Uuid;

use crate::contact::{ContactPatch, ContactRecord, NewContact};

/// Abstraction over a contact store backend.
///
/// Absence of a record is an expected, common-path outcome: `get` and
/// `update` signal it with `None`, `delete` with `false`. Backends reserve
/// `Self::Error` for genuine storage failures.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and store a new contact. The id is assigned by the store and is
  /// unique across the collection. Always succeeds for valid input; there is
  /// no uniqueness constraint besides the id.
  fn create(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<ContactRecord, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ContactRecord>, Self::Error>> + Send + '_;

  /// List all contacts sorted ascending by `full_name` (case-sensitive
  /// lexical order). The sort is stable: ties keep insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactRecord>, Self::Error>> + Send + '_;

  /// Overwrite the fields `patch` provides on the contact with `id`, leaving
  /// omitted fields unchanged. Returns the mutated record, or `None` if no
  /// contact with `id` exists.
  fn update(
    &self,
    id: Uuid,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<ContactRecord>, Self::Error>> + Send + '_;

  /// Remove the contact with `id` if present. Returns whether a removal
  /// occurred.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
