//! JSON REST API for the agenda contact service.
//!
//! Exposes an axum [`Router`] backed by any [`agenda_core::store::ContactStore`].
//! Transport concerns (binding, logging layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = agenda_api::api_router(store.clone());
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use agenda_core::store::ContactStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/contatos",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contatos/{id}",
      put(contacts::update_one::<S>).delete(contacts::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
