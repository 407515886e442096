//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// The repository signals absence with sentinels, never errors; this layer
/// is solely responsible for turning those sentinels into status codes.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The path id matches no stored contact. The message is part of the wire
  /// contract.
  #[error("Contato não encontrado")]
  NotFound,

  #[error(transparent)]
  Validation(#[from] agenda_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "detail": self.to_string() }))).into_response()
  }
}
