//! Handlers for the `/contatos` endpoints.
//!
//! | Method   | Path             | Success | Failure |
//! |----------|------------------|---------|---------|
//! | `POST`   | `/contatos`      | 201     | 422 on missing/malformed fields |
//! | `PUT`    | `/contatos/{id}` | 200     | 404 unknown id, 422 malformed |
//! | `GET`    | `/contatos`      | 200     | — |
//! | `DELETE` | `/contatos/{id}` | 204     | 404 unknown id |
//!
//! Responses carry the computed `age`; it is derived from `birthDate` here,
//! on every read, and never stored.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use agenda_core::{contact::{ContactDraft, ContactRecord}, store::ContactStore};

use crate::error::ApiError;

// ─── Response shape ──────────────────────────────────────────────────────────

/// A contact as returned on the wire: the stored record plus its age as of
/// the request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
  pub id:         Uuid,
  pub full_name:  String,
  pub birth_date: NaiveDate,
  pub email:      String,
  pub phone:      Option<String>,
  pub address:    Option<String>,
  pub age:        i32,
}

impl ContactResponse {
  fn shape(record: ContactRecord, today: NaiveDate) -> Self {
    let age = record.age_on(today);
    Self {
      id:         record.id,
      full_name:  record.full_name,
      birth_date: record.birth_date,
      email:      record.email,
      phone:      record.phone,
      address:    record.address,
      age,
    }
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /contatos`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<ContactDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = draft.validate_new()?;
  let record = store
    .create(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let today = Utc::now().date_naive();
  Ok((StatusCode::CREATED, Json(ContactResponse::shape(record, today))))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /contatos/{id}` — overwrites only the fields present in the body.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(draft): Json<ContactDraft>,
) -> Result<Json<ContactResponse>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let patch = draft.validate_patch()?;
  let record = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound)?;
  let today = Utc::now().date_naive();
  Ok(Json(ContactResponse::shape(record, today)))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /contatos` — all contacts, sorted by `fullName`.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ContactResponse>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  // One reference date for the whole response.
  let today = Utc::now().date_naive();
  let contacts = records
    .into_iter()
    .map(|record| ContactResponse::shape(record, today))
    .collect();
  Ok(Json(contacts))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /contatos/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound);
  }
  Ok(StatusCode::NO_CONTENT)
}
