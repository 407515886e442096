//! Contact record — the stored entity and its derived age.
//!
//! A record holds only what the client sent plus a server-assigned id. Age is
//! never stored; it is recomputed from `birth_date` on every read so it stays
//! correct as time passes.

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Stored entity ───────────────────────────────────────────────────────────

/// A contact as held by the store. `id` is assigned at creation and never
/// reassigned; `full_name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
  pub id:         Uuid,
  pub full_name:  String,
  pub birth_date: NaiveDate,
  pub email:      String,
  pub phone:      Option<String>,
  pub address:    Option<String>,
}

impl ContactRecord {
  /// Age in whole years as of `today`: the year difference, minus one if the
  /// birthday has not yet occurred this year.
  pub fn age_on(&self, today: NaiveDate) -> i32 {
    let mut age = today.year() - self.birth_date.year();
    if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
      age -= 1;
    }
    age
  }

  /// Overwrite the fields `patch` provides; leave the rest untouched.
  pub fn apply(&mut self, patch: ContactPatch) {
    if let Some(full_name) = patch.full_name {
      self.full_name = full_name;
    }
    if let Some(birth_date) = patch.birth_date {
      self.birth_date = birth_date;
    }
    if let Some(email) = patch.email {
      self.email = email;
    }
    if let Some(phone) = patch.phone {
      self.phone = Some(phone);
    }
    if let Some(address) = patch.address {
      self.address = Some(address);
    }
  }
}

// ─── Validated inputs ────────────────────────────────────────────────────────

/// Fields for a contact about to be created. Produced by
/// [`ContactDraft::validate_new`]; required fields are guaranteed present and
/// well-formed.
#[derive(Debug, Clone)]
pub struct NewContact {
  pub full_name:  String,
  pub birth_date: NaiveDate,
  pub email:      String,
  pub phone:      Option<String>,
  pub address:    Option<String>,
}

/// A partial overwrite of an existing contact. `None` means "keep the current
/// value"; there is no way to clear a field back to absent.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
  pub full_name:  Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub address:    Option<String>,
}

// ─── Draft + validation ──────────────────────────────────────────────────────

/// The raw request-body shape: every field optional, validated in a second
/// step so errors can name all offending fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
  pub full_name:  Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
  pub address:    Option<String>,
}

impl ContactDraft {
  /// Validate the draft for creation: `fullName`, `birthDate` and `email`
  /// are required, the name must be non-empty and the email syntactic.
  pub fn validate_new(self) -> Result<NewContact> {
    let mut bad = Vec::new();

    match self.full_name.as_deref() {
      None | Some("") => bad.push("fullName".to_string()),
      Some(_) => {}
    }
    if self.birth_date.is_none() {
      bad.push("birthDate".to_string());
    }
    match self.email.as_deref() {
      Some(email) if is_email(email) => {}
      _ => bad.push("email".to_string()),
    }

    match (self.full_name, self.birth_date, self.email) {
      (Some(full_name), Some(birth_date), Some(email)) if bad.is_empty() => {
        Ok(NewContact {
          full_name,
          birth_date,
          email,
          phone: self.phone,
          address: self.address,
        })
      }
      _ => Err(Error::InvalidFields(bad)),
    }
  }

  /// Validate the draft as a partial update: only the fields that are present
  /// are checked, and all may be absent.
  pub fn validate_patch(self) -> Result<ContactPatch> {
    let mut bad = Vec::new();

    if matches!(self.full_name.as_deref(), Some("")) {
      bad.push("fullName".to_string());
    }
    if matches!(self.email.as_deref(), Some(email) if !is_email(email)) {
      bad.push("email".to_string());
    }

    if !bad.is_empty() {
      return Err(Error::InvalidFields(bad));
    }

    Ok(ContactPatch {
      full_name:  self.full_name,
      birth_date: self.birth_date,
      email:      self.email,
      phone:      self.phone,
      address:    self.address,
    })
  }
}

/// Syntactic email check: one `@`, a non-empty local part, and a domain with
/// an interior dot. Deliverability is out of scope.
fn is_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.is_empty()
    && domain.contains('.')
    && !domain.starts_with('.')
    && !domain.ends_with('.')
    && !domain.contains('@')
}

// ─── Tests ───────────────────────────────────────────────────────────────────
