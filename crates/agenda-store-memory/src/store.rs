//! [`MemoryStore`] — the in-memory implementation of [`ContactStore`].

use std::{convert::Infallible, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use agenda_core::{
  contact::{ContactPatch, ContactRecord, NewContact},
  store::ContactStore,
};

/// A contact store backed by a process-wide `Vec` behind an async `RwLock`.
///
/// Writes serialize; reads may run concurrently. Cloning is cheap — the
/// collection is reference-counted, so all clones observe the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
  contacts: Arc<RwLock<Vec<ContactRecord>>>,
}

impl MemoryStore {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }
}

impl ContactStore for MemoryStore {
  // No operation can fail: there is no I/O and absence is a sentinel.
  type Error = Infallible;

  async fn create(&self, input: NewContact) -> Result<ContactRecord, Infallible> {
    let record = ContactRecord {
      id:         Uuid::new_v4(),
      full_name:  input.full_name,
      birth_date: input.birth_date,
      email:      input.email,
      phone:      input.phone,
      address:    input.address,
    };
    self.contacts.write().await.push(record.clone());
    Ok(record)
  }

  async fn get(&self, id: Uuid) -> Result<Option<ContactRecord>, Infallible> {
    let contacts = self.contacts.read().await;
    Ok(contacts.iter().find(|c| c.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<ContactRecord>, Infallible> {
    let mut contacts = self.contacts.read().await.clone();
    // Vec::sort_by is stable, so equal names keep insertion order.
    contacts.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    Ok(contacts)
  }

  async fn update(
    &self,
    id: Uuid,
    patch: ContactPatch,
  ) -> Result<Option<ContactRecord>, Infallible> {
    let mut contacts = self.contacts.write().await;
    let Some(record) = contacts.iter_mut().find(|c| c.id == id) else {
      return Ok(None);
    };
    record.apply(patch);
    Ok(Some(record.clone()))
  }

  async fn delete(&self, id: Uuid) -> Result<bool, Infallible> {
    let mut contacts = self.contacts.write().await;
    let before = contacts.len();
    contacts.retain(|c| c.id != id);
    Ok(contacts.len() < before)
  }
}
