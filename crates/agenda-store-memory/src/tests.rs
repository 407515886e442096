//! Integration tests for `MemoryStore`.

use agenda_core::{
  contact::{ContactPatch, NewContact},
  store::ContactStore,
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::MemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contact(name: &str) -> NewContact {
  NewContact {
    full_name:  name.to_string(),
    birth_date: date(1990, 5, 20),
    email:      format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    phone:      None,
    address:    None,
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_get_round_trips() {
  let s = MemoryStore::new();

  let created = s.create(contact("Ana Souza")).await.unwrap();
  assert_eq!(created.full_name, "Ana Souza");

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = MemoryStore::new();
  let a = s.create(contact("Ana Souza")).await.unwrap();
  let b = s.create(contact("Ana Souza")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = MemoryStore::new();
  assert_eq!(s.get(Uuid::new_v4()).await.unwrap(), None);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = MemoryStore::new();
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_sorts_by_full_name() {
  let s = MemoryStore::new();
  s.create(contact("Carla Dias")).await.unwrap();
  s.create(contact("Ana Souza")).await.unwrap();
  s.create(contact("Bruno Lima")).await.unwrap();

  let names: Vec<_> = s
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.full_name)
    .collect();
  assert_eq!(names, ["Ana Souza", "Bruno Lima", "Carla Dias"]);
}

#[tokio::test]
async fn list_keeps_insertion_order_for_equal_names() {
  let s = MemoryStore::new();
  let first = s.create(contact("Ana Souza")).await.unwrap();
  s.create(contact("Bruno Lima")).await.unwrap();
  let second = s.create(contact("Ana Souza")).await.unwrap();

  let ids: Vec<_> = s
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.id)
    .collect();
  assert_eq!(ids[0], first.id);
  assert_eq!(ids[1], second.id);
}

#[tokio::test]
async fn list_is_case_sensitive() {
  // Uppercase sorts before lowercase in lexical byte order.
  let s = MemoryStore::new();
  s.create(contact("ana")).await.unwrap();
  s.create(contact("Bruno")).await.unwrap();

  let names: Vec<_> = s
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.full_name)
    .collect();
  assert_eq!(names, ["Bruno", "ana"]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_only_provided_fields() {
  let s = MemoryStore::new();
  let created = s.create(contact("Ana Souza")).await.unwrap();

  let updated = s
    .update(created.id, ContactPatch {
      phone: Some("+55 11 98888-7777".to_string()),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.phone.as_deref(), Some("+55 11 98888-7777"));
  assert_eq!(updated.full_name, created.full_name);
  assert_eq!(updated.birth_date, created.birth_date);
  assert_eq!(updated.email, created.email);
  assert_eq!(updated.address, None);

  // The mutation is visible on a subsequent read.
  assert_eq!(s.get(created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_never_reassigns_id() {
  let s = MemoryStore::new();
  let created = s.create(contact("Ana Souza")).await.unwrap();

  let updated = s
    .update(created.id, ContactPatch {
      full_name: Some("Ana Souza Pereira".to_string()),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn update_unknown_id_returns_none_and_changes_nothing() {
  let s = MemoryStore::new();
  let created = s.create(contact("Ana Souza")).await.unwrap();

  let result = s
    .update(Uuid::new_v4(), ContactPatch {
      full_name: Some("Someone Else".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(result.is_none());
  assert_eq!(s.get(created.id).await.unwrap(), Some(created));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_exactly_one_record() {
  let s = MemoryStore::new();
  let keep = s.create(contact("Ana Souza")).await.unwrap();
  let gone = s.create(contact("Bruno Lima")).await.unwrap();

  assert!(s.delete(gone.id).await.unwrap());

  let remaining = s.list().await.unwrap();
  assert_eq!(remaining.len(), 1);
  assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn delete_is_irreversible() {
  let s = MemoryStore::new();
  let created = s.create(contact("Ana Souza")).await.unwrap();

  assert!(s.delete(created.id).await.unwrap());
  assert!(!s.delete(created.id).await.unwrap());
  assert_eq!(s.get(created.id).await.unwrap(), None);
  assert!(s.update(created.id, ContactPatch::default()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_id_returns_false() {
  let s = MemoryStore::new();
  assert!(!s.delete(Uuid::new_v4()).await.unwrap());
}

// ─── Shared state across clones ──────────────────────────────────────────────

#[tokio::test]
async fn clones_share_the_same_collection() {
  let s = MemoryStore::new();
  let clone = s.clone();

  let created = clone.create(contact("Ana Souza")).await.unwrap();
  assert_eq!(s.get(created.id).await.unwrap(), Some(created));
}
