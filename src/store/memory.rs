use super::model::{RequestDraft, SavedRequest};
use super::{Access, StoreError};
use chrono::Utc;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store of saved requests, shared across handlers.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    records: Arc<RwLock<HashMap<Uuid, SavedRequest>>>,
}

fn check_owner(record: &SavedRequest, owner: &str, access: Access) -> Result<(), StoreError> {
    if record.user == owner {
        Ok(())
    } else {
        Err(StoreError::NotOwner(access))
    }
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, owner: &str, draft: RequestDraft) -> Result<SavedRequest, StoreError> {
        let valid = draft.validate()?;
        let now = Utc::now();
        let record = SavedRequest {
            id: Uuid::new_v4(),
            name: valid.name,
            url: valid.url,
            method: valid.method,
            headers: valid.headers,
            body: valid.body,
            user: owner.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.insert(record.id, record.clone());
        tracing::debug!(id = %record.id, user = owner, "Saved request created");
        Ok(record)
    }

    /// Records owned by `owner`, newest first.
    pub async fn list(&self, owner: &str) -> Vec<SavedRequest> {
        let records = self.records.read().await;
        let mut owned: Vec<SavedRequest> = records
            .values()
            .filter(|r| r.user == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        owned
    }

    pub async fn get(&self, owner: &str, id: Uuid) -> Result<SavedRequest, StoreError> {
        let records = self.records.read().await;
        let record = records.get(&id).ok_or(StoreError::NotFound(id))?;
        check_owner(record, owner, Access::Read)?;
        Ok(record.clone())
    }

    pub async fn update(
        &self,
        owner: &str,
        id: Uuid,
        draft: RequestDraft,
    ) -> Result<SavedRequest, StoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        check_owner(record, owner, Access::Update)?;

        let valid = draft.validate()?;
        record.name = valid.name;
        record.url = valid.url;
        record.method = valid.method;
        record.headers = valid.headers;
        record.body = valid.body;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    pub async fn delete(&self, owner: &str, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let record = records.get(&id).ok_or(StoreError::NotFound(id))?;
        check_owner(record, owner, Access::Delete)?;
        records.remove(&id);
        tracing::debug!(%id, user = owner, "Saved request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::{HeaderEntry, HttpMethod};

    fn draft(name: &str) -> RequestDraft {
        RequestDraft {
            name: Some(name.to_string()),
            url: Some("https://api.example.com".to_string()),
            method: Some(HttpMethod::Get),
            headers: vec![HeaderEntry::new("Accept", "*/*")],
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = RequestStore::new();
        let created = store.create("alice", draft("one")).await.unwrap();
        assert_eq!(created.user, "alice");
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get("alice", created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let store = RequestStore::new();
        let first = store.create("alice", draft("first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.create("alice", draft("second")).await.unwrap();
        store.create("bob", draft("other")).await.unwrap();

        let listed = store.list("alice").await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert!(store.list("carol").await.is_empty());
    }

    #[tokio::test]
    async fn test_other_owner_is_rejected() {
        let store = RequestStore::new();
        let created = store.create("alice", draft("one")).await.unwrap();

        assert_eq!(
            store.get("bob", created.id).await.unwrap_err(),
            StoreError::NotOwner(Access::Read)
        );
        assert_eq!(
            store.update("bob", created.id, draft("x")).await.unwrap_err(),
            StoreError::NotOwner(Access::Update)
        );
        let err = store.delete("bob", created.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Not authorized to delete this request");
        assert!(store.get("alice", created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_id() {
        let store = RequestStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.get("alice", id).await.unwrap_err(), StoreError::NotFound(id));
        assert_eq!(store.delete("alice", id).await.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn test_update_revalidates_and_bumps_timestamp() {
        let store = RequestStore::new();
        let created = store.create("alice", draft("one")).await.unwrap();

        let err = store.update("alice", created.id, draft("  ")).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));

        let mut changed = draft("renamed");
        changed.method = Some(HttpMethod::Post);
        changed.body = r#"{"a":1}"#.to_string();
        let updated = store.update("alice", created.id, changed).await.unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.method, HttpMethod::Post);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = RequestStore::new();
        let created = store.create("alice", draft("one")).await.unwrap();
        store.delete("alice", created.id).await.unwrap();
        assert_eq!(
            store.get("alice", created.id).await.unwrap_err(),
            StoreError::NotFound(created.id)
        );
    }
}
