//! In-memory member record store

use crate::member::MemberRecord;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the ordered list of submitted member records.
///
/// Constructed once at application start and cloned into every consumer.
/// The only writer is the submission pipeline; the teacher-facing views
/// read. No update or remove operation is exposed, and identifier
/// uniqueness is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    records: Arc<RwLock<Vec<MemberRecord>>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a record to the end of the sequence
    pub async fn append(&self, record: MemberRecord) {
        self.records.write().await.push(record);
    }

    /// Snapshot of all records in insertion order
    pub async fn get_all(&self) -> Vec<MemberRecord> {
        self.records.read().await.clone()
    }

    /// First record whose identifier matches, or None
    pub async fn get_by_id(&self, id: &str) -> Option<MemberRecord> {
        self.records.read().await.iter().find(|m| m.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, first_name: &str) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "ใจดี".to_string(),
            address: None,
            phone: "0812345678".to_string(),
            school: "รร.ทดสอบ".to_string(),
            gpa: 3.5,
            skills: None,
            reason: None,
            major: None,
            university: None,
            profile_photo: None,
            activities: Vec::new(),
            awards: Vec::new(),
            works: Vec::new(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemberStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = MemberStore::new();
        store.append(record("1", "หนึ่ง")).await;
        store.append(record("2", "สอง")).await;
        store.append(record("3", "สาม")).await;

        let all = store.get_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].first_name, "หนึ่ง");
        assert_eq!(all[1].first_name, "สอง");
        assert_eq!(all[2].first_name, "สาม");
    }

    #[tokio::test]
    async fn test_get_by_id_finds_record() {
        let store = MemberStore::new();
        store.append(record("42", "สมชาย")).await;

        let found = store.get_by_id("42").await.unwrap();
        assert_eq!(found.first_name, "สมชาย");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let store = MemberStore::new();
        store.append(record("1", "สมชาย")).await;
        assert!(store.get_by_id("no-such-id").await.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_returns_first_match() {
        // The store does not validate uniqueness; first match wins
        let store = MemberStore::new();
        store.append(record("dup", "ก่อน")).await;
        store.append(record("dup", "หลัง")).await;

        let found = store.get_by_id("dup").await.unwrap();
        assert_eq!(found.first_name, "ก่อน");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemberStore::new();
        let clone = store.clone();
        store.append(record("1", "สมชาย")).await;
        assert_eq!(clone.len().await, 1);
    }
}
