//! In-memory media store: binary payloads behind opaque references
//!
//! Stands in for the browser's object-URL facility: a payload goes in,
//! an opaque `/media/{uuid}` reference comes out, and the payload stays
//! resident until the reference is explicitly released or the process
//! exits. References are never durable across processes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque reference to an in-memory media payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    fn from_handle(handle: Uuid) -> Self {
        MediaRef(format!("/media/{}", handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The underlying store handle, if this is a well-formed reference
    pub fn handle(&self) -> Option<Uuid> {
        self.0
            .strip_prefix("/media/")
            .and_then(|s| Uuid::parse_str(s).ok())
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored payload with its display metadata
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Shared handle to the in-memory payload registry
#[derive(Debug, Clone, Default)]
pub struct MediaStore {
    entries: Arc<RwLock<HashMap<Uuid, StoredMedia>>>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a payload and mint a fresh reference to it
    pub async fn insert(&self, filename: String, content_type: String, bytes: Vec<u8>) -> MediaRef {
        let handle = Uuid::new_v4();
        self.entries.write().await.insert(
            handle,
            StoredMedia {
                filename,
                content_type,
                bytes,
            },
        );
        MediaRef::from_handle(handle)
    }

    /// Look up a payload by handle
    pub async fn get(&self, handle: Uuid) -> Option<StoredMedia> {
        self.entries.read().await.get(&handle).cloned()
    }

    /// Explicitly free the payload behind a reference.
    ///
    /// Returns true when a payload was actually removed.
    pub async fn release(&self, reference: &MediaRef) -> bool {
        match reference.handle() {
            Some(handle) => self.entries.write().await.remove(&handle).is_some(),
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
