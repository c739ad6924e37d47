use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use crate::Creator;
use crate::CreatorId;
use crate::CreatorLookup;
use crate::CreatorStore;
use crate::NameEntry;
use crate::StoreError;

#[derive(Debug, Default)]
struct MemInner {
    creators: HashMap<CreatorId, Creator>,
    by_channel: HashMap<String, CreatorId>,
    /// Keys lowercased for case-insensitive handle resolution.
    by_handle: HashMap<String, CreatorId>,
}

/// In-memory creator store.
///
/// Backs unit tests and small deployments. All three maps live behind one
/// lock so upserts keep the secondary indexes consistent.
#[derive(Debug, Default)]
pub struct MemCreatorStore {
    inner: RwLock<MemInner>,
}

impl MemCreatorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CreatorLookup for MemCreatorStore {
    async fn find_by_id(
        &self,
        id: CreatorId,
    ) -> Result<Option<Creator>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.creators.get(&id).cloned())
    }

    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Option<Creator>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .by_channel
            .get(channel_id)
            .and_then(|id| inner.creators.get(id))
            .cloned())
    }

    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Creator>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .by_handle
            .get(&handle.to_lowercase())
            .and_then(|id| inner.creators.get(id))
            .cloned())
    }

    async fn list_names(&self) -> Result<Vec<NameEntry>, StoreError> {
        let inner = self.inner.read();
        let mut names: Vec<NameEntry> =
            inner.creators.values().flat_map(|c| c.name_entries()).collect();
        // HashMap iteration order is arbitrary; keep snapshots stable.
        names.sort_by_key(|entry| (entry.id, entry.kind as u8));
        Ok(names)
    }
}

#[async_trait]
impl CreatorStore for MemCreatorStore {
    async fn upsert(
        &self,
        creator: Creator,
    ) -> Result<(), StoreError> {
        trace!("upsert creator {}", creator.id);

        let mut inner = self.inner.write();
        if let Some(previous) = inner.creators.get(&creator.id).cloned() {
            if previous.channel_id != creator.channel_id {
                inner.by_channel.remove(&previous.channel_id);
            }
            if !previous.handle.eq_ignore_ascii_case(&creator.handle) {
                inner.by_handle.remove(&previous.handle.to_lowercase());
            }
        }

        if !creator.channel_id.is_empty() {
            inner.by_channel.insert(creator.channel_id.clone(), creator.id);
        }
        if !creator.handle.is_empty() {
            inner.by_handle.insert(creator.handle.to_lowercase(), creator.id);
        }
        inner.creators.insert(creator.id, creator);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().creators.len())
    }
}
