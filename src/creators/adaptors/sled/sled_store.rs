use async_trait::async_trait;
use sled::Tree;
use tracing::instrument;
use tracing::trace;
use tracing::warn;

use crate::utils::convert::creator_key;
use crate::Creator;
use crate::CreatorId;
use crate::CreatorLookup;
use crate::CreatorStore;
use crate::NameEntry;
use crate::StoreError;

// Database tree namespaces
const CREATORS_NAMESPACE: &str = "creators";
const CHANNEL_INDEX_NAMESPACE: &str = "channel_index";
const HANDLE_INDEX_NAMESPACE: &str = "handle_index";

/// Durable creator store.
///
/// Three trees: the primary record tree keyed by big-endian creator id, and
/// two secondary index trees mapping channel ids and lowercased handles back
/// to the primary key. Records are bincode-encoded.
pub struct SledCreatorStore {
    creators: Tree,
    channel_index: Tree,
    handle_index: Tree,
}

impl SledCreatorStore {
    pub fn open(db: &sled::Db) -> Result<Self, StoreError> {
        Ok(Self {
            creators: db.open_tree(CREATORS_NAMESPACE)?,
            channel_index: db.open_tree(CHANNEL_INDEX_NAMESPACE)?,
            handle_index: db.open_tree(HANDLE_INDEX_NAMESPACE)?,
        })
    }

    fn decode(
        &self,
        bytes: &[u8],
    ) -> Result<Creator, StoreError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn get_by_primary_key(
        &self,
        key: [u8; 8],
    ) -> Result<Option<Creator>, StoreError> {
        match self.creators.get(key)? {
            Some(bytes) => self.decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Follows a secondary index entry to the primary record.
    fn resolve_index_entry(
        &self,
        index_value: &[u8],
    ) -> Result<Option<Creator>, StoreError> {
        let Ok(key) = <[u8; 8]>::try_from(index_value) else {
            warn!("secondary index holds malformed primary key, skipping");
            return Ok(None);
        };
        let found = self.get_by_primary_key(key)?;
        if found.is_none() {
            warn!("secondary index points at missing creator record");
        }
        Ok(found)
    }
}

#[async_trait]
impl CreatorLookup for SledCreatorStore {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        id: CreatorId,
    ) -> Result<Option<Creator>, StoreError> {
        self.get_by_primary_key(creator_key(id))
    }

    #[instrument(skip(self))]
    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Option<Creator>, StoreError> {
        match self.channel_index.get(channel_id.as_bytes())? {
            Some(value) => self.resolve_index_entry(&value),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Creator>, StoreError> {
        match self.handle_index.get(handle.to_lowercase().as_bytes())? {
            Some(value) => self.resolve_index_entry(&value),
            None => Ok(None),
        }
    }

    async fn list_names(&self) -> Result<Vec<NameEntry>, StoreError> {
        let mut names = Vec::new();
        for item in self.creators.iter() {
            let (_, value) = item?;
            let creator = self.decode(&value)?;
            names.extend(creator.name_entries());
        }
        Ok(names)
    }
}

#[async_trait]
impl CreatorStore for SledCreatorStore {
    async fn upsert(
        &self,
        creator: Creator,
    ) -> Result<(), StoreError> {
        trace!("upsert creator {}", creator.id);

        let key = creator_key(creator.id);

        // Drop index entries the new record no longer claims.
        if let Some(previous) = self.get_by_primary_key(key)? {
            if previous.channel_id != creator.channel_id && !previous.channel_id.is_empty() {
                self.channel_index.remove(previous.channel_id.as_bytes())?;
            }
            let previous_handle = previous.handle.to_lowercase();
            if previous_handle != creator.handle.to_lowercase() && !previous.handle.is_empty() {
                self.handle_index.remove(previous_handle.as_bytes())?;
            }
        }

        if !creator.channel_id.is_empty() {
            self.channel_index.insert(creator.channel_id.as_bytes(), &key[..])?;
        }
        if !creator.handle.is_empty() {
            self.handle_index.insert(creator.handle.to_lowercase().as_bytes(), &key[..])?;
        }
        self.creators.insert(key, bincode::serialize(&creator)?)?;
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.creators.len())
    }
}
