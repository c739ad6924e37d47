use async_trait::async_trait;

use crate::Creator;
use crate::CreatorLookup;
use crate::StoreError;

/// Write capability over the creator dictionary.
#[async_trait]
pub trait CreatorStore: CreatorLookup {
    /// Inserts or replaces the creator with the same id, keeping the
    /// channel-id and handle indexes consistent with the new record.
    async fn upsert(
        &self,
        creator: Creator,
    ) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}
