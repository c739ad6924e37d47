use async_trait::async_trait;

use crate::Creator;
use crate::CreatorId;
use crate::NameEntry;
use crate::StoreError;

#[cfg(test)]
use mockall::automock;

/// Read capability over the creator dictionary.
///
/// Every finder distinguishes a miss from a fault: `Ok(None)` means the key
/// resolves to nothing and is skipped by callers, `Err` means the backing
/// store failed and the whole operation in flight must abort. Point lookups
/// may block on I/O; callers cancel cooperatively by dropping the future.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CreatorLookup: Send + Sync + 'static {
    async fn find_by_id(
        &self,
        id: CreatorId,
    ) -> Result<Option<Creator>, StoreError>;

    async fn find_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Option<Creator>, StoreError>;

    /// Case-insensitive on the handle.
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Creator>, StoreError>;

    /// Snapshot of all (id, name, kind) entries for automaton compilation.
    async fn list_names(&self) -> Result<Vec<NameEntry>, StoreError>;
}
