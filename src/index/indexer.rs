use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::Creator;
use crate::CreatorId;
use crate::CreatorLookup;
use crate::DetectionResult;
use crate::Detector;
use crate::Error;
use crate::StoreError;
use crate::ViewRecord;

#[cfg(test)]
use mockall::automock;

/// Destination for index rows produced from watch logs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IndexSink: Send + Sync + 'static {
    /// Credits one creator to one watched video.
    async fn insert_video_creator(
        &self,
        user_id: &str,
        video_id: &str,
        creator_id: CreatorId,
    ) -> Result<(), StoreError>;

    /// Records the watch-history row itself.
    async fn insert_video_history(
        &self,
        record: &ViewRecord,
    ) -> Result<(), StoreError>;
}

/// Counters for one indexing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub videos: u64,
    pub credits: u64,
}

/// Streams watch logs through a detector and writes the resulting
/// video-creator credits and history rows to a sink.
///
/// One detector compilation serves the whole run; every record gets fresh
/// lookups. Any source, detection, or sink fault aborts the run so a batch
/// is never silently partial.
pub struct Indexer<L, S> {
    detector: Detector<L>,
    sink: Arc<S>,
}

impl<L, S> Indexer<L, S>
where
    L: CreatorLookup,
    S: IndexSink,
{
    pub fn new(
        detector: Detector<L>,
        sink: Arc<S>,
    ) -> Self {
        Self { detector, sink }
    }

    /// Drains `records`, stopping early when `shutdown` is cancelled.
    pub async fn run(
        &self,
        mut records: BoxStream<'_, Result<ViewRecord, StoreError>>,
        shutdown: CancellationToken,
    ) -> Result<IndexStats, Error> {
        let mut stats = IndexStats::default();

        loop {
            let next = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("indexing cancelled after {} videos", stats.videos);
                    break;
                }
                next = records.next() => next,
            };
            let Some(next) = next else {
                break;
            };
            let record = next?;

            let result = self.detector.detect(&record.video).await?;
            for creator in credited_creators(&result) {
                self.sink
                    .insert_video_creator(&record.user_id, &record.video.id, creator.id)
                    .await?;
                stats.credits += 1;
            }
            self.sink.insert_video_history(&record).await?;
            stats.videos += 1;
        }

        info!("indexed {} videos with {} creator credits", stats.videos, stats.credits);
        Ok(stats)
    }
}

/// Linked channels often point at genmates or otherwise related creators
/// rather than participants. With a primary channel present, only the
/// primary and the text matches are credited.
fn credited_creators(result: &DetectionResult) -> Vec<&Creator> {
    if result.primary().is_some() {
        result.primary().into_iter().chain(result.text_matches()).collect()
    } else {
        result.all().iter().collect()
    }
}
