use std::sync::Arc;

use tracing::debug;

use crate::AutomatonBuilder;
use crate::Creator;
use crate::CreatorLookup;
use crate::DetectionError;
use crate::LinkedRef;
use crate::LookupStage;
use crate::Matcher;
use crate::NamePolicy;
use crate::StoreError;
use crate::VideoRecord;

/// Resolves which creators a video involves.
///
/// Built once per dictionary snapshot: construction compiles the eligible
/// names into an automaton, and `detect` reuses it for any number of records.
/// Rebuild only when the dictionary changes. Concurrent `detect` calls are
/// safe; within one call the lookups run sequentially because later tiers
/// dedup against earlier ones.
pub struct Detector<L> {
    matcher: Matcher,
    lookup: Arc<L>,
}

impl<L> std::fmt::Debug for Detector<L> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Detector").field("matcher", &self.matcher).finish_non_exhaustive()
    }
}

impl<L: CreatorLookup> Detector<L> {
    /// Snapshots the lookup's name dictionary and compiles the automaton.
    ///
    /// Names rejected by `policy` are not indexed and can never produce a
    /// text match.
    pub async fn create(
        lookup: Arc<L>,
        policy: &NamePolicy,
    ) -> Result<Self, DetectionError> {
        let names = lookup.list_names().await.map_err(DetectionError::Snapshot)?;

        let mut builder = AutomatonBuilder::new();
        let mut indexed = 0usize;
        let total = names.len();
        for entry in &names {
            if let Some(pattern) = policy.indexable(entry.kind, &entry.name) {
                builder.add_str(&pattern, entry.id);
                indexed += 1;
            }
        }
        let matcher = builder.build();
        debug!(
            "compiled name automaton: {} of {} names indexed, {} states",
            indexed,
            total,
            matcher.state_count()
        );

        Ok(Self { matcher, lookup })
    }

    /// Runs all three resolution tiers over one record.
    ///
    /// A lookup miss is skipped; a lookup fault aborts the call and reports
    /// which tier and which video failed.
    pub async fn detect(
        &self,
        record: &VideoRecord,
    ) -> Result<DetectionResult, DetectionError> {
        let mut all: Vec<Creator> = Vec::new();

        let primary = self
            .lookup
            .find_by_channel_id(&record.channel_id)
            .await
            .map_err(|e| lookup_error(LookupStage::PrimaryChannel, record, e))?;
        let has_primary = primary.is_some();
        if let Some(creator) = primary {
            all.push(creator);
        }

        for reference in &record.linked_channels {
            let resolved = match LinkedRef::classify(reference) {
                Some(LinkedRef::ChannelId(channel_id)) => {
                    self.lookup.find_by_channel_id(channel_id).await
                }
                Some(LinkedRef::Handle(handle)) => self.lookup.find_by_handle(handle).await,
                None => continue,
            }
            .map_err(|e| lookup_error(LookupStage::LinkedChannel, record, e))?;
            if let Some(creator) = resolved {
                append_unique(&mut all, creator);
            }
        }
        let linked_until = all.len();

        for id in self.matcher.search_str(&record.title) {
            let resolved = self
                .lookup
                .find_by_id(id)
                .await
                .map_err(|e| lookup_error(LookupStage::NameText, record, e))?;
            if let Some(creator) = resolved {
                append_unique(&mut all, creator);
            }
        }

        Ok(DetectionResult {
            all,
            has_primary,
            linked_until,
        })
    }
}

/// The creators detected for one record, most significant tier first.
///
/// One deduplicated ordered sequence; the per-tier accessors are
/// non-overlapping views over it. A creator resolved by a more significant
/// tier never reappears in a later one.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    all: Vec<Creator>,
    has_primary: bool,
    linked_until: usize,
}

impl DetectionResult {
    /// Every detected creator in precedence order.
    pub fn all(&self) -> &[Creator] {
        &self.all
    }

    /// The creator matching the uploader's channel id, if any.
    pub fn primary(&self) -> Option<&Creator> {
        self.has_primary.then(|| &self.all[0])
    }

    /// Creators resolved from linked-channel references, in reference order.
    pub fn linked(&self) -> &[Creator] {
        &self.all[self.primary_len()..self.linked_until]
    }

    /// Creators found in the title text, in order of first occurrence.
    pub fn text_matches(&self) -> &[Creator] {
        &self.all[self.linked_until..]
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn into_all(self) -> Vec<Creator> {
        self.all
    }

    fn primary_len(&self) -> usize {
        usize::from(self.has_primary)
    }
}

fn lookup_error(
    stage: LookupStage,
    record: &VideoRecord,
    source: StoreError,
) -> DetectionError {
    DetectionError::Lookup {
        stage,
        video_id: record.id.clone(),
        source,
    }
}

fn append_unique(
    all: &mut Vec<Creator>,
    creator: Creator,
) {
    if !all.iter().any(|existing| existing.id == creator.id) {
        all.push(creator);
    }
}
