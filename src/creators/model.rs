use serde::Deserialize;
use serde::Serialize;

/// Externally meaningful creator identifier, stable across snapshots.
pub type CreatorId = u64;

/// One content creator as known to the engine.
///
/// `channel_id` and `handle` are the external platform identifiers used for
/// exact-key resolution; the two names feed the text automaton. Either name
/// (or either identifier) may be empty when the upstream profile lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub channel_id: String,
    pub handle: String,
    pub original_name: String,
    pub display_name: String,
    pub affiliation: String,
    pub avatar_url: String,
    pub status: String,
}

/// Which name class a dictionary entry belongs to.
///
/// The eligibility policy is applied per class before a name is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameKind {
    Original,
    Display,
}

/// One (id, name) pair from a dictionary snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub id: CreatorId,
    pub name: String,
    pub kind: NameKind,
}

impl Creator {
    /// Dictionary entries for this creator's non-empty names.
    pub(crate) fn name_entries(&self) -> impl Iterator<Item = NameEntry> + '_ {
        let original = (!self.original_name.is_empty()).then(|| NameEntry {
            id: self.id,
            name: self.original_name.clone(),
            kind: NameKind::Original,
        });
        let display = (!self.display_name.is_empty()).then(|| NameEntry {
            id: self.id,
            name: self.display_name.clone(),
            kind: NameKind::Display,
        });
        original.into_iter().chain(display)
    }
}
