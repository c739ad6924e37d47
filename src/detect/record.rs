use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Video metadata as delivered by the upstream activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "video_id")]
    pub id: String,
    #[serde(rename = "video_title")]
    pub title: String,
    pub channel_id: String,
    #[serde(default)]
    pub channel_handle: String,
    #[serde(default)]
    pub linked_channels: Vec<String>,
    #[serde(default)]
    pub duration_secs: u64,
}

/// One watch-log row: who watched which video, when, for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    pub id: i64,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub duration_secs: u64,
    pub video: VideoRecord,
}

const CHANNEL_ID_PREFIX: &str = "UC";
const HANDLE_PREFIX: char = '@';

/// Classification of one linked-channel reference string.
///
/// A prefix-based tag, not an interface: canonical channel ids start with
/// `UC`, handles with `@`. Anything else is unclassifiable and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedRef<'a> {
    ChannelId(&'a str),
    Handle(&'a str),
}

impl<'a> LinkedRef<'a> {
    pub fn classify(raw: &'a str) -> Option<Self> {
        if raw.starts_with(CHANNEL_ID_PREFIX) {
            Some(LinkedRef::ChannelId(raw))
        } else if raw.starts_with(HANDLE_PREFIX) {
            Some(LinkedRef::Handle(raw))
        } else {
            None
        }
    }
}
