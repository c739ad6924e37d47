//! Detection Engine Error Hierarchy
//!
//! Defines error types for the creator detection engine, categorized by
//! subsystem: storage collaborators, detection calls, and configuration.
//!
//! A lookup miss is not an error anywhere in this crate: finders return
//! `Ok(None)` and callers skip. Only collaborator faults surface as errors.

use ::config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creator store collaborator failures (I/O, codec, backend)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Detection call failures with record context
    #[error(transparent)]
    Detection(#[from] DetectionError),

    /// Configuration loading failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unrecoverable failures requiring the caller to abort
    #[error("Fatal error: {0}")]
    Fatal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Disk I/O failures while opening or flushing a store
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// sled backend failures
    #[error(transparent)]
    Sled(#[from] sled::Error),

    /// Serialization failures for persisted creator records
    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    /// Key codec failures
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Backend-specific failure with context
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Failures of a single `detect` call or of detector construction.
///
/// Carries enough context (which lookup stage, which video) for the caller to
/// retry or skip the record without corrupting automaton state.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// Name snapshot retrieval failed before automaton compilation.
    /// The detector was not built; the caller must not use it.
    #[error("name snapshot failed while building detector: {0}")]
    Snapshot(#[source] StoreError),

    /// A creator lookup failed mid-detection. The call was aborted.
    #[error("{stage} lookup failed for video {video_id}: {source}")]
    Lookup {
        stage: LookupStage,
        video_id: String,
        #[source]
        source: StoreError,
    },
}

/// Which resolution tier a failed lookup belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    PrimaryChannel,
    LinkedChannel,
    NameText,
}

impl std::fmt::Display for LookupStage {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s = match self {
            LookupStage::PrimaryChannel => "primary channel",
            LookupStage::LinkedChannel => "linked channel",
            LookupStage::NameText => "name text",
        };
        f.write_str(s)
    }
}

/// Error type for key codec operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Invalid input length error
    ///
    /// This occurs when a stored key's length doesn't match the required 8 bytes.
    #[error("invalid key length: expected 8 bytes, received {0} bytes")]
    InvalidLength(usize),
}
