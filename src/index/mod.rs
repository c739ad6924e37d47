//! Batch indexing of watch logs against a detector.

mod indexer;

pub use indexer::*;
