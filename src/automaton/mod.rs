//! Multi-pattern name automaton.
//!
//! A trie with failure links over raw bytes, compiled once from a name
//! dictionary snapshot and scanned many times. States live in a single arena
//! and reference each other by index, so the parent/child/failure reference
//! cycles never touch ownership.

mod builder;
mod matcher;

pub use builder::*;
pub use matcher::*;

#[cfg(test)]
mod builder_test;
