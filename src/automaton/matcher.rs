use crate::CreatorId;

use super::builder::{State, StateId};

/// Immutable compiled automaton.
///
/// Read-only after compilation: `search` keeps its cursor in the returned
/// iterator, so any number of concurrent searches may run against one
/// `Matcher` without synchronization.
pub struct Matcher {
    states: Box<[State]>,
}

impl std::fmt::Debug for Matcher {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Matcher").field("states", &self.states.len()).finish()
    }
}

impl Matcher {
    pub(crate) fn from_states(states: Box<[State]>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Scans `text` for every pattern occurrence, including overlapping and
    /// suffix-nested ones, yielding the creator id of each match at the
    /// position where it completes.
    ///
    /// The returned iterator is lazy: dropping it after any number of matches
    /// stops all further work.
    pub fn search<'m, 't>(
        &'m self,
        text: &'t [u8],
    ) -> Matches<'m, 't> {
        Matches {
            states: &self.states,
            text,
            pos: 0,
            state: StateId::ROOT,
            emit: None,
        }
    }

    pub fn search_str<'m, 't>(
        &'m self,
        text: &'t str,
    ) -> Matches<'m, 't> {
        self.search(text.as_bytes())
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

/// Lazy match sequence over one text.
///
/// Holds a local `(pos, state)` cursor plus the output set currently being
/// drained; the underlying [`Matcher`] is never mutated.
pub struct Matches<'m, 't> {
    states: &'m [State],
    text: &'t [u8],
    pos: usize,
    state: StateId,
    emit: Option<(StateId, usize)>,
}

impl Iterator for Matches<'_, '_> {
    type Item = CreatorId;

    fn next(&mut self) -> Option<CreatorId> {
        loop {
            if let Some((signal, offset)) = self.emit {
                let outputs = self.states[signal.index()].outputs();
                if offset < outputs.len() {
                    self.emit = Some((signal, offset + 1));
                    return Some(outputs[offset]);
                }
                self.emit = None;
            }

            if self.pos >= self.text.len() {
                return None;
            }

            let byte = self.text[self.pos];
            let current = &self.states[self.state.index()];
            if let Some(next) = current.step(byte) {
                self.state = next;
                self.pos += 1;
                if !self.states[next.index()].outputs().is_empty() {
                    self.emit = Some((next, 0));
                }
            } else if self.state == StateId::ROOT {
                // This byte cannot start or continue any pattern.
                self.pos += 1;
            } else {
                // Retry the same byte from the longest viable suffix state.
                self.state = current.fail();
            }
        }
    }
}
