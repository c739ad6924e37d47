use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::trace;

use crate::CreatorId;

use super::Matcher;

/// A state identifier - an index into the automaton's state arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct StateId(u32);

impl StateId {
    pub(crate) const ROOT: StateId = StateId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One automaton state.
///
/// Children are kept sorted by byte for binary search. `outputs` holds the
/// creator ids this state signals, own outputs first and inherited ones
/// appended during failure-link resolution; the order is fixed at compile
/// time and drives emission order during scans.
#[derive(Clone, Default)]
pub(crate) struct State {
    children: SmallVec<[(u8, StateId); 4]>,
    outputs: Vec<CreatorId>,
    fail: StateId,
}

impl State {
    #[inline]
    pub(crate) fn step(
        &self,
        byte: u8,
    ) -> Option<StateId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    #[inline]
    pub(crate) fn fail(&self) -> StateId {
        self.fail
    }

    #[inline]
    pub(crate) fn outputs(&self) -> &[CreatorId] {
        &self.outputs
    }
}

/// Builds a [`Matcher`] from (pattern, creator id) pairs.
///
/// Safe for reuse after calling [`build`](Self::build); the internal trie and
/// queue are cleared so the same builder can compile an unrelated automaton.
/// Not safe for concurrent mutation - this is a write-once compile-time
/// object.
pub struct AutomatonBuilder {
    states: Vec<State>,
    queue: VecDeque<StateId>,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            queue: VecDeque::new(),
        }
    }

    /// Inserts one pattern, extending the trie byte by byte from the root.
    ///
    /// Patterns that are prefixes or extensions of existing ones share
    /// structure. Re-inserting an identical (pattern, id) pair is idempotent.
    pub fn add(
        &mut self,
        pattern: &[u8],
        output: CreatorId,
    ) {
        let mut current = StateId::ROOT;
        for &byte in pattern {
            current = self.ensure_child(current, byte);
        }
        append_unique(&mut self.states[current.index()].outputs, output);
    }

    pub fn add_str(
        &mut self,
        pattern: &str,
        output: CreatorId,
    ) {
        self.add(pattern.as_bytes(), output);
    }

    /// Resolves failure links over the constructed trie and returns it as an
    /// immutable [`Matcher`]. Resets the builder for reuse.
    pub fn build(&mut self) -> Matcher {
        self.link_failures();
        trace!("compiled automaton with {} states", self.states.len());

        let states = std::mem::take(&mut self.states).into_boxed_slice();
        self.reset();
        Matcher::from_states(states)
    }

    fn alloc(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        id
    }

    fn child(
        &self,
        state: StateId,
        byte: u8,
    ) -> Option<StateId> {
        self.states[state.index()].step(byte)
    }

    fn ensure_child(
        &mut self,
        parent: StateId,
        byte: u8,
    ) -> StateId {
        match self.states[parent.index()]
            .children
            .binary_search_by_key(&byte, |&(b, _)| b)
        {
            Ok(pos) => self.states[parent.index()].children[pos].1,
            Err(pos) => {
                let child = self.alloc();
                self.states[parent.index()].children.insert(pos, (byte, child));
                child
            }
        }
    }

    /// Breadth-first failure-link resolution.
    ///
    /// Parents are processed before children, so a state's failure target is
    /// fully resolved - outputs included - before any of its children are.
    /// Unioning the failure target's outputs into each child therefore
    /// accumulates the entire chain of suffix matches in one step.
    fn link_failures(&mut self) {
        self.states[StateId::ROOT.index()].fail = StateId::ROOT;

        let root_children: SmallVec<[StateId; 8]> = self.states[StateId::ROOT.index()]
            .children
            .iter()
            .map(|&(_, child)| child)
            .collect();
        for child in root_children {
            self.states[child.index()].fail = StateId::ROOT;
            self.queue.push_back(child);
        }

        while let Some(id) = self.queue.pop_front() {
            let transitions = self.states[id.index()].children.clone();
            for (byte, child) in transitions {
                self.queue.push_back(child);

                let mut fail = self.states[id.index()].fail;
                while self.child(fail, byte).is_none() && fail != StateId::ROOT {
                    fail = self.states[fail.index()].fail;
                }
                let target = self.child(fail, byte).unwrap_or(StateId::ROOT);
                self.states[child.index()].fail = target;

                if !self.states[target.index()].outputs.is_empty() {
                    let mut outputs = std::mem::take(&mut self.states[child.index()].outputs);
                    for pos in 0..self.states[target.index()].outputs.len() {
                        append_unique(&mut outputs, self.states[target.index()].outputs[pos]);
                    }
                    self.states[child.index()].outputs = outputs;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.states.clear();
        self.states.push(State::default());
        self.queue.clear();
    }
}

fn append_unique(
    outputs: &mut Vec<CreatorId>,
    output: CreatorId,
) {
    if !outputs.contains(&output) {
        outputs.push(output);
    }
}
