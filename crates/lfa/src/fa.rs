use std::collections::BTreeMap;
use std::fmt;

use bit_set::BitSet;
use lfa_util::Queue;

/// Dense state identifier in `[1, state_count]`. 0 is never a valid state.
pub type StateId = usize;

/// Character used for epsilon transitions in the text format.
pub const EPSILON: char = 'λ';

// Epsilon orders after every literal, so walks over a state's moves see the
// spontaneous ones last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

impl Symbol {
    pub fn is_epsilon(self) -> bool {
        self == Symbol::Epsilon
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Symbol {
        if c == EPSILON {
            Symbol::Epsilon
        } else {
            Symbol::Char(c)
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::Epsilon => write!(f, "{}", EPSILON),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FANode {
    pub(crate) transitions: BTreeMap<Symbol, Vec<StateId>>,
}

/// A finite automaton over `char` symbols, used both as an NFA (epsilon moves,
/// several targets per symbol) and as a DFA.
///
/// States live in an arena: state `id` is stored at `nodes[id - 1]`, so the
/// state count is the arena length. Next to the per-state maps the automaton
/// keeps every (source, target, symbol) triple in the order it was added,
/// which is the order the text form writes them back in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FA {
    pub(crate) nodes: Vec<FANode>,
    pub(crate) edges: Vec<(StateId, StateId, Symbol)>,
    pub(crate) start_state: StateId,
    pub(crate) accept_states: Vec<StateId>,
}

impl FA {
    /// An automaton with zero states. It accepts nothing.
    pub fn new() -> FA {
        FA::default()
    }

    /// The automaton accepting only the empty word: one state, both start and
    /// accepting.
    pub fn empty_word() -> FA {
        let mut fa = FA::new();
        let state = fa.add_state();
        fa.set_start_state(state);
        fa.add_accept_state(state);
        fa
    }

    pub fn add_state(&mut self) -> StateId {
        self.nodes.push(FANode::default());
        self.nodes.len()
    }

    pub fn add_transition(&mut self, from: StateId, symbol: impl Into<Symbol>, to: StateId) {
        let symbol = symbol.into();
        self.assert_state(to);
        self.node_mut(from)
            .transitions
            .entry(symbol)
            .or_default()
            .push(to);
        self.edges.push((from, to, symbol));
    }

    pub fn set_start_state(&mut self, state: StateId) {
        self.assert_state(state);
        self.start_state = state;
    }

    pub fn add_accept_state(&mut self, state: StateId) {
        self.assert_state(state);
        if !self.accept_states.contains(&state) {
            self.accept_states.push(state);
        }
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn transition_count(&self) -> usize {
        self.edges.len()
    }

    /// The start state, or 0 if the automaton has no states.
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn accept_states(&self) -> &[StateId] {
        &self.accept_states
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> {
        1..=self.nodes.len()
    }

    pub fn targets(&self, state: StateId, symbol: impl Into<Symbol>) -> &[StateId] {
        self.node(state)
            .transitions
            .get(&symbol.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn transitions(&self, state: StateId) -> impl Iterator<Item = (Symbol, &[StateId])> + '_ {
        self.node(state)
            .transitions
            .iter()
            .map(|(symbol, targets)| (*symbol, targets.as_slice()))
    }

    /// Every (source, target, symbol) triple in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (StateId, StateId, Symbol)> + '_ {
        self.edges.iter().copied()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accept_states.contains(&state)
    }

    /// True iff no word leads from `state` into an accepting state.
    pub fn cannot_reach_any_accepting_state(&self, state: StateId) -> bool {
        if self.is_accepting(state) {
            return false;
        }
        if self.node(state).transitions.is_empty() {
            return true;
        }

        let mut visited = BitSet::with_capacity(self.nodes.len() + 1);
        let mut queue = Queue::new(self.nodes.len());
        visited.insert(state);
        queue.push(state);

        while let Ok(current) = queue.pop() {
            for targets in self.node(current).transitions.values() {
                for &next in targets {
                    if visited.contains(next) {
                        continue;
                    }
                    if self.is_accepting(next) {
                        return false;
                    }
                    visited.insert(next);
                    queue.push(next);
                }
            }
        }

        true
    }

    /// No epsilon moves and at most one target per (state, symbol).
    pub fn is_deterministic(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.transitions
                .iter()
                .all(|(symbol, targets)| !symbol.is_epsilon() && targets.len() == 1)
        })
    }

    /// Runs `word` through the automaton. Only defined for deterministic
    /// automata; panics otherwise.
    pub fn check(&self, word: &str) -> bool {
        assert!(
            self.is_deterministic(),
            "membership check requires a DFA, convert with `to_dfa` first"
        );
        if self.nodes.is_empty() {
            return false;
        }

        let mut state = self.start_state;
        for c in word.chars() {
            match self.targets(state, c).first() {
                Some(&next) => state = next,
                None => return false,
            }
        }

        self.is_accepting(state)
    }

    pub(crate) fn node(&self, state: StateId) -> &FANode {
        self.assert_state(state);
        &self.nodes[state - 1]
    }

    pub(crate) fn node_mut(&mut self, state: StateId) -> &mut FANode {
        self.assert_state(state);
        &mut self.nodes[state - 1]
    }

    fn assert_state(&self, state: StateId) {
        assert!(
            (1..=self.nodes.len()).contains(&state),
            "state {} out of range [1, {}]",
            state,
            self.nodes.len()
        );
    }
}
