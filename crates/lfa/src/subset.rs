use std::collections::{BTreeMap, HashMap};

use bit_set::BitSet;
use lfa_util::Queue;

use crate::fa::{FANode, StateId, Symbol, FA};

impl FA {
    /// Converts an NFA into an equivalent DFA using subset construction.
    ///
    /// Works on a copy, `self` is left as is. Every DFA state is a set of NFA
    /// states; they are numbered in breadth-first discovery order starting
    /// with the start state at 1. The number of reachable sets is bounded by
    /// 2^n for an NFA of n states, which is fine for the small patterns this
    /// crate targets but is not optimized away.
    pub fn to_dfa(&self) -> FA {
        let mut nfa = self.copy();
        nfa.saturate_epsilon();
        nfa.powerset()
    }

    /// Copies the non-epsilon moves and the finality of every state in the
    /// epsilon closure of a state onto that state, then drops all epsilon
    /// edges.
    pub fn saturate_epsilon(&mut self) {
        let original: Vec<FANode> = self.nodes.clone();
        let accepting: BitSet = self.accept_states.iter().copied().collect();

        for origin in 1..=original.len() {
            let closure = epsilon_closure(&original, origin);
            for reached in closure.iter().filter(|&s| s != origin) {
                if accepting.contains(reached) {
                    self.add_accept_state(origin);
                }

                for (symbol, targets) in &original[reached - 1].transitions {
                    if symbol.is_epsilon() {
                        continue;
                    }
                    for &target in targets {
                        if !self.targets(origin, *symbol).contains(&target) {
                            self.add_transition(origin, *symbol, target);
                        }
                    }
                }
            }
        }

        for node in &mut self.nodes {
            node.transitions.remove(&Symbol::Epsilon);
        }
        self.edges.retain(|&(_, _, symbol)| !symbol.is_epsilon());
    }

    // breadth-first over sets of states; expects no epsilon edges left
    fn powerset(&self) -> FA {
        let mut dfa = FA::new();
        if self.nodes.is_empty() {
            return dfa;
        }

        let capacity = self.nodes.len() + 1;
        let accepting: BitSet = self.accept_states.iter().copied().collect();

        // dfa state id - 1 -> set of nfa states
        let mut subsets: Vec<BitSet> = Vec::new();
        let mut ids: HashMap<BitSet, StateId> = HashMap::new();
        let mut queue = Queue::new(capacity);

        let mut initial = BitSet::with_capacity(capacity);
        initial.insert(self.start_state);
        let start = dfa.add_state();
        dfa.set_start_state(start);
        ids.insert(initial.clone(), start);
        subsets.push(initial);
        queue.push(start);

        while let Ok(current) = queue.pop() {
            let subset = subsets[current - 1].clone();
            if !subset.is_disjoint(&accepting) {
                dfa.add_accept_state(current);
            }

            let mut moves: BTreeMap<Symbol, BitSet> = BTreeMap::new();
            for state in subset.iter() {
                for (symbol, targets) in &self.node(state).transitions {
                    moves
                        .entry(*symbol)
                        .or_insert_with(|| BitSet::with_capacity(capacity))
                        .extend(targets.iter().copied());
                }
            }

            for (symbol, next) in moves {
                let target = match ids.get(&next) {
                    Some(&id) => id,
                    None => {
                        let id = dfa.add_state();
                        ids.insert(next.clone(), id);
                        subsets.push(next);
                        queue.push(id);
                        id
                    }
                };
                dfa.add_transition(current, symbol, target);
            }
        }

        dfa
    }
}

fn epsilon_closure(nodes: &[FANode], state: StateId) -> BitSet {
    let mut closure = BitSet::with_capacity(nodes.len() + 1);
    let mut queue = Queue::new(nodes.len());
    closure.insert(state);
    queue.push(state);

    while let Ok(current) = queue.pop() {
        if let Some(targets) = nodes[current - 1].transitions.get(&Symbol::Epsilon) {
            for &next in targets {
                if closure.insert(next) {
                    queue.push(next);
                }
            }
        }
    }

    closure
}
