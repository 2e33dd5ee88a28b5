use bit_set::BitSet;
use lfa_util::Queue;

use crate::fa::{StateId, Symbol, FA};

impl FA {
    /// Minimizes a DFA in place.
    ///
    /// States that are unreachable from the start or cannot reach an
    /// accepting state are dropped, equivalent states are merged with Moore's
    /// algorithm, and the survivors are renumbered densely in their original
    /// order. A DFA with an empty language comes out as a single
    /// non-accepting state.
    pub fn minimize(&mut self) {
        assert!(self.is_deterministic(), "minimization requires a DFA");
        if self.nodes.is_empty() {
            return;
        }

        let pruned = self.unreachable_or_dead();
        if pruned.contains(self.start_state) {
            let mut empty = FA::new();
            let state = empty.add_state();
            empty.set_start_state(state);
            *self = empty;
            return;
        }

        let representative = self.merge_equivalent(&pruned);
        self.compact(&pruned, &representative);
    }

    fn unreachable_or_dead(&self) -> BitSet {
        let n = self.nodes.len();
        let mut reached = BitSet::with_capacity(n + 1);
        let mut queue = Queue::new(n);
        reached.insert(self.start_state);
        queue.push(self.start_state);

        while let Ok(state) = queue.pop() {
            for targets in self.node(state).transitions.values() {
                for &next in targets {
                    if reached.insert(next) {
                        queue.push(next);
                    }
                }
            }
        }

        self.states()
            .filter(|&state| !reached.contains(state) || self.cannot_reach_any_accepting_state(state))
            .collect()
    }

    // Every surviving state starts as its own partition. Two partitions fold
    // together (larger representative into smaller) when they agree on
    // finality and on the partition reached by every symbol; the scan
    // restarts after each fold until nothing merges.
    fn merge_equivalent(&self, pruned: &BitSet) -> Vec<StateId> {
        let n = self.nodes.len();
        let accepting: BitSet = self.accept_states.iter().copied().collect();
        let mut representative: Vec<StateId> = (0..=n).collect();

        'scan: loop {
            let live: Vec<StateId> = self
                .states()
                .filter(|&state| !pruned.contains(state) && representative[state] == state)
                .collect();

            // successors have to be compared by partition, not by raw target
            let signatures: Vec<Vec<(Symbol, StateId)>> = live
                .iter()
                .map(|&state| self.signature(state, pruned, &representative))
                .collect();

            for (a, &i) in live.iter().enumerate() {
                for (b, &j) in live.iter().enumerate().skip(a + 1) {
                    if accepting.contains(i) != accepting.contains(j) {
                        continue;
                    }
                    if signatures[a] == signatures[b] {
                        representative[j] = i;
                        continue 'scan;
                    }
                }
            }

            break;
        }

        representative
    }

    fn signature(&self, state: StateId, pruned: &BitSet, representative: &[StateId]) -> Vec<(Symbol, StateId)> {
        self.transitions(state)
            .flat_map(|(symbol, targets)| targets.iter().map(move |&target| (symbol, target)))
            .filter(|&(_, target)| !pruned.contains(target))
            .map(|(symbol, target)| (symbol, find(representative, target)))
            .collect()
    }

    fn compact(&mut self, pruned: &BitSet, representative: &[StateId]) {
        let n = self.nodes.len();
        let mut mapping: Vec<StateId> = vec![0; n + 1];
        let mut minimized = FA::new();
        for state in 1..=n {
            if !pruned.contains(state) && representative[state] == state {
                mapping[state] = minimized.add_state();
            }
        }

        for (i, node) in self.nodes.iter().enumerate() {
            let state = mapping[i + 1];
            if state == 0 {
                continue;
            }
            for (symbol, targets) in &node.transitions {
                for &target in targets.iter().filter(|&&t| !pruned.contains(t)) {
                    minimized.add_transition(state, *symbol, mapping[find(representative, target)]);
                }
            }
        }

        minimized.set_start_state(mapping[find(representative, self.start_state)]);
        for &state in self.accept_states.iter().filter(|&&s| !pruned.contains(s)) {
            minimized.add_accept_state(mapping[find(representative, state)]);
        }
        minimized.accept_states.sort_unstable();

        *self = minimized;
    }
}

// representatives only ever point at smaller ids, so the chain ends
fn find(representative: &[StateId], mut state: StateId) -> StateId {
    while representative[state] != state {
        state = representative[state];
    }
    state
}
