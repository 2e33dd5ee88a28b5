// Thompson-style combinators. Every operator works on private copies of its
// operands, so combining an automaton with itself is safe and callers keep
// their inputs untouched.

use crate::fa::{StateId, Symbol, FA};

impl FA {
    /// Structural deep copy preserving every identifier and count.
    pub fn copy(&self) -> FA {
        self.clone()
    }

    /// Matches `xy` for `x` in L(a) and `y` in L(b).
    ///
    /// States of `b` are renumbered after those of `a`; each accepting state
    /// of `a` gets an epsilon edge to the start of `b`.
    pub fn concat(a: &FA, b: &FA) -> FA {
        let mut result = a.copy();
        let offset = result.append(b.copy());

        result.accept_states = b.accept_states.iter().map(|s| s + offset).collect();
        if b.state_count() > 0 {
            let b_start = b.start_state + offset;
            for &state in &a.accept_states {
                result.add_transition(state, Symbol::Epsilon, b_start);
            }
        }

        result
    }

    /// Matches L(a) ∪ L(b) through a fresh start state with epsilon edges
    /// into both operands.
    pub fn either(a: &FA, b: &FA) -> FA {
        let mut result = a.copy();
        let offset = result.append(b.copy());

        let accept_states: Vec<StateId> = a
            .accept_states
            .iter()
            .copied()
            .chain(b.accept_states.iter().map(|s| s + offset))
            .collect();
        result.accept_states = accept_states;

        let start = result.add_state();
        if a.state_count() > 0 {
            result.add_transition(start, Symbol::Epsilon, a.start_state);
        }
        if b.state_count() > 0 {
            result.add_transition(start, Symbol::Epsilon, b.start_state + offset);
        }
        result.start_state = start;

        result
    }

    /// Kleene closure. A new hub state is both start and sole accepting
    /// state; it moves into `a` and every accepting state of `a` moves back.
    pub fn star(a: &FA) -> FA {
        let mut result = a.copy();

        let hub = result.add_state();
        if a.state_count() > 0 {
            result.add_transition(hub, Symbol::Epsilon, a.start_state);
        }
        for &state in &a.accept_states {
            result.add_transition(state, Symbol::Epsilon, hub);
        }
        result.start_state = hub;
        result.accept_states = vec![hub];

        result
    }

    // moves the states of `other` in after ours, returns the id offset
    fn append(&mut self, other: FA) -> usize {
        let offset = self.nodes.len();
        self.edges.extend(
            other
                .edges
                .into_iter()
                .map(|(from, to, symbol)| (from + offset, to + offset, symbol)),
        );
        for mut node in other.nodes {
            for targets in node.transitions.values_mut() {
                for target in targets.iter_mut() {
                    *target += offset;
                }
            }
            self.nodes.push(node);
        }
        offset
    }
}
