use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::fa::{StateId, Symbol, FA};

impl FA {
    /// The automaton as a petgraph graph. Node `i` holds the label of state
    /// `i + 1`, edges carry their symbol.
    pub fn to_graph(&self) -> DiGraph<String, Symbol> {
        let mut graph: DiGraph<String, Symbol> =
            DiGraph::with_capacity(self.state_count(), self.transition_count());
        let indices: Vec<NodeIndex> = self
            .states()
            .map(|state| graph.add_node(self.state_label(state)))
            .collect();

        for (from, to, symbol) in self.edges() {
            graph.add_edge(indices[from - 1], indices[to - 1], symbol);
        }

        graph
    }

    /// Graphviz source for [`FA::to_graph`].
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.to_graph(), &[]))
    }

    fn state_label(&self, state: StateId) -> String {
        let mut label = state.to_string();
        if state == self.start_state() {
            label.push_str(" start");
        }
        if self.is_accepting(state) {
            label.push_str(" accept");
        }
        label
    }
}
