use std::collections::VecDeque;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("pop from an empty queue")]
    Empty,
}

// FIFO over state identifiers, used by every breadth-first pass over an
// automaton
#[derive(Debug, Clone, Default)]
pub struct Queue {
    nodes: VecDeque<usize>,
}

impl Queue {
    /// Creates a queue. The capacity is only a hint, pushes never fail.
    pub fn new(capacity: usize) -> Queue {
        Queue {
            nodes: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: usize) {
        self.nodes.push_back(node);
    }

    pub fn pop(&mut self) -> Result<usize, QueueError> {
        self.nodes.pop_front().ok_or(QueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
