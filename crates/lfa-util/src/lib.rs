mod queue;

pub use queue::{Queue, QueueError};
