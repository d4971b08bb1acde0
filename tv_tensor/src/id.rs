//! Tensor identifiers.
//!
//! Ids are handed out by an explicit [`TensorIds`] counter owned by whoever
//! creates tensors, rather than by process-wide state.

use std::fmt;

/// Unique identifier of a tensor, used as a render-cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(pub(crate) u64);

impl TensorId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing id counter.
#[derive(Debug, Default)]
pub struct TensorIds {
    next: u64,
}

impl TensorIds {
    pub fn new() -> Self {
        TensorIds { next: 0 }
    }

    /// Draw the next id. Ids are never reused.
    pub fn next_id(&mut self) -> TensorId {
        let id = TensorId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}
