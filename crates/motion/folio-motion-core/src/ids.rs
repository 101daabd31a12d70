//! Identifiers and a simple allocator for sinks and runs.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SinkId(pub u32);

/// Generation of a run on its sink. A pending frame callback that holds a
/// stale RunId has been superseded and must not write.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RunId(pub u32);

/// Monotonic allocator for SinkId and RunId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_sink: u32,
    next_run: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_sink(&mut self) -> SinkId {
        let id = SinkId(self.next_sink);
        self.next_sink = self.next_sink.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_run(&mut self) -> RunId {
        let id = RunId(self.next_run);
        self.next_run = self.next_run.wrapping_add(1);
        id
    }
}
