use chrono::Utc;

/// Opaque task identifier, unique for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Stored as typed; admission guarantees it is non-empty after trimming
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}

/// Hands out strictly increasing ids seeded from the epoch-millisecond clock.
///
/// Seeding from the wall clock keeps ids meaningful as creation timestamps,
/// while the high-water mark guarantees uniqueness for two adds inside the
/// same millisecond or across a clock step backwards.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator { last: 0 }
    }

    pub fn next(&mut self) -> TaskId {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.last = now_ms.max(self.last + 1);
        TaskId(self.last)
    }
}
