use crate::model::list::TaskList;

/// Derived counters for the stats bar and the celebration trigger.
/// Never stored; recomputed from the list on every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl Stats {
    pub fn of(list: &TaskList) -> Stats {
        let total = list.len();
        let completed = list.tasks().iter().filter(|t| t.completed).count();
        Stats {
            total,
            completed,
            remaining: total - completed,
        }
    }

    /// True when there is at least one task and none are left to do.
    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.remaining == 0
    }
}
