use crate::model::task::{IdAllocator, Task, TaskId};

/// The in-memory task store. Insertion-ordered, session-scoped, never
/// persisted. All operations are total: bad input is a silent no-op and the
/// return value only says whether anything changed.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Append a new incomplete task. Text that is empty after trimming is
    /// rejected and the store is left untouched.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.ids.next();
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Flip the completed flag on the matching task. Unknown ids are a no-op.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task, keeping the order of the rest. Unknown ids
    /// are a no-op.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
