use uuid::Uuid;

use crate::model::{Status, Task};

/// Tasks picked out of the full list, each with its 0-based position in that list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredView {
    pub tasks: Vec<Task>,
    pub positions: Vec<usize>,
}

impl FilteredView {
    pub fn all(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.to_vec(),
            positions: (0..tasks.len()).collect(),
        }
    }

    /// Look a task up by the 1-based number it is listed under.
    pub fn by_number(&self, number: usize) -> Option<&Task> {
        let i = self.positions.iter().position(|pos| pos + 1 == number)?;
        self.tasks.get(i)
    }

    fn from_matches(all: &[Task], matches: Vec<Task>) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }
        let positions = matches
            .iter()
            .filter_map(|task| position_of(all, task.id))
            .collect();
        Some(Self {
            tasks: matches,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

pub fn append(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

pub fn filter_by_status(tasks: &[Task], status: Status) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == status)
        .cloned()
        .collect()
}

pub fn search_by_name(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn replace_by_id(tasks: &[Task], edited: &Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == edited.id {
                edited.clone()
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn position_of(tasks: &[Task], id: Uuid) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

/// `None` when no task has `status`.
pub fn tasks_with_status(tasks: &[Task], status: Status) -> Option<FilteredView> {
    FilteredView::from_matches(tasks, filter_by_status(tasks, status))
}

pub fn tasks_matching(tasks: &[Task], query: &str) -> Option<FilteredView> {
    FilteredView::from_matches(tasks, search_by_name(tasks, query))
}
