use chrono::{DateTime, Local};
use std::str::FromStr;
use uuid::Uuid;

pub const NO_DESCRIPTION: &str = "no description";
pub const NO_DUE_DATE: &str = "no data";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub color: bool,
    pub clear_screen: bool,
}

impl SessionConfig {
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Difficulty::Easy),
            "2" => Ok(Difficulty::Medium),
            "3" => Ok(Difficulty::Hard),
            _ => Err("expected 1|2|3".to_string()),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Status::Pending),
            "2" => Ok(Status::InProgress),
            "3" => Ok(Status::Done),
            _ => Err("expected 1|2|3".to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub status: Status,
    pub created_at: DateTime<Local>,
    pub edited_at: DateTime<Local>,
    /// `dd/mm/yyyy` or [`NO_DUE_DATE`].
    pub due_date: String,
}

// Every update below returns a new task; the caller decides where it goes.

pub fn create_empty() -> Task {
    let now = Local::now();
    Task {
        id: Uuid::new_v4(),
        name: String::new(),
        description: NO_DESCRIPTION.to_string(),
        difficulty: Difficulty::default(),
        status: Status::default(),
        created_at: now,
        edited_at: now,
        due_date: NO_DUE_DATE.to_string(),
    }
}

pub fn set_name(task: &Task, name: &str) -> Task {
    Task {
        name: name.to_string(),
        ..task.clone()
    }
}

/// An empty description is stored as [`NO_DESCRIPTION`].
pub fn set_description(task: &Task, description: &str) -> Task {
    let description = if description.is_empty() {
        NO_DESCRIPTION
    } else {
        description
    };
    Task {
        description: description.to_string(),
        ..task.clone()
    }
}

pub fn set_difficulty(task: &Task, difficulty: Difficulty) -> Task {
    Task {
        difficulty,
        ..task.clone()
    }
}

pub fn set_status(task: &Task, status: Status) -> Task {
    Task {
        status,
        ..task.clone()
    }
}

pub fn set_due_date(task: &Task, due_date: &str) -> Task {
    Task {
        due_date: due_date.to_string(),
        ..task.clone()
    }
}

// Never moves edited_at backwards, even if the wall clock does.
pub fn touch_edited(task: &Task) -> Task {
    let now = Local::now().max(task.edited_at).max(task.created_at);
    Task {
        edited_at: now,
        ..task.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_empty_uses_defaults() {
        let task = create_empty();
        assert_eq!(task.difficulty, Difficulty::Easy);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.due_date, NO_DUE_DATE);
        assert_eq!(task.description, NO_DESCRIPTION);
        assert_eq!(task.created_at, task.edited_at);
    }

    #[test]
    fn create_empty_assigns_fresh_ids() {
        assert_ne!(create_empty().id, create_empty().id);
    }

    #[test]
    fn updates_change_one_field_only() {
        let task = create_empty();

        let named = set_name(&task, "Laundry");
        assert_eq!(named.name, "Laundry");
        assert_eq!(Task { name: String::new(), ..named.clone() }, task);

        let hard = set_difficulty(&named, Difficulty::Hard);
        assert_eq!(hard.difficulty, Difficulty::Hard);
        assert_eq!(Task { difficulty: Difficulty::Easy, ..hard }, named);

        let done = set_status(&named, Status::Done);
        assert_eq!(done.status, Status::Done);
        assert_eq!(Task { status: Status::Pending, ..done }, named);

        let due = set_due_date(&named, "01/06/2025");
        assert_eq!(due.due_date, "01/06/2025");
        assert_eq!(named.due_date, NO_DUE_DATE);
    }

    #[test]
    fn empty_description_becomes_sentinel() {
        let task = set_description(&create_empty(), "buy milk");
        assert_eq!(task.description, "buy milk");
        assert_eq!(set_description(&task, "").description, NO_DESCRIPTION);
    }

    #[test]
    fn touch_edited_never_goes_backwards() {
        let task = create_empty();
        let once = touch_edited(&task);
        let twice = touch_edited(&once);
        assert!(once.edited_at >= task.created_at);
        assert!(twice.edited_at >= once.edited_at);
        assert_eq!(twice.id, task.id);
    }

    #[test]
    fn menu_digits_parse() {
        assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("3".parse::<Status>(), Ok(Status::Done));
        assert!("4".parse::<Status>().is_err());
        assert!("".parse::<Difficulty>().is_err());
        assert!("x".parse::<Difficulty>().is_err());
    }
}
