use chrono::{DateTime, Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::list::FilteredView;
use crate::model::{Difficulty, Status, Task};

const MAIN_MENU: &str = "\
            ╔═══════════════════════════════════╗
            ║     [1] View my tasks             ║
            ║     [2] Search my tasks           ║
            ║     [3] Add a task                ║
            ║     [0] Exit                      ║
            ╚═══════════════════════════════════╝";

const VIEW_MENU: &str = "\
            ╔═══════════════════════════════════╗
            ║      [1] All                      ║
            ║      [2] Pending                  ║
            ║      [3] In progress              ║
            ║      [4] Done                     ║
            ║      [0] Back                     ║
            ╚═══════════════════════════════════╝";

#[derive(Clone, Copy, Debug)]
pub enum Message<'a> {
    MainMenu,
    ViewMenu,
    NoTasks,
    InvalidTitle,
    InvalidOption,
    Farewell,
    PressEnter,
    TaskList(&'a [Task]),
    NoTasksWithStatus,
    NoTasksFound,
    /// Numbered by position in the full list, not in the view.
    FilteredTaskList(&'a FilteredView),
}

impl Message<'_> {
    pub fn render(&self, color: bool) -> String {
        match self {
            Message::MainMenu => format!(
                "{}\n\n{MAIN_MENU}",
                format_header("Welcome to your task list", color)
            ),
            Message::ViewMenu => format!(
                "{}\n\n{VIEW_MENU}",
                format_header("Which tasks do you want to see?", color)
            ),
            Message::NoTasks => "No tasks loaded".to_string(),
            Message::InvalidTitle => "Invalid or empty title, try again".to_string(),
            Message::InvalidOption => format_warning("-INVALID OPTION-", color),
            Message::Farewell => "See you next time!".to_string(),
            Message::PressEnter => "Press enter to continue".to_string(),
            Message::TaskList(tasks) => tasks
                .iter()
                .enumerate()
                .map(|(i, task)| task_line(i + 1, task))
                .collect::<Vec<_>>()
                .join("\n"),
            Message::NoTasksWithStatus => "No tasks with that status".to_string(),
            Message::NoTasksFound => "No tasks found with that name".to_string(),
            Message::FilteredTaskList(view) => view
                .tasks
                .iter()
                .zip(&view.positions)
                .map(|(task, pos)| task_line(pos + 1, task))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn task_line(position: usize, task: &Task) -> String {
    format!("Task N° [{position}]: {}", task.name)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    format_date(at.date_naive())
}

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "⭐ Easy",
        Difficulty::Medium => "⭐⭐ Medium",
        Difficulty::Hard => "⭐⭐⭐ Hard",
    }
}

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Pending => "⏳ Pending",
        Status::InProgress => "🔄 In progress",
        Status::Done => "✅ Done",
    }
}

pub fn task_detail(task: &Task, color: bool) -> String {
    [
        format!("{} {}", format_label("Title:", color), format_title(&task.name, color)),
        format!("{} {}", format_label("Description:", color), task.description),
        format!("{} {}", format_label("Status:", color), format_status(task.status, color)),
        format!(
            "{} {}",
            format_label("Difficulty:", color),
            format_difficulty(task.difficulty, color)
        ),
        format!("{} {}", format_label("Created:", color), format_timestamp(task.created_at)),
        format!("{} {}", format_label("Last edited:", color), format_timestamp(task.edited_at)),
        format!("{} {}", format_label("Due:", color), task.due_date),
    ]
    .join("\n")
}

fn format_status(status: Status, color: bool) -> String {
    let text = status_label(status);
    if !color {
        return text.to_string();
    }

    match status {
        Status::Pending => format!("{}", text.yellow()),
        Status::InProgress => format!("{}", text.cyan()),
        Status::Done => format!("{}", text.green()),
    }
}

fn format_difficulty(difficulty: Difficulty, color: bool) -> String {
    let text = difficulty_label(difficulty);
    if !color {
        return text.to_string();
    }

    match difficulty {
        Difficulty::Easy => format!("{}", text.green()),
        Difficulty::Medium => format!("{}", text.yellow()),
        Difficulty::Hard => format!("{}", text.red()),
    }
}

fn format_title(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold())
    } else {
        title.to_string()
    }
}

fn format_label(label: &str, color: bool) -> String {
    if color {
        format!("{}", label.dimmed())
    } else {
        label.to_string()
    }
}

fn format_warning(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.red())
    } else {
        text.to_string()
    }
}

fn format_header(text: &str, color: bool) -> String {
    let text = format!("== {text} ==");
    if color {
        format!("{}", text.bold())
    } else {
        text
    }
}
