use tracing::{debug, warn};

use crate::console::Console;
use crate::display::{Message, task_detail};
use crate::edit::edit_interactive;
use crate::error::Result;
use crate::list::{FilteredView, position_of, replace_by_id, tasks_matching, tasks_with_status};
use crate::model::{
    Difficulty, NO_DUE_DATE, SessionConfig, Status, Task, create_empty, set_description,
    set_difficulty, set_due_date, set_name, set_status,
};
use crate::util::{is_valid_title, parse_due_date};

pub struct Screen<'a> {
    console: &'a mut dyn Console,
    config: SessionConfig,
}

impl<'a> Screen<'a> {
    pub fn new(console: &'a mut dyn Console, config: SessionConfig) -> Self {
        Self { console, config }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.console.read_line(prompt)
    }

    pub fn show(&mut self, text: &str) -> Result<()> {
        self.console.show(text)
    }

    pub fn say(&mut self, message: Message<'_>) -> Result<()> {
        let text = message.render(self.config.color);
        self.console.show(&text)
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.config.clear_screen {
            self.console.clear()
        } else {
            Ok(())
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        self.say(Message::PressEnter)?;
        self.ask("")?;
        Ok(())
    }
}

pub fn add_task(screen: &mut Screen<'_>) -> Result<Task> {
    debug!("adding task");
    let mut name = screen.ask("Enter the task title (at least 4 characters): ")?;
    while !is_valid_title(&name) {
        screen.say(Message::InvalidTitle)?;
        name = screen.ask("Enter the task title (at least 4 characters): ")?;
    }

    let description = screen.ask("Enter the task description: ")?;

    let difficulty = loop {
        let input = screen.ask("Enter the difficulty [1] Easy [2] Medium [3] Hard: ")?;
        if input.is_empty() {
            break Difficulty::default();
        }
        match input.parse::<Difficulty>() {
            Ok(difficulty) => break difficulty,
            Err(e) => screen.show(&format!("Invalid difficulty: {e}"))?,
        }
    };

    let status = loop {
        let input = screen.ask("Enter the status [1] Pending [2] In progress [3] Done: ")?;
        if input.is_empty() {
            break Status::default();
        }
        match input.parse::<Status>() {
            Ok(status) => break status,
            Err(e) => screen.show(&format!("Invalid status: {e}"))?,
        }
    };

    let input = screen.ask("When is it due? (yyyy/mm/dd): ")?;
    let due = parse_due_date(&input);
    if due == NO_DUE_DATE {
        screen.show(&format!("Invalid date, it will be saved as '{NO_DUE_DATE}'"))?;
    }

    let task = create_empty();
    let task = set_name(&task, &name);
    let task = set_description(&task, &description);
    let task = set_difficulty(&task, difficulty);
    let task = set_status(&task, status);
    Ok(set_due_date(&task, &due))
}

pub fn detail_view(screen: &mut Screen<'_>, view: &FilteredView) -> Result<Option<Task>> {
    let mut input = screen.ask("Enter a task number to see its details or '0' to go back: ")?;
    let task = loop {
        match input.trim().parse::<usize>() {
            Ok(0) => {
                screen.show("Back to the menu...")?;
                return Ok(None);
            }
            Ok(number) => {
                if let Some(task) = view.by_number(number) {
                    break task;
                }
            }
            Err(_) => {}
        }
        input = screen.ask("Invalid option, try again: ")?;
    };

    let detail = task_detail(task, screen.config().color);
    screen.show(&detail)?;

    let mut input = screen.ask("Press enter to continue or E to edit the task: ")?;
    while !matches!(input.as_str(), "" | "e" | "E") {
        screen.show("Invalid option, try again")?;
        input = screen.ask("Enter the option: ")?;
    }

    if input.is_empty() {
        screen.show("Back to the menu...")?;
        return Ok(None);
    }

    let edited = edit_interactive(screen, task)?;
    screen.show("Task edited successfully!")?;
    screen.pause()?;
    Ok(Some(edited))
}

fn reconcile(tasks: &[Task], edited: Option<Task>) -> Vec<Task> {
    let Some(edited) = edited else {
        return tasks.to_vec();
    };
    if position_of(tasks, edited.id).is_none() {
        warn!(id = %edited.id, "edited task is not in the list, dropping edit");
        return tasks.to_vec();
    }
    debug!(id = %edited.id, "replacing edited task");
    replace_by_id(tasks, &edited)
}

pub fn view_tasks(screen: &mut Screen<'_>, tasks: &[Task]) -> Result<Vec<Task>> {
    debug!(count = tasks.len(), "viewing tasks");
    screen.clear()?;
    screen.say(Message::ViewMenu)?;

    if tasks.is_empty() {
        screen.say(Message::NoTasks)?;
        screen.pause()?;
        return Ok(tasks.to_vec());
    }

    let input = screen.ask("Enter an option: ")?;
    match input.trim() {
        "1" => {
            screen.say(Message::TaskList(tasks))?;
            let edited = detail_view(screen, &FilteredView::all(tasks))?;
            Ok(reconcile(tasks, edited))
        }
        "2" => view_by_status(screen, tasks, Status::Pending),
        "3" => view_by_status(screen, tasks, Status::InProgress),
        "4" => view_by_status(screen, tasks, Status::Done),
        "0" => Ok(tasks.to_vec()),
        _ => {
            screen.say(Message::InvalidOption)?;
            screen.pause()?;
            Ok(tasks.to_vec())
        }
    }
}

fn view_by_status(
    screen: &mut Screen<'_>,
    tasks: &[Task],
    status: Status,
) -> Result<Vec<Task>> {
    let Some(view) = tasks_with_status(tasks, status) else {
        screen.say(Message::NoTasksWithStatus)?;
        screen.pause()?;
        return Ok(tasks.to_vec());
    };

    screen.say(Message::FilteredTaskList(&view))?;
    let edited = detail_view(screen, &view)?;
    Ok(reconcile(tasks, edited))
}

pub fn search_tasks(screen: &mut Screen<'_>, tasks: &[Task]) -> Result<Vec<Task>> {
    debug!(count = tasks.len(), "searching tasks");
    screen.clear()?;

    if tasks.is_empty() {
        screen.say(Message::NoTasks)?;
        screen.pause()?;
        return Ok(tasks.to_vec());
    }

    let mut query = screen.ask("Enter the title of the task to search for: ")?;
    while query.is_empty() {
        screen.say(Message::InvalidTitle)?;
        query = screen.ask("Enter the task title (at least 1 character): ")?;
    }

    let Some(view) = tasks_matching(tasks, &query) else {
        screen.say(Message::NoTasksFound)?;
        screen.pause()?;
        return Ok(tasks.to_vec());
    };

    screen.say(Message::FilteredTaskList(&view))?;
    let edited = detail_view(screen, &view)?;
    Ok(reconcile(tasks, edited))
}
