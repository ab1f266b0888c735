use tracing::debug;

use crate::error::Result;
use crate::flow::Screen;
use crate::model::{
    Difficulty, NO_DUE_DATE, Status, Task, set_description, set_difficulty, set_due_date,
    set_status, touch_edited,
};
use crate::util::parse_due_date;

#[derive(Debug, PartialEq, Eq)]
pub enum FieldInput {
    /// Plain enter.
    Keep,
    /// A single space.
    Reset,
    Value(String),
}

impl From<String> for FieldInput {
    fn from(input: String) -> Self {
        match input.as_str() {
            "" => FieldInput::Keep,
            " " => FieldInput::Reset,
            _ => FieldInput::Value(input),
        }
    }
}

pub fn edit_interactive(screen: &mut Screen<'_>, task: &Task) -> Result<Task> {
    debug!(id = %task.id, "editing task");
    screen.show(
        "Enter a single space to reset a field, enter to keep it, or a new value to change it:",
    )?;

    let mut edited = task.clone();

    match FieldInput::from(screen.ask("New description: ")?) {
        FieldInput::Keep => {}
        FieldInput::Reset => edited = set_description(&edited, ""),
        FieldInput::Value(description) => edited = set_description(&edited, &description),
    }

    loop {
        let input = screen.ask("New difficulty [1] Easy [2] Medium [3] Hard: ")?;
        match FieldInput::from(input) {
            FieldInput::Keep => break,
            FieldInput::Reset => {
                edited = set_difficulty(&edited, Difficulty::default());
                break;
            }
            FieldInput::Value(value) => match value.parse::<Difficulty>() {
                Ok(difficulty) => {
                    edited = set_difficulty(&edited, difficulty);
                    break;
                }
                Err(e) => screen.show(&format!("Invalid difficulty: {e}"))?,
            },
        }
    }

    loop {
        let input = screen.ask("New status [1] Pending [2] In progress [3] Done: ")?;
        match FieldInput::from(input) {
            FieldInput::Keep => break,
            FieldInput::Reset => {
                edited = set_status(&edited, Status::default());
                break;
            }
            FieldInput::Value(value) => match value.parse::<Status>() {
                Ok(status) => {
                    edited = set_status(&edited, status);
                    break;
                }
                Err(e) => screen.show(&format!("Invalid status: {e}"))?,
            },
        }
    }

    match FieldInput::from(screen.ask("New due date (yyyy/mm/dd): ")?) {
        FieldInput::Keep => {}
        FieldInput::Reset => edited = set_due_date(&edited, NO_DUE_DATE),
        FieldInput::Value(input) => {
            let due = parse_due_date(&input);
            if due == NO_DUE_DATE {
                screen.show(&format!("Invalid date, it will be saved as '{NO_DUE_DATE}'"))?;
            }
            edited = set_due_date(&edited, &due);
        }
    }

    Ok(touch_edited(&edited))
}
