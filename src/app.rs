use clap::{CommandFactory, Parser};
use std::io::IsTerminal;

use crate::cli::{Cli, Commands};
use crate::console::{Console, Terminal};
use crate::display::Message;
use crate::error::{AppError, Result};
use crate::flow::{Screen, add_task, search_tasks, view_tasks};
use crate::list::append;
use crate::model::{SessionConfig, Task};
use clap_complete::generate;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn run() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = resolve_config(&cli);
    let mut console = Terminal::stdio();
    if let Err(e) = run_session(&mut console, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn resolve_config(cli: &Cli) -> SessionConfig {
    let defaults = SessionConfig::default();
    let tty = std::io::stdout().is_terminal();
    SessionConfig {
        color: defaults.color && !cli.no_color && tty,
        clear_screen: defaults.clear_screen && !cli.no_clear && tty,
    }
}

fn install_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

enum Step {
    Continue(Vec<Task>),
    Exit,
}

// Ends on `0` or when input runs out.
pub fn run_session(console: &mut dyn Console, config: SessionConfig) -> Result<Vec<Task>> {
    let mut screen = Screen::new(console, config);
    let mut tasks: Vec<Task> = Vec::new();

    loop {
        match main_menu(&mut screen, &tasks) {
            Ok(Step::Continue(next)) => tasks = next,
            Ok(Step::Exit) => break,
            Err(AppError::InputClosed) => {
                debug!("input closed, ending session");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    info!(tasks = tasks.len(), "session ended");
    Ok(tasks)
}

fn main_menu(screen: &mut Screen<'_>, tasks: &[Task]) -> Result<Step> {
    screen.clear()?;
    screen.say(Message::MainMenu)?;

    let choice = screen.ask("Enter an option: ")?;
    match choice.trim() {
        "0" => {
            screen.say(Message::Farewell)?;
            Ok(Step::Exit)
        }
        "1" => view_tasks(screen, tasks).map(Step::Continue),
        "2" => search_tasks(screen, tasks).map(Step::Continue),
        "3" => {
            let task = add_task(screen)?;
            debug!(id = %task.id, name = %task.name, "task added");
            Ok(Step::Continue(append(tasks, task)))
        }
        _ => {
            screen.say(Message::InvalidOption)?;
            screen.pause()?;
            Ok(Step::Continue(tasks.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_on_zero() {
        let mut console = ScriptedConsole::new(["0", "3"]);
        let tasks = run_session(&mut console, SessionConfig::plain()).unwrap();
        assert!(tasks.is_empty());
        assert_eq!(console.remaining(), 1);
        assert!(console.output().ends_with("See you next time!"));
    }

    #[test]
    fn invalid_options_return_to_menu() {
        let mut console = ScriptedConsole::new(["7", "", "abc", "", "0"]);
        run_session(&mut console, SessionConfig::plain()).unwrap();
        assert_eq!(console.output().matches("-INVALID OPTION-").count(), 2);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn closed_input_keeps_tasks() {
        // stops in the middle of the second add
        let mut console = ScriptedConsole::new(["3", "Groceries", "", "", "", "", "3", "Lau"]);
        let tasks = run_session(&mut console, SessionConfig::plain()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Groceries");
    }

    #[test]
    fn clears_before_each_main_menu_when_enabled() {
        let mut console = ScriptedConsole::new(["9", "", "0"]);
        let config = SessionConfig {
            color: false,
            clear_screen: true,
        };
        run_session(&mut console, config).unwrap();
        assert_eq!(console.clears, 2);
    }
}
