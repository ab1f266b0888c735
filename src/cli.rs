use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskmenu", version, about = "Interactive in-memory task list")]
pub struct Cli {
    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Never clear the screen between menus
    #[arg(long = "no-clear")]
    pub no_clear: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Without a subcommand the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(aliases = ["comp", "completion"])]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_run_starts_session() {
        let cli = Cli::parse_from(["taskmenu"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
        assert!(!cli.no_clear);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn flags_and_verbosity() {
        let cli = Cli::parse_from(["taskmenu", "--no-color", "--no-clear", "-vv"]);
        assert!(cli.no_color);
        assert!(cli.no_clear);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn completions_subcommand() {
        let cli = Cli::parse_from(["taskmenu", "comp", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Bash
            })
        ));
    }
}
