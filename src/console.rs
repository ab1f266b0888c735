use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{AppError, Result};
use crate::util::strip_newline;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub trait Console {
    /// The line terminator is stripped, nothing else.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn show(&mut self, text: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(strip_newline(&line).to_string())
    }

    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        self.output.flush()?;
        Ok(())
    }
}

/// Running past the end of the script behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub shown: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn output(&self) -> String {
        self.shown.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(AppError::InputClosed)
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn terminal_keeps_lone_space() {
        let mut out = Vec::new();
        let mut console = Terminal::new(" \nabc\r\n".as_bytes(), &mut out);
        assert_eq!(console.read_line("> ").unwrap(), " ");
        assert_eq!(console.read_line("> ").unwrap(), "abc");
        assert!(matches!(console.read_line("> "), Err(AppError::InputClosed)));
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn terminal_show_and_clear() {
        let mut out = Vec::new();
        let mut console = Terminal::new("".as_bytes(), &mut out);
        console.clear().unwrap();
        console.show("hello").unwrap();
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{CLEAR_SCREEN}hello\n"));
    }

    #[test]
    fn scripted_console_records_and_runs_out() {
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(console.read_line("choice: ").unwrap(), "1");
        assert!(matches!(console.read_line("again: "), Err(AppError::InputClosed)));
        console.show("done").unwrap();
        assert_eq!(console.prompts, vec!["choice: ", "again: "]);
        assert_eq!(console.output(), "done");
        assert_eq!(console.remaining(), 0);
    }
}
