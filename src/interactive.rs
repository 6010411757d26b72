//! The interactive mode: a read-eval-print loop over the same commands as the command line.
//!
//! A bad field or a failed command only aborts that command; the loop keeps going until `quit`,
//! `exit`, or the end of input.

use crate::args::{AddArgs, DeleteArgs, ListArgs, MonthlyArgs};
use crate::commands::{self, Out};
use crate::validate::{validate_amount, validate_date};
use crate::{Config, Result};
use chrono::Local;
use serde::Serialize;
use std::fmt::Debug;
use std::io::{self, BufRead, Write};
use tracing::debug;

const BANNER: &str = "Budget Tracker - Interactive Mode\nType 'help' for commands. 'quit' to exit.\n";

const HELP: &str = "
Commands:
  add              Add an expense
  list [N]         List all expenses (or last N)
  summary          Show total by category
  monthly YYYY-MM  Show expenses for a month
  categories       Show available categories
  delete N         Delete the N-th expense (from list order)
  quit             Exit
";

/// Runs the interactive loop, reading commands from `input` and writing to `output`.
///
/// Only I/O errors on `input` or `output` end the loop early.
pub fn run(config: &Config, input: impl BufRead, output: impl Write) -> io::Result<()> {
    Session {
        config,
        input,
        output,
    }
    .run()
}

/// One answer read by [`Session::prompt`].
enum Input {
    /// A trimmed line of text.
    Line(String),
    /// A line that is not valid UTF-8. The error has already been shown.
    Invalid,
    /// The end of input.
    End,
}

struct Session<'a, R, W> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<R, W> Session<'_, R, W>
where
    R: BufRead,
    W: Write,
{
    fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            let line = match self.prompt("> ")? {
                Input::Line(line) => line.to_lowercase(),
                Input::Invalid => continue,
                Input::End => break,
            };
            debug!("Interactive command: {line}");
            let parts = shlex::split(&line)
                .unwrap_or_else(|| line.split_whitespace().map(String::from).collect());
            let Some((command, rest)) = parts.split_first() else {
                continue;
            };
            let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

            match (command.as_str(), rest.as_slice()) {
                ("quit" | "exit", _) => break,
                ("help" | "?", _) => write!(self.output, "{HELP}")?,
                ("add", _) => self.add()?,
                ("list", [limit]) => {
                    let result = commands::list(self.config, &ListArgs::from_arg(Some(*limit)));
                    self.report(result)?
                }
                ("list", _) => {
                    let result = commands::list(self.config, &ListArgs::default());
                    self.report(result)?
                }
                ("summary", []) => {
                    let result = commands::summary(self.config);
                    self.report(result)?
                }
                ("monthly", [month]) => {
                    let result = commands::monthly(self.config, &MonthlyArgs::new(*month));
                    self.report(result)?
                }
                ("monthly", _) => writeln!(self.output, "Usage: monthly YYYY-MM")?,
                ("categories", []) => {
                    let result = commands::categories(self.config);
                    self.report(result)?
                }
                ("delete", [position]) if is_digits(position) => {
                    let result = commands::delete(self.config, &DeleteArgs::new(*position));
                    self.report(result)?
                }
                ("delete", _) => writeln!(self.output, "Usage: delete N")?,
                _ => writeln!(
                    self.output,
                    "Unknown command. Type 'help' for a list of commands."
                )?,
            }
        }
        Ok(())
    }

    /// Prompts for each field of a new expense. A bad date, amount or line aborts the command.
    fn add(&mut self) -> io::Result<()> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let Input::Line(date) = self.prompt(&format!("Date (YYYY-MM-DD) [{today}]: "))? else {
            return Ok(());
        };
        let date = if date.is_empty() { today } else { date };
        if let Err(e) = validate_date(&date) {
            return writeln!(self.output, "Error: {e}");
        }

        let Input::Line(description) = self.prompt("Description: ")? else {
            return Ok(());
        };
        let Input::Line(category) = self.prompt("Category (or new): ")? else {
            return Ok(());
        };
        let Input::Line(amount) = self.prompt("Amount (e.g., 12.50): ")? else {
            return Ok(());
        };
        if let Err(e) = validate_amount(&amount) {
            return writeln!(self.output, "Error: {e}");
        }

        let args = AddArgs::new(date, description, category, amount);
        let result = commands::add(self.config, &args);
        self.report(result)
    }

    /// Writes the command output, or the error, and carries on.
    fn report<T>(&mut self, result: Result<Out<T>>) -> io::Result<()>
    where
        T: Serialize + Clone + Debug,
    {
        match result {
            Ok(out) => out.write(&mut self.output),
            Err(e) => {
                debug!("Command failed: {e:?}");
                writeln!(self.output, "Error: {e}")
            }
        }
    }

    /// Shows `prompt` and reads one line.
    ///
    /// The raw bytes are read first so that a line which is not UTF-8 is consumed and reported
    /// instead of failing the whole session.
    fn prompt(&mut self, prompt: &str) -> io::Result<Input> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(self.output)?;
            return Ok(Input::End);
        }
        match String::from_utf8(bytes) {
            Ok(line) => Ok(Input::Line(line.trim().to_string())),
            Err(e) => {
                debug!("Discarding input line: {e}");
                writeln!(self.output, "Error: input is not valid UTF-8")?;
                Ok(Input::Invalid)
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
