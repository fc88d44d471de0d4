//! Line-oriented command script driving the panel.
//!
//! ```text
//! # comment
//! type #le-address .ui-lineedit__input 10.0.0.7
//! click #btn-connect
//! wait 800
//! show #app-status-indicator
//! ```
//!
//! Selector arguments run to the last word for `type` and `choose`, so
//! selectors may contain spaces; the last word is the text or value.

use std::io::{self, Write};
use std::time::Duration;

use uidom::{NodeId, Page};
use uikit::combo;

use crate::error::ScriptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(String),
    Type { selector: String, text: String },
    Choose { selector: String, value: String },
    Wait(Duration),
    Show(String),
    Dump(Option<String>),
    Log,
    Quit,
}

/// What the driver should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Wait(Duration),
    Quit,
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "click" => Command::Click(required(rest, "click", "a selector")?),
        "show" => Command::Show(required(rest, "show", "a selector")?),
        "type" => {
            let (selector, text) = split_last(rest, "type", "a selector and text")?;
            Command::Type { selector, text }
        }
        "choose" => {
            let (selector, value) = split_last(rest, "choose", "a selector and a value")?;
            Command::Choose { selector, value }
        }
        "wait" => {
            let ms = required(rest, "wait", "a duration in milliseconds")?;
            let ms: u64 = ms.parse().map_err(|_| ScriptError::InvalidDuration(ms))?;
            Command::Wait(Duration::from_millis(ms))
        }
        "dump" => Command::Dump((!rest.is_empty()).then(|| rest.to_string())),
        "log" => no_args(rest, "log", Command::Log)?,
        "quit" | "exit" => no_args(rest, "quit", Command::Quit)?,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn required(rest: &str, command: &'static str, what: &'static str) -> Result<String, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::MissingArgument { command, what });
    }
    Ok(rest.to_string())
}

fn split_last(
    rest: &str,
    command: &'static str,
    what: &'static str,
) -> Result<(String, String), ScriptError> {
    match rest.rsplit_once(char::is_whitespace) {
        Some((head, last)) if !head.trim().is_empty() => {
            Ok((head.trim().to_string(), last.to_string()))
        }
        _ => Err(ScriptError::MissingArgument { command, what }),
    }
}

fn no_args(rest: &str, command: &'static str, parsed: Command) -> Result<Command, ScriptError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArgument(command))
    }
}

// -------------------------------------------------------------------------
// Session
// -------------------------------------------------------------------------

/// A page plus the stream command output goes to.
pub struct Session<W> {
    page: Page,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(page: Page, out: W) -> Self {
        Self { page, out }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn into_parts(self) -> (Page, W) {
        (self.page, self.out)
    }

    /// Parse and run line `number`. Parse errors are reported on the output
    /// stream and the script continues.
    pub fn step(&mut self, number: usize, line: &str) -> io::Result<Flow> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(number, &command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                log::warn!("[script] line {number}: {err}");
                writeln!(self.out, "line {number}: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn find(&mut self, number: usize, selector: &str) -> io::Result<Option<NodeId>> {
        match self.page.select_first(selector) {
            Ok(Some(node)) => Ok(Some(node)),
            Ok(None) => {
                writeln!(self.out, "line {number}: nothing matches {selector}")?;
                Ok(None)
            }
            Err(err) => {
                writeln!(self.out, "line {number}: {err}")?;
                Ok(None)
            }
        }
    }

    pub fn execute(&mut self, number: usize, command: &Command) -> io::Result<Flow> {
        log::debug!("[script] line {number}: {command:?}");
        match command {
            Command::Click(selector) => {
                if let Some(node) = self.find(number, selector)? {
                    self.page.click(node);
                }
            }
            Command::Type { selector, text } => {
                if let Some(node) = self.find(number, selector)? {
                    self.page.input_text(node, text);
                }
            }
            Command::Choose { selector, value } => {
                if let Some(node) = self.find(number, selector)? {
                    let chosen = if self.page.tag(node) == "select" {
                        self.page.choose(node, value)
                    } else {
                        combo::set(&mut self.page, node, value);
                        combo::get(&self.page, node).as_deref() == Some(value.as_str())
                    };
                    if !chosen {
                        writeln!(self.out, "line {number}: no option {value} in {selector}")?;
                    }
                }
            }
            Command::Wait(duration) => return Ok(Flow::Wait(*duration)),
            Command::Show(selector) => {
                if let Some(node) = self.find(number, selector)? {
                    let text = self.page.text(node);
                    writeln!(self.out, "{text}")?;
                }
            }
            Command::Dump(selector) => {
                let node = match selector {
                    Some(selector) => self.find(number, selector)?,
                    None => Some(self.page.root()),
                };
                if let Some(node) = node {
                    let html = self.page.outer_html(node);
                    writeln!(self.out, "{html}")?;
                }
            }
            Command::Log => {
                let text = self
                    .page
                    .get_element_by_id("log-output")
                    .map(|node| self.page.text(node))
                    .unwrap_or_default();
                write!(self.out, "{text}")?;
                if !text.ends_with('\n') {
                    writeln!(self.out)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
