//! Player-facing collaborators: where narration goes and where commands come from.
//!
//! The engine only knows the [`Output`] and [`Input`] traits. The console
//! implementations back the binary; [`ScriptedInput`] and [`Transcript`] back
//! headless play and the tests.

use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Write};

/// Abstract styling for a piece of narration. Renderers decide what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    /// A question that waits for a reply; rendered without a trailing newline.
    Prompt,
    Warning,
    Success,
    Highlight,
}

/// Receives narration. Must not block on the player or touch game state.
pub trait Output {
    fn present(&mut self, text: &str, style: Style);
}

/// Supplies one line of player text at a time; `None` once the source is exhausted.
pub trait Input {
    fn read_line(&mut self) -> Option<String>;
}

/// Lowercase and trim a raw player line the way every consumer expects it.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Narration on stdout, with ANSI colors when stdout is a terminal.
pub struct ConsoleOutput {
    color: bool,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self {
            color: atty::is(atty::Stream::Stdout),
        }
    }

    fn paint(&self, style: Style) -> (&'static str, &'static str) {
        if !self.color {
            return ("", "");
        }
        let code = match style {
            Style::Normal => return ("", ""),
            Style::Prompt => "\x1b[34m",
            Style::Warning => "\x1b[31m",
            Style::Success => "\x1b[32m",
            Style::Highlight => "\x1b[33m",
        };
        (code, "\x1b[0m")
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn present(&mut self, text: &str, style: Style) {
        let (on, off) = self.paint(style);
        let mut out = std::io::stdout().lock();
        let res = if style == Style::Prompt {
            write!(out, "{on}{text}{off}").and_then(|_| out.flush())
        } else {
            writeln!(out, "{on}{text}{off}")
        };
        if let Err(e) = res {
            log::warn!("console: failed to write narration: {}", e);
        }
    }
}

/// Player lines from stdin, or any other buffered reader.
///
/// Bytes that are not UTF-8 are replaced rather than refused, so a garbled
/// line still reaches the menu and gets re-prompted. Piped stdin is echoed so
/// the transcript reads naturally.
pub struct ConsoleInput<R: BufRead = StdinLock<'static>> {
    reader: R,
    echo: bool,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin().lock(),
            echo: !atty::is(atty::Stream::Stdin),
        }
    }
}

impl<R: BufRead> ConsoleInput<R> {
    /// Read from `reader` without echoing.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            echo: false,
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> Input for ConsoleInput<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).into_owned();
                if self.echo {
                    println!("{}", line.trim_end());
                }
                Some(line)
            }
            Err(e) => {
                log::warn!("console: failed to read input: {}", e);
                None
            }
        }
    }
}

/// Pre-recorded player lines, consumed front to back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Records everything presented, in order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<(String, Style)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, Style)] {
        &self.entries
    }

    /// Every presented string joined by newlines.
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|(t, _)| t.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(t, _)| t.contains(needle))
    }

    /// How many presented strings contain `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.entries.iter().filter(|(t, _)| t.contains(needle)).count()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|(t, _)| t.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Output for Transcript {
    fn present(&mut self, text: &str, style: Style) {
        self.entries.push((text.to_string(), style));
    }
}
