//! Console output for the probe report.
//!
//! The report is line oriented and keeps its emoji markers so runs can be
//! diffed against each other. Colour is only a decoration on top of that
//! text and is switched off when stdout is not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Width of the `=` rules around the banner and summary.
pub const RULE_WIDTH: usize = 50;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status types for report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Search,
    Summary,
}

/// Status icons for report lines.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✅",
        Status::Error => "❌",
        Status::Search => "🔍",
        Status::Summary => "📊",
    }
}

/// Line writer for the report.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout, coloured when stdout is a terminal and `color` allows it.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color && is_terminal())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Plain console without styling, mostly for capturing output.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn rule(&mut self) -> io::Result<()> {
        self.line("=".repeat(RULE_WIDTH))
    }

    /// `<icon> <text>`, styled by status.
    pub fn status(&mut self, status: Status, text: impl Display) -> io::Result<()> {
        let line = format!("{} {}", status_icon(status), text);
        if !self.color {
            return self.line(line);
        }
        match status {
            Status::Success => self.line(line.green().bold()),
            Status::Error => self.line(line.red().bold()),
            Status::Search => self.line(line.yellow()),
            Status::Summary => self.line(line.cyan().bold()),
        }
    }

    /// `<label>: <value>` with the label dimmed when styled.
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}: {}", label.dimmed(), value)
        } else {
            writeln!(self.out, "{}: {}", label, value)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// First `max` characters of `text` followed by `...`.
///
/// The marker is appended even when nothing was cut, so every preview in
/// the report reads the same way.
pub fn preview(text: &str, max: usize) -> String {
    format!("{}...", truncate_chars(text, max))
}

/// Replace every non-ASCII character with its `\uXXXX` escape, using
/// surrogate pairs above the BMP.
///
/// Applied to serialized JSON, where such characters only occur inside
/// strings, this yields the ASCII-only form common JSON dumpers emit by
/// default, so previews compare byte for byte.
pub fn escape_non_ascii(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for c in text.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Render keys like a list literal: `['a', 'b']`.
pub fn format_key_list(keys: &[String]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{}'", k)).collect();
    format!("[{}]", quoted.join(", "))
}
