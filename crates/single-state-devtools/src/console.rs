//! Grouped, styled diagnostic output.
//!
//! `Console` is the seam between report layout and where the text ends up.
//! [`LogConsole`] forwards to the `log` facade; [`RecordingConsole`] keeps
//! the plain text in memory so layouts can be asserted on.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

use crate::style::Style;

pub const DEFAULT_TARGET: &str = "single_state::diff";

/// A run of text with one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Styled {
    pub text: String,
    pub style: Style,
}

impl Styled {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }
}

/// One console line: an optional styled label followed by unstyled parts,
/// separated by single spaces when rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub label: Option<Styled>,
    pub parts: SmallVec<[String; 4]>,
}

impl Line {
    pub fn labeled(label: Styled) -> Self {
        Self {
            label: Some(label),
            parts: SmallVec::new(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let mut parts = SmallVec::new();
        parts.push(text.into());
        Self { label: None, parts }
    }

    pub fn part(mut self, text: impl Into<String>) -> Self {
        self.parts.push(text.into());
        self
    }

    pub fn render(&self, ansi: bool) -> String {
        let mut pieces: Vec<String> = Vec::with_capacity(self.parts.len() + 1);
        if let Some(label) = &self.label {
            pieces.push(if ansi {
                label.style.paint_ansi(&label.text)
            } else {
                label.text.clone()
            });
        }
        pieces.extend(self.parts.iter().cloned());
        pieces.join(" ")
    }
}

pub trait Console {
    /// Opens an indented section; every later line belongs to it until the
    /// matching `group_end`.
    fn group(&self, label: &Styled);
    fn log(&self, line: &Line);
    fn group_end(&self);
}

impl<C: Console + ?Sized> Console for Rc<C> {
    fn group(&self, label: &Styled) {
        (**self).group(label)
    }
    fn log(&self, line: &Line) {
        (**self).log(line)
    }
    fn group_end(&self) {
        (**self).group_end()
    }
}

/// Writes through the `log` facade, two spaces of indent per open group.
pub struct LogConsole {
    level: log::Level,
    ansi: bool,
    depth: Cell<usize>,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConsole {
    pub fn new() -> Self {
        Self {
            level: log::Level::Debug,
            ansi: false,
            depth: Cell::new(0),
        }
    }

    pub fn with_level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }

    /// Colorize labels with ANSI escapes (for terminals).
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    fn emit(&self, text: &str) {
        let text = indented(self.depth.get(), text);
        log::log!(target: DEFAULT_TARGET, self.level, "{text}");
    }
}

/// Prefixes every line of `text` with two spaces per level of `depth`.
fn indented(depth: usize, text: &str) -> String {
    let indent = "  ".repeat(depth);
    let text = text.replace('\n', &format!("\n{indent}"));
    format!("{indent}{text}")
}

impl Console for LogConsole {
    fn group(&self, label: &Styled) {
        self.emit(&Line::labeled(label.clone()).render(self.ansi));
        self.depth.set(self.depth.get() + 1);
    }

    fn log(&self, line: &Line) {
        self.emit(&line.render(self.ansi));
    }

    fn group_end(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    GroupStart(String),
    Line(String),
    GroupEnd,
}

/// In-memory console. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingConsole {
    events: Rc<RefCell<Vec<ConsoleEvent>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.borrow().clone()
    }

    /// Rendered text of every line and group header, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::GroupStart(s) | ConsoleEvent::Line(s) => Some(s.clone()),
                ConsoleEvent::GroupEnd => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn group(&self, label: &Styled) {
        self.events
            .borrow_mut()
            .push(ConsoleEvent::GroupStart(label.text.clone()));
    }

    fn log(&self, line: &Line) {
        self.events
            .borrow_mut()
            .push(ConsoleEvent::Line(line.render(false)));
    }

    fn group_end(&self) {
        self.events.borrow_mut().push(ConsoleEvent::GroupEnd);
    }
}
