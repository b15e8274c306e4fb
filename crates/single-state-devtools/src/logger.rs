use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::color::Color;
use crate::console::{Console, Line, LogConsole, Styled};
use crate::diff::{DiffEntry, DiffKind, Differ, StructuralDiffer};
use crate::error::{ReportError, Result};
use crate::style::Style;

pub const NONE_MARKER: &str = "—— None ——";

impl DiffKind {
    pub fn label(self) -> &'static str {
        match self {
            DiffKind::Changed => "CHANGED:",
            DiffKind::Added => "ADDED:",
            DiffKind::Deleted => "DELETED:",
            DiffKind::ArrayChanged => "ARRAY:",
        }
    }

    pub fn color(self) -> Color {
        match self {
            DiffKind::Changed | DiffKind::ArrayChanged => Color::from_hex("#2196F3"),
            DiffKind::Added => Color::from_hex("#4CAF50"),
            DiffKind::Deleted => Color::from_hex("#F44336"),
        }
    }

    pub fn style(self) -> Style {
        Style::new().color(self.color()).bold()
    }
}

fn success_style() -> Style {
    Style::new().color(Color::MEDIUM_SEA_GREEN).bold()
}

fn topic_style() -> Style {
    Style::new().background(Color::GRAY).bold().small().padded()
}

/// Strings print bare, everything else as compact JSON.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The parts that follow the kind label on an entry's line.
pub fn render_entry(entry: &DiffEntry) -> Vec<String> {
    match entry {
        DiffEntry::Changed {
            path,
            previous,
            next,
        } => vec![
            path.dotted(),
            display_value(previous),
            "→".to_string(),
            display_value(next),
        ],
        DiffEntry::Added { path, next } => vec![path.dotted(), display_value(next)],
        DiffEntry::Deleted { path, .. } => vec![path.dotted()],
        DiffEntry::ArrayChanged { path, index, item } => {
            vec![
                format!("{}[{index}]", path.dotted()),
                item.marker().to_string(),
                display_value(item.value()),
            ]
        }
    }
}

/// Prints a grouped before/after report of a state transition.
///
/// ```
/// use serde_json::json;
/// use single_state_devtools::{DiffLogger, RecordingConsole};
///
/// let console = RecordingConsole::new();
/// let logger = DiffLogger::new().with_console(console.clone());
/// logger.report(&json!({"n": 1}), &json!({"n": 2}), Some("counter"));
///
/// assert!(console.lines().contains(&"CHANGED: n 1 → 2".to_string()));
/// ```
#[derive(Clone)]
pub struct DiffLogger {
    differ: Rc<dyn Differ>,
    console: Rc<dyn Console>,
}

impl Default for DiffLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffLogger {
    pub fn new() -> Self {
        Self {
            differ: Rc::new(StructuralDiffer),
            console: Rc::new(LogConsole::new()),
        }
    }

    pub fn with_differ(mut self, differ: impl Differ + 'static) -> Self {
        self.differ = Rc::new(differ);
        self
    }

    pub fn with_console(mut self, console: impl Console + 'static) -> Self {
        self.console = Rc::new(console);
        self
    }

    pub fn report(&self, previous: &Value, next: &Value, topic: Option<&str>) {
        let entries = self.differ.diff(previous, next);
        let console = &*self.console;

        if let Some(topic) = topic {
            console.group(&Styled::new(
                format!("State changed: {topic}"),
                topic_style(),
            ));
        }

        console.log(
            &Line::labeled(Styled::new("Previous State", DiffKind::Deleted.style()))
                .part(pretty(previous)),
        );
        console.group(&Styled::new("Update", DiffKind::Changed.style()));

        if entries.is_empty() {
            console.log(&Line::plain(NONE_MARKER));
        } else {
            for entry in &entries {
                let kind = entry.kind();
                let mut line = Line::labeled(Styled::new(kind.label(), kind.style()));
                line.parts.extend(render_entry(entry));
                console.log(&line);
            }
        }

        console.group_end();
        console.log(
            &Line::labeled(Styled::new("Next State", success_style())).part(pretty(next)),
        );

        if topic.is_some() {
            console.group_end();
        }
    }

    /// Serializes both values and reports them.
    pub fn log_diff<T: Serialize + ?Sized>(
        &self,
        previous: &T,
        next: &T,
        topic: Option<&str>,
    ) -> Result<()> {
        let prev = serde_json::to_value(previous).map_err(|source| ReportError::Serialize {
            side: "previous",
            source,
        })?;
        let next = serde_json::to_value(next).map_err(|source| ReportError::Serialize {
            side: "next",
            source,
        })?;
        self.report(&prev, &next, topic);
        Ok(())
    }
}

fn pretty(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}
