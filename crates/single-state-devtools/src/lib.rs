//! # Diff reports for state transitions
//!
//! `single-state-devtools` turns a pair of values into a grouped console
//! report:
//!
//! ```text
//! State changed: form
//!   Previous State {
//!     "note": "",
//!     "value": 0
//!   }
//!   Update
//!     CHANGED: note  → hi
//!   Next State {
//!     "note": "hi",
//!     "value": 0
//!   }
//! ```
//!
//! The pieces are swappable:
//!
//! - [`Differ`] computes the ordered [`DiffEntry`] list. [`StructuralDiffer`]
//!   is the default.
//! - [`Console`] receives styled, grouped lines. [`LogConsole`] writes to the
//!   `log` facade; [`RecordingConsole`] keeps them for assertions.
//! - [`DiffLogger`] lays the report out.
//!
//! Nothing here installs a logger. Binaries pick one (e.g. `env_logger`) and
//! enable the `single_state::diff` target.

pub mod color;
pub mod console;
pub mod diff;
pub mod error;
pub mod logger;
pub mod style;

pub use color::Color;
pub use console::{Console, ConsoleEvent, Line, LogConsole, RecordingConsole, Styled};
pub use diff::{ArrayItem, DiffEntry, DiffKind, DiffPath, Differ, PathSegment, StructuralDiffer};
pub use error::{ReportError, Result};
pub use logger::{DiffLogger, NONE_MARKER, display_value, render_entry};
pub use style::{Style, StyleFlags};
