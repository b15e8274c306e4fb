pub use crate::error::{Result, StateError};
pub use crate::hook::{use_single_state, use_single_state_with_key};
pub use crate::record::Record;
pub use crate::runtime::{ComposeGuard, remember, remember_with_key};
pub use crate::signal::{Signal, StateCell, SubId, signal};
pub use crate::state::{ReplaceFn, ResetFn, SingleState, UpdateFn, UseSingleState};
pub use single_state_devtools::{Console, DiffLogger, Differ, LogConsole, RecordingConsole};
