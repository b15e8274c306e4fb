//! # Single-slot component state
//!
//! A component usually wants one record of state and three ways to change
//! it. `use_single_state` hands back exactly that:
//!
//! ```rust
//! use serde_json::json;
//! use single_state_core::*;
//!
//! let _pass = ComposeGuard::begin();
//! let (state, update, reset, replace) =
//!     use_single_state(json!({"note": "", "value": 0}), Some("form"), true);
//!
//! update(json!({"note": "hi"})).unwrap(); // {note: "hi", value: 0}
//! replace(json!({"value": 4})).unwrap();  // {value: 4}
//! reset().unwrap();                       // back to `state`
//! # let _ = state;
//! ```
//!
//! - `update` shallow-merges a partial record over the current state.
//! - `reset` restores the value the container was created with.
//! - `replace` swaps in a whole new value, dropping fields it lacks.
//!
//! ## Diff logging
//!
//! With a non-empty label and logging enabled, every transition prints a
//! grouped report of what changed (see `single-state-devtools`). Reports go
//! through the `log` facade under the `single_state::diff` target at debug
//! level, so nothing shows until the application installs a logger:
//!
//! ```text
//! RUST_LOG=single_state::diff=debug cargo run
//! ```
//!
//! ## Records
//!
//! Any `Record` can be held: `serde_json::Value`, string-keyed maps, or your
//! own struct with a partial companion type.
//!
//! ## Outside composition
//!
//! `SingleState` is the container without the slot bookkeeping, for use in
//! tests or non-UI code. Its cell is any `StateCell`; the default is an
//! observable `Signal`.

pub mod error;
pub mod hook;
pub mod prelude;
pub mod record;
pub mod runtime;
pub mod signal;
pub mod state;

pub use error::*;
pub use hook::*;
pub use record::*;
pub use runtime::*;
pub use signal::*;
pub use state::*;

pub use single_state_devtools as devtools;
