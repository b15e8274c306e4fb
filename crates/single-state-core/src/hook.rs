use crate::record::Record;
use crate::runtime::{remember, remember_with_key};
use crate::state::{SingleState, UseSingleState};

/// The slot holds the cell and initial value; logging follows the current pass.
fn bind<T: Record>(
    slot: &SingleState<T>,
    label: Option<&str>,
    enable_log: bool,
) -> SingleState<T> {
    let state = slot.clone().with_logging(enable_log);
    match label {
        Some(label) => state.with_label(label),
        None => state.without_label(),
    }
}

/// Component state hook: `(state, update, reset, replace)`.
///
/// The container lives in the current composition slot, so `initial` is
/// only used the first time this call site runs; later passes get the
/// committed state back. Transitions are logged under `label` unless it is
/// absent or empty, or `enable_log` is false; both are taken from the
/// current pass, so handles from an older pass keep their own settings.
///
/// ```
/// use serde_json::json;
/// use single_state_core::{ComposeGuard, use_single_state};
///
/// let _pass = ComposeGuard::begin();
/// let (state, update, _reset, _replace) =
///     use_single_state(json!({"count": 0}), None, true);
/// assert_eq!(state, json!({"count": 0}));
/// update(json!({"count": 1})).unwrap();
///
/// let _pass = ComposeGuard::begin();
/// let (state, ..) = use_single_state(json!({"count": 0}), None, true);
/// assert_eq!(state, json!({"count": 1}));
/// ```
pub fn use_single_state<T: Record>(
    initial: T,
    label: Option<&str>,
    enable_log: bool,
) -> UseSingleState<T> {
    let slot = remember(|| SingleState::new(initial));
    bind(&slot, label, enable_log).handles()
}

/// Like [`use_single_state`], but bound to `key` instead of call order, so
/// it survives conditional composition.
pub fn use_single_state_with_key<T: Record>(
    key: impl Into<String>,
    initial: T,
    label: Option<&str>,
    enable_log: bool,
) -> UseSingleState<T> {
    let key = format!("single_state:{}", key.into());
    let slot = remember_with_key(key, || SingleState::new(initial));
    bind(&slot, label, enable_log).handles()
}
