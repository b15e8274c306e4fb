use std::rc::Rc;

use single_state_devtools::DiffLogger;

use crate::error::Result;
use crate::record::Record;
use crate::signal::{Signal, StateCell, SubId};

pub type UpdateFn<T> = Rc<dyn Fn(<T as Record>::Partial) -> Result<()>>;
pub type ResetFn = Rc<dyn Fn() -> Result<()>>;
pub type ReplaceFn<T> = Rc<dyn Fn(T) -> Result<()>>;

/// `(state, update, reset, replace)`, always in that order.
pub type UseSingleState<T> = (T, UpdateFn<T>, ResetFn, ReplaceFn<T>);

/// One state value with update/reset/replace transitions.
///
/// Every transition goes through [`replace`](Self::replace), which reports
/// the old and new values (when a label is set and logging is on) and then
/// commits to the cell. Clones share the cell.
///
/// ```
/// use serde_json::json;
/// use single_state_core::SingleState;
///
/// let form = SingleState::new(json!({"note": "", "value": 0}));
/// form.update(json!({"note": "hi"})).unwrap();
/// assert_eq!(form.state(), json!({"note": "hi", "value": 0}));
///
/// form.replace(json!({"value": 4})).unwrap();
/// assert_eq!(form.state(), json!({"value": 4}));
///
/// form.reset().unwrap();
/// assert_eq!(form.state(), json!({"note": "", "value": 0}));
/// ```
pub struct SingleState<T: Record, C: StateCell<T> = Signal<T>> {
    cell: C,
    initial: Rc<T>,
    label: Option<String>,
    enable_log: bool,
    reporter: DiffLogger,
}

impl<T: Record, C: StateCell<T> + Clone> Clone for SingleState<T, C> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            initial: Rc::clone(&self.initial),
            label: self.label.clone(),
            enable_log: self.enable_log,
            reporter: self.reporter.clone(),
        }
    }
}

impl<T: Record> SingleState<T> {
    pub fn new(initial: T) -> Self {
        Self::from_cell(Signal::new(initial))
    }

    /// Runs `f` with the new value after every commit.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.cell.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.cell.unsubscribe(id)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.with(f)
    }
}

impl<T: Record, C: StateCell<T>> SingleState<T, C> {
    /// Wraps an existing cell; its current value becomes the initial state.
    pub fn from_cell(cell: C) -> Self {
        let initial = Rc::new(cell.get());
        Self {
            cell,
            initial,
            label: None,
            enable_log: true,
            reporter: DiffLogger::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn without_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_log = enable;
        self
    }

    pub fn with_reporter(mut self, reporter: DiffLogger) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// An empty label counts as no label.
    pub fn logging_enabled(&self) -> bool {
        self.enable_log && self.label.as_deref().is_some_and(|l| !l.is_empty())
    }

    pub fn state(&self) -> T {
        self.cell.get()
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    pub fn update(&self, partial: T::Partial) -> Result<()> {
        self.replace(self.cell.get().merge(partial))
    }

    pub fn reset(&self) -> Result<()> {
        self.replace(T::clone(&self.initial))
    }

    pub fn replace(&self, next: T) -> Result<()> {
        if self.logging_enabled() {
            let current = self.cell.get();
            self.reporter
                .log_diff(&current, &next, self.label.as_deref())?;
        }
        self.cell.set(next);
        Ok(())
    }
}

impl<T: Record, C: StateCell<T> + Clone + 'static> SingleState<T, C> {
    /// Snapshot of the current state plus callables bound to this container.
    pub fn handles(&self) -> UseSingleState<T> {
        let update: UpdateFn<T> = {
            let this = self.clone();
            Rc::new(move |partial| this.update(partial))
        };
        let reset: ResetFn = {
            let this = self.clone();
            Rc::new(move || this.reset())
        };
        let replace: ReplaceFn<T> = {
            let this = self.clone();
            Rc::new(move |next| this.replace(next))
        };
        (self.state(), update, reset, replace)
    }
}
