use single_state_devtools::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    /// Diff reporting failed before commit; the held state is unchanged.
    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, StateError>;
