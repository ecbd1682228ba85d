//! Pipeline orchestration error types.

use crate::{ClientError, StoreError};

/// Kinds of pipeline errors.
///
/// Only the mandatory stages (trend discovery, candidate generation,
/// selection) produce terminal failures. Optimization and prediction
/// failures are absorbed by the orchestrator and never surface here.
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum PipelineErrorKind {
    /// Stage 1 found nothing to write about
    #[display("No trending topics found for '{}'", _0)]
    NoTrendsFound(#[error(not(source))] String),
    /// Stage 2 produced zero usable candidates
    #[display("All article candidates failed for '{}'", _0)]
    AllCandidatesFailed(#[error(not(source))] String),
    /// Stage 3 response lacked a usable selection
    #[display("Article selection failed: {}", _0)]
    SelectionFailed(#[error(not(source))] String),
    /// A mandatory stage's upstream call failed outright
    #[from(ClientError)]
    Client(ClientError),
    /// Persisting the assembled article failed
    #[from(StoreError)]
    Store(StoreError),
}

/// Pipeline error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::NoTrendsFound("AI".to_string()));
/// assert!(format!("{}", err).contains("No trending topics"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<ClientError> for PipelineError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        Self::new(PipelineErrorKind::Client(err))
    }
}

impl From<StoreError> for PipelineError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        Self::new(PipelineErrorKind::Store(err))
    }
}
