use crate::model::Stage;
use thiserror::Error;

/// Failures that end a bootstrap run.
///
/// The configuration variants are raised before the interpreter sees a
/// single `submit`; their message names the first missing resource.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("{0} does not exist")]
    MissingHome(String),

    #[error("{0} does not exist")]
    MissingIncludeDir(String),

    #[error("{0} does not exist")]
    MissingRuntime(String),

    #[error("stage `{stage}` failed to compile")]
    StageFailed { stage: Stage },

    #[error("{0} error(s) reported by the interpreter")]
    DiagnosticErrors(u32),
}
