//! Seam to the external interpreter/compiler engine.
//!
//! The bootstrap never owns a session; every component receives it as
//! `&mut dyn Interpreter` (or a generic `I: Interpreter`) for the duration
//! of one call.
pub mod transcript;

pub use transcript::Transcript;

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationResult {
    Success,
    Failure,
}

impl CompilationResult {
    pub fn is_failure(self) -> bool {
        self == CompilationResult::Failure
    }
}

/// Diagnostic consumer of a live session.
///
/// Source-file scopes must stay balanced: every `begin_source_file` is
/// matched by an `end_source_file` before the next begin.
pub trait DiagnosticsClient {
    fn num_errors(&self) -> u32;
    fn begin_source_file(&mut self);
    fn end_source_file(&mut self);
}

pub trait Interpreter {
    /// Idempotent.
    fn add_include_path(&mut self, path: &str);

    /// `false` when the path did not resolve.
    fn load_file(&mut self, path: &str) -> bool;

    /// Compile `text` and run it if it is an executable statement.
    fn submit(&mut self, text: &str) -> CompilationResult;

    /// Resolve an input name against the session's search paths.
    fn lookup_file(&self, name: &str) -> Option<PathBuf>;

    /// Whether the session checks expected-diagnostic annotations.
    fn verify_diagnostics(&self) -> bool;

    fn diagnostics(&mut self) -> &mut dyn DiagnosticsClient;
}
