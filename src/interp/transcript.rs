//! Dry-run engine: records every call and writes submitted text to a sink.
//!
//! Used by the binary when no real engine is linked in, and handy for
//! reviewing exactly what a bootstrap would feed the interpreter.

use super::{CompilationResult, DiagnosticsClient, Interpreter};
use crate::processor::classify;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SUBMISSION_MARKER: &str = "// ---- submit ----";

/// Scope bookkeeping for the transcript session.
///
/// Starts with one open scope, the way a freshly created compiler
/// instance has already begun its main file.
#[derive(Debug)]
pub struct ScopeCounter {
    open: u32,
    errors: u32,
}

impl Default for ScopeCounter {
    fn default() -> Self {
        Self { open: 1, errors: 0 }
    }
}

impl ScopeCounter {
    pub fn open_scopes(&self) -> u32 {
        self.open
    }
}

impl DiagnosticsClient for ScopeCounter {
    fn num_errors(&self) -> u32 {
        self.errors
    }

    fn begin_source_file(&mut self) {
        if self.open > 0 {
            log::error!("begin_source_file with {} scope(s) still open", self.open);
            self.errors += 1;
        }
        self.open += 1;
    }

    fn end_source_file(&mut self) {
        if self.open == 0 {
            log::error!("end_source_file without a matching begin");
            self.errors += 1;
            return;
        }
        self.open -= 1;
    }
}

pub struct Transcript<W: Write> {
    sink: W,
    verify: bool,
    include_paths: Vec<String>,
    loaded: Vec<String>,
    submissions: Vec<String>,
    diagnostics: ScopeCounter,
}

impl<W: Write> Transcript<W> {
    pub fn new(sink: W, verify: bool) -> Self {
        Self {
            sink,
            verify,
            include_paths: Vec::new(),
            loaded: Vec::new(),
            submissions: Vec::new(),
            diagnostics: ScopeCounter::default(),
        }
    }

    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    pub fn submissions(&self) -> &[String] {
        &self.submissions
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Interpreter for Transcript<W> {
    fn add_include_path(&mut self, path: &str) {
        if self.include_paths.iter().any(|p| p == path) {
            return;
        }
        log::debug!("include path {path}");
        self.include_paths.push(path.to_string());
    }

    fn load_file(&mut self, path: &str) -> bool {
        if !classify::is_file_like(Path::new(path)) {
            return false;
        }
        log::debug!("load {path}");
        self.loaded.push(path.to_string());
        true
    }

    fn submit(&mut self, text: &str) -> CompilationResult {
        self.submissions.push(text.to_string());

        let written = writeln!(self.sink, "{SUBMISSION_MARKER}")
            .and_then(|_| writeln!(self.sink, "{text}"))
            .and_then(|_| self.sink.flush());

        match written {
            Ok(()) => CompilationResult::Success,
            Err(e) => {
                log::error!("writing transcript: {e}");
                CompilationResult::Failure
            }
        }
    }

    fn lookup_file(&self, name: &str) -> Option<PathBuf> {
        let direct = PathBuf::from(name);
        if classify::is_file_like(&direct) {
            return Some(direct);
        }
        self.include_paths
            .iter()
            .map(|dir| Path::new(dir).join(name))
            .find(|candidate| classify::is_file_like(candidate))
    }

    fn verify_diagnostics(&self) -> bool {
        self.verify
    }

    fn diagnostics(&mut self) -> &mut dyn DiagnosticsClient {
        &mut self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_paths_are_deduplicated() {
        let mut t = Transcript::new(Vec::new(), false);
        t.add_include_path("/a");
        t.add_include_path("/b");
        t.add_include_path("/a");

        assert_eq!(t.include_paths(), ["/a", "/b"]);
    }

    #[test]
    fn test_submissions_are_written_in_order() {
        let mut t = Transcript::new(Vec::new(), false);
        assert_eq!(t.submit("int x = 1;"), CompilationResult::Success);
        assert_eq!(t.submit("x++;"), CompilationResult::Success);

        let text = String::from_utf8(t.into_sink()).expect("utf8");
        let expected = format!("{SUBMISSION_MARKER}\nint x = 1;\n{SUBMISSION_MARKER}\nx++;\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let mut t = Transcript::new(Vec::new(), false);
        assert!(!t.load_file("/definitely/not/here.so"));
        assert!(t.loaded().is_empty());
    }

    #[test]
    fn test_unbalanced_end_counts_as_error() {
        let mut scopes = ScopeCounter::default();
        scopes.end_source_file();
        assert_eq!(scopes.num_errors(), 0);

        scopes.end_source_file();
        assert_eq!(scopes.num_errors(), 1);
        assert_eq!(scopes.open_scopes(), 0);
    }

    #[test]
    fn test_begin_while_open_counts_as_error() {
        let mut scopes = ScopeCounter::default();
        scopes.begin_source_file();
        assert_eq!(scopes.num_errors(), 1);
    }
}
