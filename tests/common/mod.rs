#![allow(dead_code)]

use clingboot::interp::{CompilationResult, DiagnosticsClient, Interpreter};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AddIncludePath(String),
    LoadFile(String),
    Submit(String),
}

#[derive(Debug, Default)]
pub struct Scopes {
    pub open: u32,
    pub errors: u32,
    /// Verifier mismatches, only counted once the scope ends.
    pub pending_on_end: u32,
    pub unbalanced: bool,
}

impl DiagnosticsClient for Scopes {
    fn num_errors(&self) -> u32 {
        self.errors
    }

    fn begin_source_file(&mut self) {
        if self.open != 0 {
            self.unbalanced = true;
        }
        self.open += 1;
    }

    fn end_source_file(&mut self) {
        if self.open == 0 {
            self.unbalanced = true;
            return;
        }
        self.open -= 1;
        self.errors += std::mem::take(&mut self.pending_on_end);
    }
}

/// Fake session that records every call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Zero-based submission index that reports failure.
    pub fail_submission: Option<usize>,
    pub verify: bool,
    pub scopes: Scopes,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            scopes: Scopes {
                open: 1,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn submissions(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Submit(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn include_paths(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::AddIncludePath(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Interpreter for Recorder {
    fn add_include_path(&mut self, path: &str) {
        self.calls.push(Call::AddIncludePath(path.to_string()));
    }

    fn load_file(&mut self, path: &str) -> bool {
        self.calls.push(Call::LoadFile(path.to_string()));
        Path::new(path).is_file()
    }

    fn submit(&mut self, text: &str) -> CompilationResult {
        let index = self.submissions().len();
        self.calls.push(Call::Submit(text.to_string()));
        if self.fail_submission == Some(index) {
            CompilationResult::Failure
        } else {
            CompilationResult::Success
        }
    }

    fn lookup_file(&self, name: &str) -> Option<PathBuf> {
        let p = PathBuf::from(name);
        p.is_file().then_some(p)
    }

    fn verify_diagnostics(&self) -> bool {
        self.verify
    }

    fn diagnostics(&mut self) -> &mut dyn DiagnosticsClient {
        &mut self.scopes
    }
}

/// Framework installation with every required directory and the runtime
/// library for `runtime` (relative path).
pub fn framework_home(runtime: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("include/Urho3D/ThirdParty/Bullet")).unwrap();
    let lib = dir.path().join(runtime);
    fs::create_dir_all(lib.parent().unwrap()).unwrap();
    File::create(lib).unwrap();
    dir
}

pub fn path_str(p: &Path) -> String {
    clingboot::processor::path::normalize(&p.to_string_lossy())
}
