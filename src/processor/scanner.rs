//! Recursive source discovery.
//!
//! `scan` fuses the walk with include-path registration: every directory is
//! handed to the interpreter before any file beneath it is reported, so a
//! later `#include` of those files always resolves.

use crate::interp::Interpreter;
use crate::model::{Classification, LISTING_EXTENSIONS, ScanFailure, ScanResult};
use crate::processor::{classify, path};
use std::path::Path;
use walkdir::WalkDir;

/// Depth-first scan of `root`, registering `root` and every directory below
/// it as an include path.
///
/// Links to directories are leaves. A subtree that cannot be read is
/// dropped from the result, recorded in `failures`, and the walk continues
/// with its siblings.
pub fn scan(interp: &mut dyn Interpreter, root: &Path) -> ScanResult {
    let mut result = ScanResult::default();
    let root_str = path::normalize(&root.to_string_lossy());

    if !root.is_dir() {
        log::warn!("scan root {root_str} is not a directory");
        result.failures.push(ScanFailure {
            path: root_str,
            message: "not a directory".into(),
        });
        return result;
    }

    interp.add_include_path(&root_str);
    result.directories.push(root_str);

    for entry in walk(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let failed = e
                    .path()
                    .map(|p| path::normalize(&p.to_string_lossy()))
                    .unwrap_or_else(|| result.directories[0].clone());
                log::warn!("skipping {failed}: {e}");
                result.failures.push(ScanFailure {
                    path: failed,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let full = path::normalize(&entry.path().to_string_lossy());
        match classify::classify(entry.path()) {
            Some(Classification::Directory) => {
                interp.add_include_path(&full);
                result.directories.push(full);
            }
            Some(Classification::CompilationUnit) => result.compilation_units.push(full),
            Some(Classification::Header) => result.headers.push(full),
            Some(Classification::Other) | None => {}
        }
    }

    log::debug!(
        "scanned {}: {} unit(s), {} header(s), {} dir(s)",
        root.display(),
        result.compilation_units.len(),
        result.headers.len(),
        result.directories.len()
    );
    result
}

/// Plain listing of every source-like file under `root`.
///
/// No interpreter involved, and the extension set differs from `scan`:
/// headers and units are reported together in traversal order.
pub fn enumerate_sources(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    for entry in walk(root) {
        let Ok(entry) = entry else {
            continue;
        };
        if !classify::is_file_like(entry.path()) {
            continue;
        }
        let listed = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| LISTING_EXTENSIONS.contains(&ext));
        if listed {
            files.push(path::normalize(&entry.path().to_string_lossy()));
        }
    }
    files
}

fn walk(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}
