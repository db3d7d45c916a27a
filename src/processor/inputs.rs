//! Non-interactive inputs: scripts, files to execute, or raw statements.

use crate::interp::Interpreter;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Feed each input to the session.
///
/// A resolvable file starting with `#!` is submitted line by line after
/// the shebang. Any other resolvable file is run with `.x`. Anything that
/// does not resolve is submitted as-is. Per-input compile results are left
/// to the diagnostic count.
pub fn run_inputs(interp: &mut dyn Interpreter, inputs: &[String]) -> Result<()> {
    for input in inputs {
        let Some(found) = interp.lookup_file(input) else {
            interp.submit(input);
            continue;
        };

        let file = File::open(&found).with_context(|| format!("Opening {}", found.display()))?;
        let mut reader = BufReader::new(file);

        let mut first = Vec::new();
        reader
            .read_until(b'\n', &mut first)
            .with_context(|| format!("Reading {}", found.display()))?;

        if first.starts_with(b"#!") {
            log::debug!("running script {}", found.display());
            for line in reader.split(b'\n') {
                let line = line.with_context(|| format!("Reading {}", found.display()))?;
                interp.submit(&decode_line(&line));
            }
            continue;
        }

        interp.submit(&format!(".x {input}"));
    }
    Ok(())
}

/// Script lines need not be UTF-8; undecodable bytes become U+FFFD.
fn decode_line(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
