use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::cli::Cli;
use crate::model::Platform;

/// Invocation options, read-only once assembled.
///
/// A JSON option file supplies the base; command-line values are layered
/// on top (scalars replace, lists append).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Options {
    pub application_class_name: String,
    pub framework_home: String,
    pub resource_prefix_override: String,
    pub extra_defines: Vec<String>,
    pub paths_to_load: Vec<String>,
    pub libs_to_load: Vec<String>,
    pub inputs: Vec<String>,
    pub verify_diagnostics: bool,
    pub platform: Platform,
}

impl Options {
    /// No bootstrap and nothing to run: the caller would want a prompt.
    pub fn is_interactive(&self) -> bool {
        self.application_class_name.is_empty() && self.inputs.is_empty()
    }

    pub fn wants_bootstrap(&self) -> bool {
        !self.application_class_name.is_empty()
    }
}

pub fn load_from_json(json: &str) -> Result<Options> {
    let opts = serde_json::from_str(json)?;
    Ok(opts)
}

pub fn load_file(path: &Path) -> Result<Options> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    load_from_json(&json).with_context(|| format!("Parsing {}", path.display()))
}

/// Option file (if any) overlaid with the command line.
pub fn from_cli(cli: &Cli) -> Result<Options> {
    let mut opts = match &cli.options_file {
        Some(path) => load_file(path)?,
        None => Options::default(),
    };
    apply_cli(&mut opts, cli);
    Ok(opts)
}

fn apply_cli(opts: &mut Options, cli: &Cli) {
    let scalars = [
        (&mut opts.application_class_name, &cli.application_class),
        (&mut opts.framework_home, &cli.framework_home),
        (&mut opts.resource_prefix_override, &cli.resource_prefix),
    ];
    for (slot, value) in scalars {
        if let Some(v) = value.as_ref().filter(|v| !v.is_empty()) {
            *slot = v.clone();
        }
    }

    opts.extra_defines.extend(cli.defines.iter().cloned());
    opts.paths_to_load.extend(cli.load_dirs.iter().cloned());
    opts.libs_to_load.extend(cli.libs.iter().cloned());
    opts.inputs.extend(cli.inputs.iter().cloned());

    opts.verify_diagnostics |= cli.verify;
    if let Some(platform) = cli.platform {
        opts.platform = platform;
    }
}
