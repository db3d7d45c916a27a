//! Staged bootstrap of the proxy application.
//!
//! Preconditions are checked before the interpreter is asked to compile
//! anything; after that each stage must succeed before the next one is
//! submitted. Nothing is rolled back on failure, definitions from a failed
//! stage stay loaded in the session.

use crate::error::BootstrapError;
use crate::interp::Interpreter;
use crate::model::{Platform, ScanResult, Stage, SynthesisContext};
use crate::options::Options;
use crate::processor::{classify, path, scanner};
use crate::writer::cpp::{self, Unit};
use std::path::Path;

/// Include directories every framework installation must provide.
pub const REQUIRED_INCLUDE_DIRS: &[&str] = &[
    "include",
    "include/Urho3D",
    "include/Urho3D/ThirdParty",
    "include/Urho3D/ThirdParty/Bullet",
];

pub const CONTEXT_STATEMENT: &str =
    "Urho3D::SharedPtr<Urho3D::Context> context(new Urho3D::Context());";
pub const APPLICATION_STATEMENT: &str = "Urho3D::SharedPtr<Urho3DClingProxyApplication> application(new Urho3DClingProxyApplication(context));";
pub const RUN_STATEMENT: &str = "application->Run();";

/// Validate the framework home and wire it into the session.
///
/// Returns the normalized home. Fails on the first missing directory or
/// runtime artifact, naming it.
pub fn prepare_home(
    interp: &mut dyn Interpreter,
    home: &str,
    platform: Platform,
) -> Result<String, BootstrapError> {
    let home = path::normalize(home);
    if !Path::new(&home).is_dir() {
        return Err(BootstrapError::MissingHome(home));
    }

    for sub in REQUIRED_INCLUDE_DIRS {
        let dir = path::join(&home, sub);
        if !Path::new(&dir).is_dir() {
            return Err(BootstrapError::MissingIncludeDir(dir));
        }
        interp.add_include_path(&dir);
    }

    let runtime = path::join(&home, platform.runtime_artifact());
    if !classify::is_file_like(Path::new(&runtime)) || !interp.load_file(&runtime) {
        return Err(BootstrapError::MissingRuntime(runtime));
    }

    Ok(home)
}

/// Explicit override, else `<home>/bin`, else empty.
pub fn resource_prefix(opts: &Options, home: &str) -> String {
    if !opts.resource_prefix_override.is_empty() {
        path::normalize(&opts.resource_prefix_override)
    } else if !home.is_empty() {
        path::join(home, "bin")
    } else {
        String::new()
    }
}

/// Scan every requested tree; entries that are not directories are skipped.
pub fn scan_all(interp: &mut dyn Interpreter, roots: &[String]) -> ScanResult {
    let mut all = ScanResult::default();
    for root in roots {
        let dir = Path::new(root);
        if !dir.is_dir() {
            log::warn!("{root} is not a directory, skipping");
            continue;
        }
        all.extend(scanner::scan(interp, dir));
    }
    all
}

/// Text submitted for `stage`.
pub fn stage_text(stage: Stage, unit: &Unit) -> String {
    match stage {
        Stage::Definitions => unit.to_string(),
        Stage::Context => CONTEXT_STATEMENT.to_string(),
        Stage::Application => APPLICATION_STATEMENT.to_string(),
        Stage::Run => RUN_STATEMENT.to_string(),
    }
}

/// Submit the fixed stage sequence, stopping at the first failure.
pub fn run_stages(interp: &mut dyn Interpreter, unit: &Unit) -> Result<(), BootstrapError> {
    for stage in Stage::SEQUENCE {
        log::info!("submitting {stage} stage");
        let text = stage_text(stage, unit);
        if interp.submit(&text).is_failure() {
            log::error!("{stage} stage failed");
            return Err(BootstrapError::StageFailed { stage });
        }
    }
    Ok(())
}

/// Full bootstrap: preconditions, scan, synthesis, staged execution.
pub fn bootstrap(interp: &mut dyn Interpreter, opts: &Options) -> Result<(), BootstrapError> {
    let home = if opts.framework_home.is_empty() {
        String::new()
    } else {
        prepare_home(interp, &opts.framework_home, opts.platform)?
    };

    let scan = scan_all(interp, &opts.paths_to_load);

    let ctx = SynthesisContext {
        application_class: opts.application_class_name.clone(),
        defines: opts.extra_defines.clone(),
        resource_prefix: resource_prefix(opts, &home),
        platform: opts.platform,
        scan,
    };
    let unit = cpp::synthesize(&ctx);

    run_stages(interp, &unit)
}
