pub mod cli;
pub mod error;
pub mod interp;
pub mod model;
pub mod options;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use error::BootstrapError;
use interp::{Interpreter, Transcript};
use options::Options;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    // 1. ── Options ────────────────────────────────────────────────────
    let opts = options::from_cli(&args).with_context(|| "Loading options")?;

    if args.list_sources {
        return list_sources(&opts.paths_to_load).with_context(|| "Listing sources");
    }

    // 2. ── Session ────────────────────────────────────────────────────
    let sink: Box<dyn Write> = match &args.transcript {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };
    let mut session = Transcript::new(sink, opts.verify_diagnostics);

    // 3. ── Run ────────────────────────────────────────────────────────
    run_session(&mut session, &opts)
}

/// Drive one session: setup, then either the staged bootstrap or the
/// plain inputs, then the diagnostic verdict.
pub fn run_session(interp: &mut dyn Interpreter, opts: &Options) -> anyhow::Result<()> {
    interp.add_include_path(".");
    for lib in &opts.libs_to_load {
        if !interp.load_file(lib) {
            log::warn!("could not load {lib}");
        }
    }

    if opts.wants_bootstrap() {
        return processor::bootstrap(interp, opts).with_context(|| {
            format!("Bootstrapping {}", opts.application_class_name)
        });
    }

    if opts.is_interactive() {
        log::info!("no application class and no inputs, nothing to run");
    } else {
        processor::inputs::run_inputs(interp, &opts.inputs)
            .with_context(|| "Processing inputs")?;
    }

    match processor::reconcile(interp) {
        0 => Ok(()),
        errors => Err(BootstrapError::DiagnosticErrors(errors).into()),
    }
}

fn list_sources(roots: &[String]) -> io::Result<()> {
    let listings: Vec<_> = roots
        .iter()
        .filter(|root| Path::new(root).is_dir())
        .map(|root| writer::listing::Listing {
            root: root.clone(),
            files: processor::enumerate_sources(Path::new(root)),
        })
        .collect();
    writer::listing::emit(&listings, io::stdout().lock())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
