use crate::model::Platform;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Files or statements to run when no application class is given
    pub inputs: Vec<String>,

    /// Application base class; enables the staged bootstrap
    #[arg(long = "app", value_name = "CLASS")]
    pub application_class: Option<String>,

    /// Framework installation root
    #[arg(long = "home", value_name = "DIR")]
    pub framework_home: Option<String>,

    /// Resource directory handed to the generated application
    #[arg(long = "resource-prefix", value_name = "DIR")]
    pub resource_prefix: Option<String>,

    /// Extra macro, `NAME` or `NAME=VALUE`
    #[arg(short = 'D', long = "define", value_name = "MACRO")]
    pub defines: Vec<String>,

    /// Source tree to scan and include
    #[arg(long = "load-dir", value_name = "DIR")]
    pub load_dirs: Vec<String>,

    /// Library or file to load before anything else
    #[arg(short = 'l', long = "lib", value_name = "FILE")]
    pub libs: Vec<String>,

    /// Check expected-diagnostic annotations
    #[arg(long)]
    pub verify: bool,

    /// Target platform descriptor (defaults to the host)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// JSON option file
    #[arg(long = "options", value_name = "FILE")]
    pub options_file: Option<PathBuf>,

    /// Print every source file under each --load-dir and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Write the submitted text here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub transcript: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
