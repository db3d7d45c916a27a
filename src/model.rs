// fixed extension sets; matching is exact and case-sensitive
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "c"];
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hpp"];

/// Extensions reported by the plain enumeration (no include registration).
pub const LISTING_EXTENSIONS: &[&str] = &["cpp", "h", "cc", "hpp", "c"];

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ─────────────────────────────────────────────────────
/// Platform descriptor
/// ─────────────────────────────────────────────────────
///
/// Chosen once at startup. Everything that differs between targets
/// (runtime artifact name, standard-library shims) hangs off this value so
/// the synthesizer and driver never branch on the host they run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[value(name = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Shared runtime library, relative to the framework home.
    pub fn runtime_artifact(self) -> &'static str {
        match self {
            Platform::Windows => "bin/Urho3D.dll",
            Platform::MacOs => "lib/LibUrho3D.dylib",
            Platform::Linux => "lib/libUrho3D.so",
        }
    }

    /// Declarations the target's standard library expects but the JIT
    /// cannot resolve on its own.
    pub fn shims(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &[
                "extern \"C\"  void __cdecl __std_reverse_trivially_swappable_8(void* _First, void* _Last) noexcept {}",
                "extern \"C\"  void __cdecl __std_reverse_trivially_swappable_4(void* _First, void* _Last) noexcept {}",
            ],
            Platform::MacOs | Platform::Linux => &[],
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

/// What a discovered entry is. Decided once while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Directory,
    CompilationUnit,
    Header,
    Other,
}

/// A subtree whose iteration failed; its results are truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: String,
    pub message: String,
}

/// Output of one recursive scan.
///
/// Both sequences keep traversal order; the synthesizer embeds that order
/// literally, so the walk is sorted by file name to stay reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub compilation_units: Vec<String>,
    pub headers: Vec<String>,
    /// Directories registered as include paths, root first.
    pub directories: Vec<String>,
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    /// Append another scan, keeping both orders.
    pub fn extend(&mut self, other: ScanResult) {
        self.compilation_units.extend(other.compilation_units);
        self.headers.extend(other.headers);
        self.directories.extend(other.directories);
        self.failures.extend(other.failures);
    }
}

/// Everything the code synthesizer needs, assembled once per bootstrap.
#[derive(Debug, Clone)]
pub struct SynthesisContext {
    pub application_class: String,
    pub defines: Vec<String>,
    /// Already normalized; may be empty.
    pub resource_prefix: String,
    pub platform: Platform,
    pub scan: ScanResult,
}

/// The fixed sequence of submissions a bootstrap performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Definitions,
    Context,
    Application,
    Run,
}

impl Stage {
    /// Submission order. Not configurable.
    pub const SEQUENCE: [Stage; 4] = [
        Stage::Definitions,
        Stage::Context,
        Stage::Application,
        Stage::Run,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Definitions => "definitions",
            Stage::Context => "context",
            Stage::Application => "application",
            Stage::Run => "run",
        };
        f.write_str(name)
    }
}
