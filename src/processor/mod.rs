//! The functional core: discovery, staged execution, diagnostics.
//!
//! Every entry point takes the interpreter session by reference; nothing in
//! here keeps hold of it between calls.
pub mod classify;
pub mod driver;
pub mod inputs;
pub mod path;
pub mod reconcile;
pub mod scanner;

pub use driver::bootstrap;
pub use reconcile::reconcile;
pub use scanner::{enumerate_sources, scan};
