//! Diagnostic logging, gated entirely behind `RUST_LOG`.
//!
//! Output always goes to stderr and defaults to silent, so it never
//! contaminates the merged stdout/stderr stream the shell's own output
//! contract is matched against.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
