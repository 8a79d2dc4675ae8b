//! Error taxonomy for option discovery, dispatch, and the run loop.

use thiserror::Error;

/// Everything that can go wrong between registration and the exit code.
///
/// `Usage`, `Interrupted`, and `Exit` are routed by the runner to the help
/// output, the interrupt hook, and the process exit code respectively.
/// `Fault` wraps any other error a handler or the entry point bubbles up.
#[derive(Debug, Error)]
pub enum Error {
    /// Registration used the option name reserved for the built-in short help.
    #[error("reserved option name: {0}")]
    ReservedName(String),

    /// An alias referred to an option name that was never registered.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The command line was rejected before the entry point ran.
    #[error("{0}")]
    Usage(String),

    /// A keyboard interrupt surfaced from a handler or the entry point.
    #[error("interrupted")]
    Interrupted,

    /// An explicit process-exit request carrying its status code.
    #[error("exit with status {0}")]
    Exit(i32),

    /// Any other fault raised by a handler or the entry point.
    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}
