use std::io;

use thiserror::Error;

/// Failures that end the session. Everything else is reported to the
/// operator at the point of detection and the loop keeps going.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("could not read input: {0}")]
    ReadLine(#[source] io::Error),
    #[error("could not write output: {0}")]
    WriteOutput(#[source] io::Error),
}
