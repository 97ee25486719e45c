// Copyright 2026 Oxide Computer Company

//! Error types for selecting process streams.

use crate::StreamName;
use thiserror::Error;

/// An error returned when a stream name is not `stdin`, `stdout` or
/// `stderr`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "unknown stream name: expected \"stdin\", \"stdout\" or \"stderr\", \
     got {name:?}"
)]
#[non_exhaustive]
pub struct UnknownStreamNameError {
    /// The name that failed to parse.
    pub name: String,
}

/// An error returned when the process does not expose the requested stream.
///
/// For a [`std::process::Child`], this happens when the stream was not
/// configured with [`Stdio::piped`](std::process::Stdio::piped), or when it
/// has already been taken or closed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("process has no {stream} stream (was it piped?)")]
#[non_exhaustive]
pub struct NoSuchStreamError {
    /// The stream that was requested.
    pub stream: StreamName,
}

/// An error that occurs while selecting a stream by name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamSelectError {
    /// The name does not refer to a known stream.
    #[error(transparent)]
    UnknownName(#[from] UnknownStreamNameError),

    /// The process does not expose the named stream.
    #[error(transparent)]
    NoSuchStream(#[from] NoSuchStreamError),
}
