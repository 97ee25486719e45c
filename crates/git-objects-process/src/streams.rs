// Copyright 2026 Oxide Computer Company

//! Process handles and the streams they expose.

use crate::UnknownStreamNameError;
use std::{
    fmt,
    io::{Read, Write},
    process::{Child, ChildStderr, ChildStdin, ChildStdout},
    str::FromStr,
};

/// The name of one of a process's standard streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamName {
    /// Standard input (writable).
    Stdin,
    /// Standard output (readable).
    Stdout,
    /// Standard error (readable).
    Stderr,
}

impl StreamName {
    /// Returns the conventional name of this stream.
    pub fn as_str(self) -> &'static str {
        match self {
            StreamName::Stdin => "stdin",
            StreamName::Stdout => "stdout",
            StreamName::Stderr => "stderr",
        }
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamName {
    type Err = UnknownStreamNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdin" => Ok(StreamName::Stdin),
            "stdout" => Ok(StreamName::Stdout),
            "stderr" => Ok(StreamName::Stderr),
            _ => Err(UnknownStreamNameError { name: s.to_owned() }),
        }
    }
}

/// A process handle that exposes its standard streams.
///
/// Each stream lives in an `Option` slot: `None` means the process does not
/// expose that stream (for a [`Child`], the stream was not piped or has
/// been taken).
///
/// Implemented for [`std::process::Child`].
pub trait ProcessStreams {
    /// The writable standard input stream.
    type Stdin: Write;
    /// The readable standard output stream.
    type Stdout: Read;
    /// The readable standard error stream.
    type Stderr: Read;

    /// Returns the standard input slot.
    fn stdin_slot(&mut self) -> &mut Option<Self::Stdin>;

    /// Returns the standard output slot.
    fn stdout_slot(&mut self) -> &mut Option<Self::Stdout>;

    /// Returns the standard error slot.
    fn stderr_slot(&mut self) -> &mut Option<Self::Stderr>;
}

impl ProcessStreams for Child {
    type Stdin = ChildStdin;
    type Stdout = ChildStdout;
    type Stderr = ChildStderr;

    fn stdin_slot(&mut self) -> &mut Option<ChildStdin> {
        &mut self.stdin
    }

    fn stdout_slot(&mut self) -> &mut Option<ChildStdout> {
        &mut self.stdout
    }

    fn stderr_slot(&mut self) -> &mut Option<ChildStderr> {
        &mut self.stderr
    }
}
