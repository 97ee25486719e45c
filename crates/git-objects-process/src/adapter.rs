// Copyright 2026 Oxide Computer Company

//! A reader/writer over a single stream of a process.

use crate::{NoSuchStreamError, ProcessStreams, StreamName, StreamSelectError};
use std::{
    fmt,
    io::{self, BufRead, BufReader, Read, Write},
};

/// Exposes one standard stream of a process as a plain reader or writer.
///
/// The adapter borrows the stream out of a process handle and forwards
/// every I/O call to it, returning the stream's results (including errors)
/// unchanged. Callers that only need "the output of this process" can be
/// handed an adapter without gaining access to the process itself.
///
/// The adapter never waits on, kills or reaps the process; that remains the
/// job of whoever owns the handle.
///
/// Reading from `stdin`, or writing to `stdout` or `stderr`, fails with
/// [`io::ErrorKind::Unsupported`].
///
/// # Examples
///
/// ```no_run
/// use git_objects_process::{ProcessStreamAdapter, StreamName};
/// use std::{
///     io::Read,
///     process::{Command, Stdio},
/// };
///
/// let mut child = Command::new("git")
///     .args(["cat-file", "-t", "HEAD"])
///     .stdout(Stdio::piped())
///     .spawn()
///     .expect("git spawned");
///
/// let mut stdout = ProcessStreamAdapter::new(&mut child, StreamName::Stdout)
///     .expect("stdout is piped");
/// let mut output = String::new();
/// stdout.read_to_string(&mut output).expect("read stdout");
/// drop(stdout);
///
/// child.wait().expect("git exited");
/// ```
pub struct ProcessStreamAdapter<'p, P: ProcessStreams> {
    slot: Slot<'p, P>,
}

enum Slot<'p, P: ProcessStreams> {
    Stdin(&'p mut Option<P::Stdin>),
    Stdout(&'p mut Option<P::Stdout>),
    Stderr(&'p mut Option<P::Stderr>),
}

impl<'p, P: ProcessStreams> ProcessStreamAdapter<'p, P> {
    /// Selects the stream `name` of `process`.
    ///
    /// The stream is resolved once, here. Returns an error if the process
    /// does not expose it.
    pub fn new(
        process: &'p mut P,
        name: StreamName,
    ) -> Result<Self, NoSuchStreamError> {
        let slot = match name {
            StreamName::Stdin => {
                Slot::Stdin(require(process.stdin_slot(), name)?)
            }
            StreamName::Stdout => {
                Slot::Stdout(require(process.stdout_slot(), name)?)
            }
            StreamName::Stderr => {
                Slot::Stderr(require(process.stderr_slot(), name)?)
            }
        };
        Ok(ProcessStreamAdapter { slot })
    }

    /// Selects a stream by its name (`"stdin"`, `"stdout"` or `"stderr"`).
    pub fn from_name(
        process: &'p mut P,
        name: &str,
    ) -> Result<Self, StreamSelectError> {
        let name: StreamName = name.parse()?;
        Ok(Self::new(process, name)?)
    }

    /// Returns the name of the selected stream.
    pub fn name(&self) -> StreamName {
        match self.slot {
            Slot::Stdin(_) => StreamName::Stdin,
            Slot::Stdout(_) => StreamName::Stdout,
            Slot::Stderr(_) => StreamName::Stderr,
        }
    }

    /// Returns an iterator over the lines of the stream.
    ///
    /// Line endings are stripped, as with [`BufRead::lines`].
    pub fn lines(self) -> io::Lines<BufReader<Self>> {
        BufReader::new(self).lines()
    }

    /// Closes the stream by dropping it.
    ///
    /// Closing `stdin` signals end-of-file to the process. Afterwards the
    /// process handle no longer exposes the stream. The process itself is
    /// left running.
    pub fn close(self) {
        match self.slot {
            Slot::Stdin(slot) => drop(slot.take()),
            Slot::Stdout(slot) => drop(slot.take()),
            Slot::Stderr(slot) => drop(slot.take()),
        }
    }
}

fn require<S>(
    slot: &mut Option<S>,
    stream: StreamName,
) -> Result<&mut Option<S>, NoSuchStreamError> {
    if slot.is_some() { Ok(slot) } else { Err(NoSuchStreamError { stream }) }
}

/// Returns the error for I/O on a stream that is no longer in its slot.
fn closed(name: StreamName) -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, format!("{name} is closed"))
}

fn unsupported(name: StreamName, op: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{name} does not support {op}"),
    )
}

impl<P: ProcessStreams> Read for ProcessStreamAdapter<'_, P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let name = self.name();
        match &mut self.slot {
            Slot::Stdout(Some(stream)) => stream.read(buf),
            Slot::Stderr(Some(stream)) => stream.read(buf),
            Slot::Stdout(None) | Slot::Stderr(None) => Err(closed(name)),
            Slot::Stdin(_) => Err(unsupported(name, "reading")),
        }
    }
}

impl<P: ProcessStreams> Write for ProcessStreamAdapter<'_, P> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let name = self.name();
        match &mut self.slot {
            Slot::Stdin(Some(stream)) => stream.write(buf),
            Slot::Stdin(None) => Err(closed(name)),
            Slot::Stdout(_) | Slot::Stderr(_) => {
                Err(unsupported(name, "writing"))
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let name = self.name();
        match &mut self.slot {
            Slot::Stdin(Some(stream)) => stream.flush(),
            Slot::Stdin(None) => Err(closed(name)),
            Slot::Stdout(_) | Slot::Stderr(_) => {
                Err(unsupported(name, "writing"))
            }
        }
    }
}

impl<P: ProcessStreams> fmt::Debug for ProcessStreamAdapter<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessStreamAdapter")
            .field("stream", &self.name())
            .finish_non_exhaustive()
    }
}
