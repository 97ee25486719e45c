// Copyright 2026 Oxide Computer Company

//! Access to a single standard stream of a process.
//!
//! Tools that read Git objects often spawn `git` and consume its output.
//! [`ProcessStreamAdapter`] lets such code hand out "the process's stdout"
//! (or stderr, or stdin) as a plain [`Read`](std::io::Read) or
//! [`Write`](std::io::Write) implementation, without also handing out the
//! ability to wait on or kill the process. The owner of the process handle
//! stays responsible for its lifetime.
//!
//! # Examples
//!
//! ```no_run
//! use git_objects::ObjectType;
//! use git_objects_process::ProcessStreamAdapter;
//! use std::{
//!     io::Read,
//!     process::{Command, Stdio},
//! };
//!
//! let mut child = Command::new("git")
//!     .args(["cat-file", "-t", "HEAD"])
//!     .stdout(Stdio::piped())
//!     .spawn()
//!     .expect("git spawned");
//!
//! let mut output = String::new();
//! ProcessStreamAdapter::from_name(&mut child, "stdout")
//!     .expect("stdout is piped")
//!     .read_to_string(&mut output)
//!     .expect("read stdout");
//! child.wait().expect("git exited");
//!
//! let ty: ObjectType = output.trim_end().parse().expect("known type");
//! assert_eq!(ty, ObjectType::Commit);
//! ```

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/git-objects-process/0.1.0")]

mod adapter;
mod errors;
mod streams;

pub use adapter::ProcessStreamAdapter;
pub use errors::{NoSuchStreamError, StreamSelectError, UnknownStreamNameError};
pub use streams::{ProcessStreams, StreamName};
