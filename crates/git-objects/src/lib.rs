// Copyright 2026 Oxide Computer Company

//! Parsing types for Git objects.
//!
//! This crate provides small building blocks for working with the Git object
//! model without depending on a full Git implementation:
//!
//! - [`ObjectType`] resolves the four object type names (`commit`, `tag`,
//!   `blob` and `tree`) to a closed enum.
//! - [`parse_actor_and_date`] and [`ActorLine`] parse the `author`,
//!   `committer` and `tagger` headers found in commit and tag objects into
//!   an [`Actor`] and a timestamp.
//!
//! # Examples
//!
//! ```
//! use git_objects::{Actor, ObjectType, parse_actor_and_date};
//!
//! // Output of `git cat-file -t <object>`.
//! let ty: ObjectType = "commit".parse().unwrap();
//! assert_eq!(ty, ObjectType::Commit);
//!
//! // A header line from `git cat-file -p <commit>`.
//! let (actor, epoch) = parse_actor_and_date(
//!     "author Tom Preston-Werner <tom@mojombo.com> 1191999972 -0700",
//! )
//! .unwrap();
//! assert_eq!(actor, Actor::new("Tom Preston-Werner", "tom@mojombo.com"));
//! assert_eq!(epoch, 1191999972);
//! ```
//!
//! # Related crates
//!
//! To read object data from a running `git` process, see
//! `git-objects-process`, which exposes a single stream of a child process
//! as a plain reader or writer.

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/git-objects/0.1.0")]

mod actor;
mod errors;
mod object_type;

pub use actor::{Actor, ActorLine, parse_actor_and_date, parse_actor_line};
pub use errors::{
    ActorLineParseError, ActorParseError, UnknownObjectTypeError,
};
pub use object_type::{ObjectType, object_type_by_name};
