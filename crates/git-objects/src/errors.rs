// Copyright 2026 Oxide Computer Company

//! Error types for object type resolution and actor line parsing.

use std::num::ParseIntError;
use thiserror::Error;

/// An error returned when resolving an [`ObjectType`](crate::ObjectType)
/// from a name that is not one of `commit`, `tag`, `blob` or `tree`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot handle unknown object type: {name:?}")]
#[non_exhaustive]
pub struct UnknownObjectTypeError {
    /// The name that failed to resolve.
    pub name: String,
}

/// An error that occurs while parsing an [`Actor`](crate::Actor) from a
/// `Name <email>` string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActorParseError {
    /// The string has no `<...>` email delimiters.
    #[error("invalid actor: expected 'Name <email>', got {0:?}")]
    MissingEmail(String),
}

/// An error that occurs while parsing an
/// [`ActorLine`](crate::ActorLine), e.g. an `author` or `committer` header.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActorLineParseError {
    /// The input was empty or contained only whitespace.
    #[error("actor line is empty")]
    EmptyInput,

    /// The line did not have the `label name <email> epoch tz` shape.
    #[error(
        "invalid actor line: expected 'label name <email> epoch tz', \
         got {0:?}"
    )]
    InvalidFormat(String),

    /// The epoch digits do not fit in a signed 64-bit integer.
    #[error("epoch {epoch:?} is out of range")]
    InvalidEpoch {
        /// The digit run that failed to convert.
        epoch: String,
        /// The underlying integer conversion error.
        #[source]
        error: ParseIntError,
    },

    /// The actor portion of the line was invalid.
    #[error("invalid actor in actor line")]
    InvalidActor(#[from] ActorParseError),
}
