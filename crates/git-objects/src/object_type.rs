// Copyright 2026 Oxide Computer Company

//! Git object types.

use crate::UnknownObjectTypeError;
use std::{fmt, str::FromStr};

/// The type of a Git object.
///
/// This is the closed set of object kinds stored in a Git object database.
/// A value of this type describes which kind of object to construct; it
/// does not hold any object data itself.
///
/// # Parsing
///
/// Resolve from a type name using [`FromStr`] or [`object_type_by_name`].
/// Names are matched exactly and case-sensitively:
///
/// ```
/// use git_objects::ObjectType;
///
/// let ty: ObjectType = "tree".parse().unwrap();
/// assert_eq!(ty, ObjectType::Tree);
/// assert!("Tree".parse::<ObjectType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectType {
    /// A commit object.
    Commit,
    /// An annotated tag object.
    Tag,
    /// A blob (file contents).
    Blob,
    /// A tree (directory listing).
    Tree,
}

impl ObjectType {
    /// All object types, in the order Git numbers them.
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Commit,
        ObjectType::Tree,
        ObjectType::Blob,
        ObjectType::Tag,
    ];

    /// Returns the canonical name of this object type, as used in object
    /// headers and by `git cat-file -t`.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Commit => "commit",
            ObjectType::Tag => "tag",
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
        }
    }
}

/// Returns the object type for `name`.
///
/// `name` must be exactly one of `commit`, `tag`, `blob` or `tree`. Any
/// other string, including case variants and strings with surrounding
/// whitespace, returns an [`UnknownObjectTypeError`].
pub fn object_type_by_name(
    name: &str,
) -> Result<ObjectType, UnknownObjectTypeError> {
    match name {
        "commit" => Ok(ObjectType::Commit),
        "tag" => Ok(ObjectType::Tag),
        "blob" => Ok(ObjectType::Blob),
        "tree" => Ok(ObjectType::Tree),
        _ => Err(UnknownObjectTypeError { name: name.to_owned() }),
    }
}

impl FromStr for ObjectType {
    type Err = UnknownObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        object_type_by_name(s)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
