// Copyright 2026 Oxide Computer Company

//! Actors and the `author`/`committer` lines that carry them.

use crate::{ActorLineParseError, ActorParseError};
use regex::Regex;
use std::{fmt, str::FromStr, sync::LazyLock};

/// Matches `label actor epoch tz`.
///
/// The actor group is greedy, so the epoch is the *last* run of digits that
/// is surrounded by spaces. Names and emails containing digits are left
/// intact.
static ACTOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?) (.*) ([0-9]+) (.*)$")
        .expect("actor line pattern is valid")
});

/// A person who authored or committed a change, identified by a name and
/// an email address.
///
/// # Examples
///
/// ```
/// use git_objects::Actor;
///
/// let actor: Actor = "Tom Preston-Werner <tom@mojombo.com>".parse().unwrap();
/// assert_eq!(actor.name(), "Tom Preston-Werner");
/// assert_eq!(actor.email(), "tom@mojombo.com");
/// assert_eq!(actor.to_string(), "Tom Preston-Werner <tom@mojombo.com>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Actor {
    name: String,
    email: String,
}

impl Actor {
    /// Creates a new `Actor` from a name and an email address.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Actor { name: name.into(), email: email.into() }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, without the surrounding `<>`.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl FromStr for Actor {
    type Err = ActorParseError;

    /// Parses `Name <email>`.
    ///
    /// The name is everything before the first `<`, trimmed. The email is
    /// everything between that `<` and the last `>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let missing = || ActorParseError::MissingEmail(s.to_owned());
        let open = s.find('<').ok_or_else(missing)?;
        let close = s.rfind('>').filter(|&i| i > open).ok_or_else(missing)?;
        Ok(Actor::new(s[..open].trim(), &s[open + 1..close]))
    }
}

/// A parsed actor line, such as the `author` or `committer` header of a
/// commit or the `tagger` header of a tag.
///
/// The expected format is `label name <email> epoch tz`, for example:
///
/// ```text
/// author Tom Preston-Werner <tom@mojombo.com> 1191999972 -0700
/// ```
///
/// A single trailing newline is accepted, so lines yielded by a line
/// reader can be parsed directly.
///
/// # Examples
///
/// ```
/// use git_objects::{Actor, ActorLine};
///
/// let line: ActorLine =
///     "committer Jane Doe <jane@example.com> 1700000000 +0130\n"
///         .parse()
///         .unwrap();
/// assert_eq!(line.label(), "committer");
/// assert_eq!(line.actor(), &Actor::new("Jane Doe", "jane@example.com"));
/// assert_eq!(line.epoch(), 1700000000);
/// assert_eq!(line.timezone(), "+0130");
/// assert_eq!(line.tz_offset_seconds(), Some(5400));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActorLine {
    label: String,
    actor: Actor,
    epoch: i64,
    timezone: String,
}

impl ActorLine {
    /// Returns the leading label (e.g. `author`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the actor.
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Consumes the line, returning the actor and epoch seconds.
    pub fn into_actor_and_date(self) -> (Actor, i64) {
        (self.actor, self.epoch)
    }

    /// Returns the timestamp as seconds since the Unix epoch.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Returns the raw text after the epoch, normally a `+HHMM` or `-HHMM`
    /// timezone offset.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Interprets [`timezone`](Self::timezone) as a `[+-]HHMM` offset and
    /// returns it in seconds east of UTC.
    ///
    /// Returns `None` if the timezone is not in that form.
    pub fn tz_offset_seconds(&self) -> Option<i32> {
        let tz = self.timezone.as_bytes();
        let [sign, digits @ ..] = tz else {
            return None;
        };
        if digits.len() != 4 || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let value = |i: usize| i32::from(digits[i] - b'0');
        let hours = value(0) * 10 + value(1);
        let minutes = value(2) * 10 + value(3);
        let offset = hours * 3600 + minutes * 60;
        match *sign {
            b'+' => Some(offset),
            b'-' => Some(-offset),
            _ => None,
        }
    }
}

impl fmt::Display for ActorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.label, self.actor, self.epoch, self.timezone
        )
    }
}

impl FromStr for ActorLine {
    type Err = ActorLineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ActorLineParseError::EmptyInput);
        }
        let line = strip_line_ending(s);

        let caps = ACTOR_LINE
            .captures(line)
            .ok_or_else(|| ActorLineParseError::InvalidFormat(s.to_owned()))?;
        // All four groups are mandatory in the pattern, so indexing cannot
        // fail once the line has matched.
        let (label, actor, epoch, timezone) =
            (&caps[1], &caps[2], &caps[3], &caps[4]);

        let epoch = epoch.parse::<i64>().map_err(|error| {
            ActorLineParseError::InvalidEpoch { epoch: epoch.to_owned(), error }
        })?;
        let actor: Actor = actor.parse()?;

        Ok(ActorLine {
            label: label.to_owned(),
            actor,
            epoch,
            timezone: timezone.to_owned(),
        })
    }
}

/// Parses an actor line, keeping the label and timezone.
///
/// Equivalent to `line.parse::<ActorLine>()`.
pub fn parse_actor_line(line: &str) -> Result<ActorLine, ActorLineParseError> {
    line.parse()
}

/// Parses the actor and timestamp out of a line like:
///
/// ```text
/// author Tom Preston-Werner <tom@mojombo.com> 1191999972 -0700
/// ```
///
/// Returns the actor and the timestamp in seconds since the Unix epoch. The
/// label and timezone are discarded; use [`parse_actor_line`] to keep them.
///
/// # Examples
///
/// ```
/// use git_objects::parse_actor_and_date;
///
/// let (actor, epoch) = parse_actor_and_date(
///     "author Tom Preston-Werner <tom@mojombo.com> 1191999972 -0700",
/// )
/// .unwrap();
/// assert_eq!(actor.name(), "Tom Preston-Werner");
/// assert_eq!(actor.email(), "tom@mojombo.com");
/// assert_eq!(epoch, 1191999972);
/// ```
pub fn parse_actor_and_date(
    line: &str,
) -> Result<(Actor, i64), ActorLineParseError> {
    Ok(parse_actor_line(line)?.into_actor_and_date())
}

/// Strips a single trailing `\n` or `\r\n`.
fn strip_line_ending(s: &str) -> &str {
    match s.strip_suffix('\n') {
        Some(s) => s.strip_suffix('\r').unwrap_or(s),
        None => s,
    }
}
