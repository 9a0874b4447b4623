use std::{
    num::ParseIntError,
    str::{FromStr, SplitWhitespace},
};

use derive_more::Display;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// 1-based index of a clone, as written in a query.
pub type CloneIndex = usize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
pub enum Verb {
    #[display(fmt = "learn")]
    Learn,
    #[display(fmt = "rollback")]
    Rollback,
    #[display(fmt = "relearn")]
    Relearn,
    #[display(fmt = "clone")]
    Clone,
    #[display(fmt = "check")]
    Check,
}

impl FromStr for Verb {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        match s {
            "learn" => Ok(Self::Learn),
            "rollback" => Ok(Self::Rollback),
            "relearn" => Ok(Self::Relearn),
            "clone" => Ok(Self::Clone),
            "check" => Ok(Self::Check),
            _ => Err(ParseError::UnknownVerb(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("Got an empty query")]
    EmptyQuery,
    #[error("Unknown verb `{0}`")]
    UnknownVerb(String),
    #[error("`{verb}` expects an argument <{name}>")]
    MissingArgument { verb: Verb, name: &'static str },
    #[error("Argument <{name}> of `{verb}` should be an integer, but got `{text}`")]
    InvalidArgument {
        verb: Verb,
        name: &'static str,
        text: String,
        source: ParseIntError,
    },
}

/// A single parsed query line.
///
/// The `Display` form is the canonical text of the query, so
/// `parse_query(&q.to_string()) == Ok(q)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
pub enum Query {
    #[display(fmt = "learn {} {}", clone, program)]
    Learn { clone: CloneIndex, program: i64 },
    #[display(fmt = "rollback {}", clone)]
    Rollback { clone: CloneIndex },
    #[display(fmt = "relearn {}", clone)]
    Relearn { clone: CloneIndex },
    #[display(fmt = "clone {}", clone)]
    Clone { clone: CloneIndex },
    #[display(fmt = "check {}", clone)]
    Check { clone: CloneIndex },
}

impl Query {
    pub fn verb(&self) -> Verb {
        match self {
            Query::Learn { .. } => Verb::Learn,
            Query::Rollback { .. } => Verb::Rollback,
            Query::Relearn { .. } => Verb::Relearn,
            Query::Clone { .. } => Verb::Clone,
            Query::Check { .. } => Verb::Check,
        }
    }

    pub fn clone_index(&self) -> CloneIndex {
        match *self {
            Query::Learn { clone, .. }
            | Query::Rollback { clone }
            | Query::Relearn { clone }
            | Query::Clone { clone }
            | Query::Check { clone } => clone,
        }
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse_query(s)
    }
}

struct Arguments<'a> {
    verb: Verb,
    words: SplitWhitespace<'a>,
}

impl Arguments<'_> {
    fn next<T: FromStr<Err = ParseIntError>>(&mut self, name: &'static str) -> ParseResult<T> {
        let verb = self.verb;
        let text = self
            .words
            .next()
            .ok_or(ParseError::MissingArgument { verb, name })?;
        text.parse().map_err(|source| ParseError::InvalidArgument {
            verb,
            name,
            text: text.to_string(),
            source,
        })
    }
}

/// Parses a query of the form `<verb> <clone> [<program>]`.
///
/// Words are separated by any amount of whitespace. Arguments after the ones
/// the verb needs are ignored.
pub fn parse_query(input: &str) -> ParseResult<Query> {
    let mut words = input.split_whitespace();
    let verb: Verb = words.next().ok_or(ParseError::EmptyQuery)?.parse()?;
    let mut args = Arguments { verb, words };
    let clone = args.next("clone")?;
    let query = match verb {
        Verb::Learn => Query::Learn {
            clone,
            program: args.next("program")?,
        },
        Verb::Rollback => Query::Rollback { clone },
        Verb::Relearn => Query::Relearn { clone },
        Verb::Clone => Query::Clone { clone },
        Verb::Check => Query::Check { clone },
    };
    Ok(query)
}
