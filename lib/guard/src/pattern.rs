//! The whitelist pattern grammar and matcher.
//!
//! Patterns form a small closed grammar, parsed and validated once at
//! configuration load:
//!
//! - a literal path (`/courses`) matches only by exact equality;
//! - a literal prefix followed by a trailing rest-wildcard (`/course/*`)
//!   matches every path starting with the prefix up to and including the
//!   separator, whatever the remainder — empty or nested;
//! - the bare root `/` is a literal like any other: it never acts as a
//!   prefix of every path.
//!
//! Matching is case-sensitive and performs no normalization; `/courses`
//! and `/courses/` are distinct paths. Router parameter syntax such as
//! `/course/:courseId` is NOT part of this grammar — detail pages are
//! covered by a prefix pattern like `/course/*` instead.

use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// A single validated whitelist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches exactly this path and nothing else.
    Exact(String),
    /// Matches every path starting with this literal prefix.
    ///
    /// The stored prefix always ends with `/`; it is the text before the
    /// trailing `*` of the source pattern.
    Prefix(String),
}

impl PathPattern {
    /// Returns true if the pattern covers the given navigation path.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(literal) => path == literal,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }

    /// Returns true if this is a rest-wildcard pattern.
    #[must_use]
    pub fn is_rest_wildcard(&self) -> bool {
        matches!(self, Self::Prefix(_))
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        if !s.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash {
                pattern: s.to_string(),
            });
        }

        match s.find('*') {
            None => Ok(Self::Exact(s.to_string())),
            Some(position) if position != s.len() - 1 => Err(PatternError::WildcardNotTrailing {
                pattern: s.to_string(),
            }),
            Some(position) => {
                let prefix = &s[..position];
                if !prefix.ends_with('/') {
                    return Err(PatternError::WildcardNotSegment {
                        pattern: s.to_string(),
                    });
                }
                Ok(Self::Prefix(prefix.to_string()))
            }
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(literal) => write!(f, "{literal}"),
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
        }
    }
}
