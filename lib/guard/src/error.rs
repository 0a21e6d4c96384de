//! Error types for whitelist configuration.
//!
//! A malformed pattern is a configuration error: it is reported at startup
//! and excluded from matching, never silently matched and never allowed to
//! crash navigation.

use std::fmt;

/// Errors from parsing a whitelist path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern string was empty.
    Empty,
    /// The pattern does not start with `/`.
    MissingLeadingSlash {
        /// The offending pattern.
        pattern: String,
    },
    /// A wildcard appears somewhere other than the trailing position.
    WildcardNotTrailing {
        /// The offending pattern.
        pattern: String,
    },
    /// The trailing wildcard does not occupy a whole path segment
    /// (e.g. `/course*` instead of `/course/*`).
    WildcardNotSegment {
        /// The offending pattern.
        pattern: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "whitelist pattern is empty")
            }
            Self::MissingLeadingSlash { pattern } => {
                write!(f, "whitelist pattern '{pattern}' must start with '/'")
            }
            Self::WildcardNotTrailing { pattern } => {
                write!(
                    f,
                    "whitelist pattern '{pattern}' has a wildcard outside the trailing position"
                )
            }
            Self::WildcardNotSegment { pattern } => {
                write!(
                    f,
                    "whitelist pattern '{pattern}' must place the wildcard in its own trailing segment"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
