//! The set of publicly reachable path patterns.

use crate::error::PatternError;
use crate::pattern::PathPattern;
use chalkboard_core::Result;

/// The ordered set of path patterns reachable without authentication.
///
/// Built once from static configuration at guard construction and
/// immutable thereafter. Evaluation is independent of authentication
/// state: the whitelist answers only "is this path public".
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    patterns: Vec<PathPattern>,
    rejected: Vec<PatternError>,
}

impl Whitelist {
    /// Builds a whitelist, excluding malformed patterns.
    ///
    /// Each malformed entry is logged at warn level and retained in
    /// [`rejected`](Self::rejected) so startup code can report it. The
    /// valid entries keep matching; a bad pattern never crashes
    /// navigation and is never silently matched.
    #[must_use]
    pub fn from_patterns<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut rejected = Vec::new();

        for entry in raw {
            match entry.as_ref().parse::<PathPattern>() {
                Ok(pattern) => patterns.push(pattern),
                Err(error) => {
                    tracing::warn!(error = %error, "whitelist pattern rejected");
                    rejected.push(error);
                }
            }
        }

        Self { patterns, rejected }
    }

    /// Builds a whitelist, failing on the first malformed pattern.
    ///
    /// For hosts that prefer refusing to start over running with a
    /// partial whitelist.
    pub fn try_from_patterns<I, S>(raw: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for entry in raw {
            match entry.as_ref().parse::<PathPattern>() {
                Ok(pattern) => patterns.push(pattern),
                Err(error) => return Err(error.into()),
            }
        }
        Ok(Self {
            patterns,
            rejected: Vec::new(),
        })
    }

    /// Returns true if any pattern covers the given path.
    #[must_use]
    pub fn covers(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    /// Returns the validated patterns, in configuration order.
    #[must_use]
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    /// Returns the configuration errors for entries excluded at load.
    #[must_use]
    pub fn rejected(&self) -> &[PatternError] {
        &self.rejected
    }

    /// Returns the number of active patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no pattern survived configuration load.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
