//! The ordered route table.

use thiserror::Error;

use super::pattern::{PathParams, PatternError, RoutePattern};

/// Typed result of failing to recognize a path.
///
/// Callers render an explicit not-found state instead of nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches path: {path}")]
pub struct NoMatch {
    /// The path that failed to match.
    pub path: String,
}

/// A successful route match.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<R> {
    /// The route value declared for the matching pattern.
    pub route: R,
    /// Parameters extracted from the path.
    pub params: PathParams,
}

/// Statically declared, ordered `(pattern, route)` table.
///
/// Entries are evaluated in declaration order; the first structural match
/// wins, and exactly one route is selected per path.
#[derive(Debug, Clone)]
pub struct RouteTable<R> {
    entries: Vec<(RoutePattern, R)>,
}

impl<R: Copy> RouteTable<R> {
    /// Build a table from `(pattern, route)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when any pattern is malformed.
    pub fn new<'a, I>(entries: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (&'a str, R)>,
    {
        let mut parsed = Vec::new();
        for (pattern, route) in entries {
            parsed.push((RoutePattern::parse(pattern)?, route));
        }
        Ok(Self { entries: parsed })
    }

    /// Recognize `path`, returning the first matching entry.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when no entry matches.
    pub fn recognize(&self, path: &str) -> Result<RouteMatch<R>, NoMatch> {
        for (pattern, route) in &self.entries {
            if let Some(params) = pattern.matches(path) {
                return Ok(RouteMatch {
                    route: *route,
                    params,
                });
            }
        }
        Err(NoMatch {
            path: path.to_owned(),
        })
    }
}
