//! Route patterns and path parameter extraction.
//!
//! Patterns are split into literal and `{name}` parameter segments and
//! compared segment-wise against incoming paths. A pattern can never
//! match on a bare string prefix: `/s` does not match `/shop`, and
//! `/product` alone does not match `/product/{id}`.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced when parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Patterns must begin with `/`.
    #[error("route pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A `{}` parameter segment has no name.
    #[error("route pattern has an unnamed parameter segment: {0}")]
    EmptyParamName(String),

    /// A `{name` parameter segment is missing its closing brace.
    #[error("route pattern has an unterminated parameter segment: {0}")]
    UnterminatedParam(String),
}

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// Matches any single path segment, captured under this name.
    Param(String),
}

/// A parsed route pattern such as `/product/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern string.
    ///
    /// The root pattern `/` has zero segments and matches only the root
    /// path.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the pattern does not start with
    /// `/` or contains a malformed `{name}` segment.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_owned()));
        };

        let mut segments = Vec::new();
        for raw in rest.split('/').filter(|segment| !segment.is_empty()) {
            if let Some(inner) = raw.strip_prefix('{') {
                let name = inner
                    .strip_suffix('}')
                    .ok_or_else(|| PatternError::UnterminatedParam(pattern.to_owned()))?;
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(pattern.to_owned()));
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Literal(raw.to_owned()));
            }
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            segments,
        })
    }

    /// The original pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match `path` against this pattern, extracting named parameters.
    ///
    /// Paths are compared whole-segment by whole-segment; empty segments
    /// are collapsed, so `/shop/` and `/shop` are the same path.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (pattern_segment, path_segment) in self.segments.iter().zip(&segments) {
            match pattern_segment {
                Segment::Literal(literal) if literal == path_segment => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*path_segment).to_owned());
                }
            }
        }

        Some(PathParams(params))
    }
}

/// Named parameters extracted from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    /// Raw value of a named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parse a named parameter into `T`.
    ///
    /// Returns `None` when the parameter is absent or fails to parse;
    /// the caller decides how to surface that (the product page renders
    /// its not-found state).
    #[must_use]
    pub fn get_parsed<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|raw| raw.parse().ok())
    }
}
