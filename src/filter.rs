//! Route exclusion by path pattern.

use crate::extract::Route;
use anyhow::Context;
use regex::Regex;

/// An exclusion pattern: a plain substring, or a compiled regex tested against
/// the whole path.
#[derive(Debug, Clone)]
pub enum FilterPattern {
    Substring(String),
    Matcher(Regex),
}

impl FilterPattern {
    /// Parse a CLI-style pattern: `/.../` compiles as a regex, anything else is
    /// a substring.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw.len() > 1 && raw.starts_with('/') && raw.ends_with('/') {
            let inner = &raw[1..raw.len() - 1];
            let regex = Regex::new(inner)
                .with_context(|| format!("invalid exclusion regex {raw}"))?;
            return Ok(Self::Matcher(regex));
        }
        Ok(Self::Substring(raw.to_string()))
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Substring(needle) => path.contains(needle.as_str()),
            Self::Matcher(regex) => regex.is_match(path),
        }
    }
}

impl From<&str> for FilterPattern {
    fn from(needle: &str) -> Self {
        Self::Substring(needle.to_string())
    }
}

impl From<Regex> for FilterPattern {
    fn from(regex: Regex) -> Self {
        Self::Matcher(regex)
    }
}

/// Drop routes whose path matches any exclusion pattern.
///
/// Pure and order-preserving; an empty pattern list returns the input unchanged,
/// and applying the same patterns twice changes nothing further.
pub fn filter_routes(routes: &[Route], patterns: &[FilterPattern]) -> Vec<Route> {
    if patterns.is_empty() {
        return routes.to_vec();
    }
    routes
        .iter()
        .filter(|route| !patterns.iter().any(|pattern| pattern.matches(&route.path)))
        .cloned()
        .collect()
}
