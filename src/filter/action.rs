//! Action filter grammar
//!
//! A filter clause is a whitespace separated list of `component:pattern`
//! tokens. An empty clause is the unrestricted filter.

use std::fmt;
use std::str::FromStr;

use nom::character::complete::{alpha1, char};
use nom::combinator::rest;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};

use super::{FilterComponent, FilterError, ParseFilter, SyntaxError};

/// One `component:pattern` restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionFilter {
    component: FilterComponent,
    pattern: String,
}

impl ActionFilter {
    pub fn new(component: FilterComponent, pattern: impl Into<String>) -> Self {
        Self {
            component,
            pattern: pattern.into(),
        }
    }

    pub fn component(&self) -> FilterComponent {
        self.component
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse a single filter token such as `arch:x86_64/amd/zen2`
    pub fn parse_token(token: &str) -> Result<Self, FilterError> {
        let (_, (component, pattern)) =
            component_pattern(token).map_err(|_| FilterError::syntax(token, diagnose(token)))?;

        let component =
            FilterComponent::resolve(component).map_err(|reason| FilterError::syntax(token, reason))?;

        if pattern.is_empty() {
            return Err(FilterError::syntax(token, SyntaxError::EmptyPattern));
        }

        Ok(Self::new(component, pattern))
    }
}

impl fmt::Display for ActionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.pattern)
    }
}

/// `letters ':' rest-of-token`
fn component_pattern(token: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(alpha1, char(':'), rest).parse(token)
}

/// Explain why a token did not match `component_pattern`
fn diagnose(token: &str) -> SyntaxError {
    if token.contains(':') {
        SyntaxError::InvalidComponent
    } else {
        SyntaxError::MissingSeparator
    }
}

/// Ordered set of restrictions attached to a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionFilters {
    filters: Vec<ActionFilter>,
}

impl ActionFilters {
    /// The unrestricted filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a filter clause; fails on the first invalid token
    pub fn parse(args: &str) -> Result<Self, FilterError> {
        let filters = args
            .split_whitespace()
            .map(ActionFilter::parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { filters })
    }

    /// True when the filter places no restriction
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionFilter> {
        self.filters.iter()
    }

    /// Patterns given for one component, in the order they were written
    pub fn patterns_for(&self, component: FilterComponent) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .filter(move |f| f.component == component)
            .map(|f| f.pattern.as_str())
    }
}

impl fmt::Display for ActionFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

impl FromStr for ActionFilters {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ParseFilter for ActionFilters {
    fn parse_filter(args: &str) -> Result<Self, FilterError> {
        Self::parse(args)
    }
}
