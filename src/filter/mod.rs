//! Action filters - restrict a bot command to specific execution contexts
//!
//! A filter clause is the text after the command token, e.g. the
//! `arch:x86_64 repo:software` part of `bot: build arch:x86_64 repo:software`.
//! Commands only depend on the [`ParseFilter`] contract: parse from the
//! argument string, serialize back through `Display`.

pub mod action;
pub mod component;

use std::fmt;

use thiserror::Error;

pub use action::{ActionFilter, ActionFilters};
pub use component::FilterComponent;

/// A filter grammar a command can delegate its arguments to
pub trait ParseFilter: Sized + fmt::Display {
    /// Parse the argument remainder of a directive
    ///
    /// An empty string must produce the unrestricted filter, and `Display`
    /// of that filter must be empty.
    fn parse_filter(args: &str) -> Result<Self, FilterError>;
}

/// Why a single filter token was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected 'component:pattern'")]
    MissingSeparator,

    #[error("component must consist of letters only")]
    InvalidComponent,

    #[error("component '{0}' must be at least 3 letters")]
    ComponentTooShort(String),

    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// Error type for filter parsing
#[derive(Error, Debug)]
pub enum FilterError {
    /// The filter text does not follow the grammar
    #[error("invalid filter '{token}': {reason}")]
    Syntax { token: String, reason: SyntaxError },

    /// Any failure that is not a grammar violation
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl FilterError {
    pub fn syntax(token: impl Into<String>, reason: SyntaxError) -> Self {
        FilterError::Syntax {
            token: token.into(),
            reason,
        }
    }

    /// Whether this error is a grammar violation in the filter text
    pub fn is_syntax(&self) -> bool {
        matches!(self, FilterError::Syntax { .. })
    }
}
