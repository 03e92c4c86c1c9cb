//! Parsed bot command - a command token plus the action filter restricting it

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::filter::{ActionFilters, FilterError, ParseFilter};

/// Error type for building a [`BotCommand`] from a directive string
#[derive(Error, Debug)]
pub enum CommandError {
    /// The directive is empty or whitespace only
    #[error("no command found in directive '{directive}'")]
    EmptyCommand { directive: String },

    /// The arguments after the command token are not a valid filter
    #[error("invalid action filter '{args}': {source}")]
    InvalidFilter {
        args: String,
        #[source]
        source: FilterError,
    },

    /// The filter grammar failed for a reason other than bad syntax
    #[error(transparent)]
    Unexpected(FilterError),
}

/// A directive split into its command token and action filter
///
/// Built once from a directive string and never modified afterwards.
/// `Display` yields the canonical form, which parses back into an
/// equivalent command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotCommand<F = ActionFilters> {
    command: String,
    action_filters: F,
}

impl<F: ParseFilter> BotCommand<F> {
    /// Parse a directive such as `build arch:x86_64 repo:eessi`
    ///
    /// The first whitespace-delimited token is the command; the remaining
    /// tokens, joined by single spaces, are handed to the filter grammar.
    /// A directive with no tokens fails with [`CommandError::EmptyCommand`].
    pub fn parse(directive: &str) -> Result<Self, CommandError> {
        let mut tokens = directive.split_whitespace();
        let Some(command) = tokens.next() else {
            return Err(CommandError::EmptyCommand {
                directive: directive.to_string(),
            });
        };

        let args = tokens.collect::<Vec<_>>().join(" ");
        let action_filters = F::parse_filter(&args).map_err(|err| {
            if err.is_syntax() {
                tracing::error!(command, args = %args, error = %err, "invalid action filter");
                CommandError::InvalidFilter {
                    args: args.clone(),
                    source: err,
                }
            } else {
                tracing::error!(command, args = %args, error = ?err, "unexpected action filter failure");
                CommandError::Unexpected(err)
            }
        })?;

        Ok(Self {
            command: command.to_string(),
            action_filters,
        })
    }
}

impl<F> BotCommand<F> {
    /// The command token, never empty
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn action_filters(&self) -> &F {
        &self.action_filters
    }

    pub fn into_parts(self) -> (String, F) {
        (self.command, self.action_filters)
    }
}

impl<F: fmt::Display> fmt::Display for BotCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("{} {}", self.command, self.action_filters);
        f.write_str(line.trim_end())
    }
}

impl<F: ParseFilter> FromStr for BotCommand<F> {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
