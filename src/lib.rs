//! Bot Commands - detect and parse build-bot directives in comment text

pub mod command;
pub mod core;
pub mod filter;

pub use command::{detect, report, scan_comment, BotCommand, CommandError, ScanReport, ScannedCommand};
pub use filter::{ActionFilter, ActionFilters, FilterComponent, FilterError, ParseFilter};
