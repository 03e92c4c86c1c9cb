//! Bot command pipeline
//!
//! Turns comment text into parsed commands:
//! line -> detect -> directive -> BotCommand::parse -> BotCommand

pub mod detect;
pub mod parsed;
pub mod scan;

pub use detect::{detect, COMMAND_PREFIX};
pub use parsed::{BotCommand, CommandError};
pub use scan::{report, scan_comment, ReportEntry, ScanReport, ScannedCommand};
