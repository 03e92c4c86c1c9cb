//! Scan a comment body for bot directives, one line at a time

use serde::Serialize;

use super::detect::detect;
use super::parsed::{BotCommand, CommandError};
use crate::core::config::BotConfig;
use crate::filter::{ActionFilters, ParseFilter};

/// A directive found in a comment body
#[derive(Debug)]
pub struct ScannedCommand<F = ActionFilters> {
    /// 1-based line number within the body
    pub line_number: usize,
    /// Text after the `bot: ` prefix
    pub directive: String,
    /// Outcome of parsing the directive
    pub result: Result<BotCommand<F>, CommandError>,
}

impl<F> ScannedCommand<F> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Detect and parse every directive in `body`
///
/// Lines without a directive are skipped. A directive that fails to parse
/// is reported in place and does not stop the scan.
pub fn scan_comment<F: ParseFilter>(body: &str) -> Vec<ScannedCommand<F>> {
    body.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let directive = detect(line)?;
            let result = BotCommand::parse(directive);
            if let Ok(command) = &result {
                tracing::debug!(line = index + 1, %command, "found bot command");
            }

            Some(ScannedCommand {
                line_number: index + 1,
                directive: directive.to_string(),
                result,
            })
        })
        .collect()
}

/// One row of a scan report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub line: usize,
    pub directive: String,
    pub command: Option<String>,
    pub canonical: Option<String>,
    pub supported: bool,
    pub error: Option<String>,
}

impl ReportEntry {
    pub fn new<F: ParseFilter>(scanned: &ScannedCommand<F>, config: &BotConfig) -> Self {
        match &scanned.result {
            Ok(command) => Self {
                line: scanned.line_number,
                directive: scanned.directive.clone(),
                command: Some(command.command().to_string()),
                canonical: Some(command.to_string()),
                supported: config.is_supported(command.command()),
                error: None,
            },
            Err(err) => Self {
                line: scanned.line_number,
                directive: scanned.directive.clone(),
                command: None,
                canonical: None,
                supported: false,
                error: Some(err.to_string()),
            },
        }
    }

    /// Human readable form: `line N: <command>`, tagged when unsupported
    pub fn render(&self) -> String {
        match (&self.canonical, &self.error) {
            (Some(canonical), _) if self.supported => format!("line {}: {}", self.line, canonical),
            (Some(canonical), _) => format!("line {}: {} (unsupported)", self.line, canonical),
            (None, Some(error)) => format!("line {}: error: {}", self.line, error),
            (None, None) => format!("line {}: error: {}", self.line, self.directive),
        }
    }
}

/// Everything found in a comment body, checked against a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanReport {
    pub entries: Vec<ReportEntry>,
}

impl ScanReport {
    /// True when at least one directive failed to parse
    pub fn any_failed(&self) -> bool {
        self.entries.iter().any(|e| e.error.is_some())
    }

    /// One rendered line per directive
    pub fn render_text(&self) -> Vec<String> {
        self.entries.iter().map(ReportEntry::render).collect()
    }
}

/// Scan `body` with the default filter grammar and build its report
pub fn report(body: &str, config: &BotConfig) -> ScanReport {
    let scanned: Vec<ScannedCommand> = scan_comment(body);
    tracing::info!("Found {} bot directives", scanned.len());

    ScanReport {
        entries: scanned.iter().map(|s| ReportEntry::new(s, config)).collect(),
    }
}
