//! Command detection - find a bot directive in a single line of text

/// Literal that introduces a directive at the start of a line
pub const COMMAND_PREFIX: &str = "bot: ";

/// Extract the directive following `bot: ` at the start of `line`
///
/// Returns the remainder with trailing whitespace stripped; leading
/// whitespace is kept. Lines without the prefix yield `None`, which is the
/// normal outcome for ordinary comment text. The detector works on one
/// line: a remainder spanning several lines does not match, although a
/// single trailing `\n` is tolerated.
pub fn detect(line: &str) -> Option<&str> {
    tracing::trace!(line, "searching for bot command");

    let remainder = line.strip_prefix(COMMAND_PREFIX)?;
    let remainder = remainder.strip_suffix('\n').unwrap_or(remainder);
    if remainder.contains('\n') {
        return None;
    }

    Some(remainder.trim_end())
}
