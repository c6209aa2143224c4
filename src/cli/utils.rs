//! Shared CLI helpers

use tracing::debug;

/// Split a comma-separated option value, dropping empty entries.
pub fn parse_csv(input: &Option<String>) -> Option<Vec<String>> {
    input.as_ref().map(|s| {
        s.split(',').map(|part| part.trim().to_string()).filter(|part| !part.is_empty()).collect()
    })
}

/// Treat an explicitly empty value (`--author` with nothing after it) as unset.
pub fn non_empty(input: Option<String>) -> Option<String> {
    input.filter(|s| !s.trim().is_empty())
}

/// Report a failed command the same way for every kind of failure.
pub fn report_error(err: &anyhow::Error) {
    debug!("{err:#}");
    println!("An error occurred: {err}");
}
