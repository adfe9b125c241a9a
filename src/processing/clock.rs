use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockParseError {
    #[error("expected H:MM:SS or M:SS, got {0} field(s)")]
    FieldCount(usize),
    #[error("non-integer time component: '{0}'")]
    BadComponent(String),
}

/// Parses a clock string into elapsed seconds. Accepts `H:MM:SS` or `M:SS`
/// with all-integer fields; anything else is an error. Callers that cannot
/// fail map the error onto a sentinel instead.
pub fn parse_clock(text: &str) -> Result<u32, ClockParseError> {
    let fields: Vec<&str> = text.split(':').collect();
    let component = |f: &str| {
        f.trim()
            .parse::<u32>()
            .map_err(|_| ClockParseError::BadComponent(f.to_string()))
    };
    match fields.as_slice() {
        [h, m, s] => Ok(component(h)? * 3600 + component(m)? * 60 + component(s)?),
        [m, s] => Ok(component(m)? * 60 + component(s)?),
        other => Err(ClockParseError::FieldCount(other.len())),
    }
}

/// Formats elapsed seconds as `HH:MM:SS`. Total for any input. Note that a
/// two-field `M:SS` input does not round-trip through `parse_clock` and back;
/// it comes out zero-padded to three fields, which is what display wants.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
