use std::num::IntErrorKind;

/// Slider text parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayLengthParseError {
    EmptyInput,
    NotANumber(String),
}

impl std::fmt::Display for DayLengthParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayLengthParseError::EmptyInput => write!(f, "Day length cannot be empty"),
            DayLengthParseError::NotANumber(raw) => {
                write!(f, "Day length must be a whole number of hours, got {:?}", raw)
            }
        }
    }
}

impl std::error::Error for DayLengthParseError {}

/// Parse the day-length slider's value.
///
/// Range checking is left to the reducer, which clamps to the supported
/// bounds; whole numbers too large for `u32` saturate to `u32::MAX`.
pub fn parse_day_length(input: &str) -> Result<u32, DayLengthParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DayLengthParseError::EmptyInput);
    }

    match trimmed.parse::<u32>() {
        Ok(hours) => Ok(hours),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(u32::MAX),
        Err(_) => Err(DayLengthParseError::NotANumber(trimmed.to_string())),
    }
}
