use std::num::ParseIntError;

/// Reasons a text field could not be turned into a usable number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{raw:?} does not start with an integer")]
    Empty { raw: String },
    #[error("{raw:?} is out of range: {source}")]
    OutOfRange {
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{0} is not a positive size")]
    NotPositive(i64),
    #[error("{0} does not fit a pixel coordinate")]
    OutOfI32(i64),
}

/// Parses the leading integer of a text field. Leading whitespace and an
/// optional sign are accepted, and trailing text after the digits is ignored,
/// so `"12px"` reads as 12 and `"3.7"` as 3.
pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(InputError::Empty {
            raw: raw.to_string(),
        });
    }

    trimmed[..sign_len + digits]
        .parse::<i64>()
        .map_err(|source| InputError::OutOfRange {
            raw: raw.to_string(),
            source,
        })
}
