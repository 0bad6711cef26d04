//! Parser for signed duration expressions such as `"2h3m"`, `"-1.5h"` or `"300ms"`.
//!
//! The grammar is a possibly signed sequence of decimal numbers, each with an
//! optional fraction and a mandatory unit suffix. Valid units are `ns`, `us`
//! (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The bare string `"0"` is accepted
//! without a unit. The total must fit in a signed 64-bit nanosecond count.

use std::fmt;
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest magnitude a signed 64-bit nanosecond count can hold.
const MAX_NANOS: u128 = i64::MAX as u128;

/// Errors produced while parsing a duration expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// The expression does not follow the duration grammar.
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A number was followed by an unrecognized unit.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognized unit
        unit: String,
        /// The whole expression
        input: String,
    },

    /// The total does not fit in a signed 64-bit nanosecond count.
    #[error("duration {0:?} is out of range")]
    Overflow(String),

    /// A negative duration was converted to an unsigned one.
    #[error("duration must not be negative, got -{0:?}")]
    Negative(Duration),
}

/// A parsed duration that keeps its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedDuration {
    negative: bool,
    magnitude: Duration,
}

impl SignedDuration {
    fn from_nanos(negative: bool, nanos: u128) -> Self {
        let magnitude = Duration::new(
            (nanos / NANOS_PER_SECOND as u128) as u64,
            (nanos % NANOS_PER_SECOND as u128) as u32,
        );
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// Whether the duration is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The absolute value of the duration.
    pub fn magnitude(&self) -> Duration {
        self.magnitude
    }

    /// The signed number of nanoseconds.
    pub fn as_nanos(&self) -> i64 {
        // parse_duration guarantees the magnitude fits in an i64
        let nanos = self.magnitude.as_nanos() as i64;
        if self.negative { -nanos } else { nanos }
    }
}

impl TryFrom<SignedDuration> for Duration {
    type Error = DurationError;

    fn try_from(value: SignedDuration) -> Result<Self, Self::Error> {
        if value.negative {
            Err(DurationError::Negative(value.magnitude))
        } else {
            Ok(value.magnitude)
        }
    }
}

impl fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{:?}", self.magnitude)
        } else {
            write!(f, "{:?}", self.magnitude)
        }
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Split off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a signed duration expression.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::parse_duration;
/// use std::time::Duration;
///
/// let parsed = parse_duration("2h3m").unwrap();
/// assert_eq!(parsed.magnitude(), Duration::from_secs(2 * 3600 + 3 * 60));
/// assert!(parse_duration("3z6m").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`DurationError`] describing the first problem found.
pub fn parse_duration(input: &str) -> Result<SignedDuration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(SignedDuration::default());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_end = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, tail) = after_fraction.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());
        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole_value.checked_mul(scale as u128).ok_or_else(overflow)?;

        if !fraction.is_empty() {
            // Digits beyond nanosecond precision cannot change the result.
            let mut numerator: u128 = 0;
            let mut denominator: u128 = 1;
            for digit in fraction.bytes().take(18) {
                numerator = numerator * 10 + u128::from(digit - b'0');
                denominator *= 10;
            }
            nanos = nanos
                .checked_add(numerator * scale as u128 / denominator)
                .ok_or_else(overflow)?;
        }

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
        rest = tail;
    }

    Ok(SignedDuration::from_nanos(negative, total))
}
