//! Accumulating rule checker.

use super::duration::parse_duration;
use super::rules;
use crate::error::ValidationError;

mod sealed {
    pub trait Sealed {}
}

/// Integer types accepted by the numeric checks.
///
/// The bound is a total order, so every value handed to a numeric check can be
/// compared. Types without one (such as floats, where `NaN` compares with
/// nothing) are rejected at compile time instead of being reported as a
/// violation.
pub trait Number: sealed::Sealed + Copy + Ord {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Number for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Records the failures of a sequence of checks without interrupting the caller.
///
/// Each check records its message when the value fails the rule and records
/// nothing otherwise. Checks return `&mut Self` so they can be chained; the
/// outcome is read afterwards with [`has_errors`](Self::has_errors),
/// [`error_number`](Self::error_number) or [`all_valid`](Self::all_valid).
///
/// A validator is meant to be created for one validation pass and dropped
/// once its result has been read.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::Validator;
///
/// let mut v = Validator::new();
/// v.is_not_empty("example", "The database must not be empty")
///     .is_port(0u32, "The port must be a valid port")
///     .is_duration("3z6m", "The timeout must be a valid duration");
///
/// assert_eq!(v.error_number(), 2);
/// let err = v.all_valid().unwrap_err();
/// assert_eq!(
///     err.messages().collect::<Vec<_>>(),
///     ["The port must be a valid port", "The timeout must be a valid duration"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: Vec<String>,
}

impl Validator {
    /// Create a validator with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, passed: bool, message: impl Into<String>) -> &mut Self {
        if !passed {
            self.messages.push(message.into());
        }
        self
    }

    /// Fail unless `condition` holds.
    ///
    /// The whole expression is the pass condition: `v.check(tls && !cert.is_empty(), ..)`
    /// fails whenever TLS is off. Use [`is_not_empty_when`](Self::is_not_empty_when)
    /// for "required only when enabled".
    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        self.record(condition, message)
    }

    /// Fail if the value is absent.
    pub fn is_present<T>(&mut self, value: Option<&T>, message: impl Into<String>) -> &mut Self {
        self.record(value.is_some(), message)
    }

    /// Fail if the value is present.
    pub fn is_not_present<T>(
        &mut self,
        value: Option<&T>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.record(value.is_none(), message)
    }

    /// Fail unless the string is empty.
    pub fn is_empty(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(s.is_empty(), message)
    }

    /// Fail if the string is empty.
    pub fn is_not_empty(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(!s.is_empty(), message)
    }

    /// Fail if `enabled` is set and the string is empty. Never fails when disabled.
    pub fn is_not_empty_when(
        &mut self,
        enabled: bool,
        s: &str,
        message: impl Into<String>,
    ) -> &mut Self {
        self.record(!enabled || !s.is_empty(), message)
    }

    /// Fail unless the string has exactly `size` characters.
    pub fn is_size(&mut self, s: &str, size: usize, message: impl Into<String>) -> &mut Self {
        self.record(s.chars().count() == size, message)
    }

    /// Fail unless the string length lies in `[min, max]`.
    pub fn is_between(
        &mut self,
        s: &str,
        min: usize,
        max: usize,
        message: impl Into<String>,
    ) -> &mut Self {
        let len = s.chars().count();
        self.record(min <= len && len <= max, message)
    }

    /// Fail unless every character is a letter or a digit.
    pub fn is_alphanumeric(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_alphanumeric(s), message)
    }

    /// Fail unless the string has cased characters and all of them are lowercase.
    pub fn is_lowercase(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_lowercase(s), message)
    }

    /// Fail unless the string has cased characters and all of them are uppercase.
    pub fn is_uppercase(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_uppercase(s), message)
    }

    /// Fail unless the string is padded standard base64.
    pub fn is_base64(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_base64(s), message)
    }

    /// Fail unless the string is a card number with a valid Luhn checksum.
    pub fn is_credit_card(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_credit_card(s), message)
    }

    /// Fail unless the string is a domain name.
    pub fn is_domain(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_domain(s), message)
    }

    /// Fail unless the string is a hostname.
    pub fn is_hostname(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_hostname(s), message)
    }

    /// Fail unless the string is an email address.
    pub fn is_email(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_email(s), message)
    }

    /// Fail unless the string is a hyphenated UUID.
    pub fn is_guid(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_guid(s), message)
    }

    /// Fail unless the string is an IPv4 or IPv6 address.
    pub fn is_ip(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_ip(s), message)
    }

    /// Fail unless the string is an RFC 3339 timestamp.
    pub fn is_std_date(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_std_date(s), message)
    }

    /// Fail unless the string is a duration expression such as `"2h3m"`.
    pub fn is_duration(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(parse_duration(s).is_ok(), message)
    }

    /// Fail unless the string is an absolute URL.
    pub fn is_url(&mut self, s: &str, message: impl Into<String>) -> &mut Self {
        self.record(rules::is_url(s), message)
    }

    /// Fail unless `n > bound`.
    pub fn is_greater_than<N: Number>(
        &mut self,
        n: N,
        bound: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.record(n > bound, message)
    }

    /// Fail unless `n < bound`.
    pub fn is_less_than<N: Number>(
        &mut self,
        n: N,
        bound: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.record(n < bound, message)
    }

    /// Fail unless `min <= n <= max`.
    pub fn is_between_numbers<N: Number>(
        &mut self,
        n: N,
        min: N,
        max: N,
        message: impl Into<String>,
    ) -> &mut Self {
        self.record(min <= n && n <= max, message)
    }

    /// Fail unless `n > 0`.
    pub fn is_positive<N: Number>(&mut self, n: N, message: impl Into<String>) -> &mut Self {
        self.record(n > N::ZERO, message)
    }

    /// Fail unless `n < 0`.
    pub fn is_negative<N: Number>(&mut self, n: N, message: impl Into<String>) -> &mut Self {
        self.record(n < N::ZERO, message)
    }

    /// Fail unless `1 <= n <= 65535`.
    pub fn is_port<N: TryInto<u16>>(&mut self, n: N, message: impl Into<String>) -> &mut Self {
        let valid = n.try_into().is_ok_and(|port: u16| port != 0);
        self.record(valid, message)
    }

    /// Whether any check has failed.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Number of failed checks.
    pub fn error_number(&self) -> usize {
        self.messages.len()
    }

    /// Messages of the failed checks, in the order the checks ran.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Every recorded failure as one aggregate, or `Ok(())` if nothing failed.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] holding each recorded message in order.
    pub fn all_valid(&self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_messages(self.messages.iter().cloned()))
        }
    }
}
