//! Common utilities for the payment gateway service

pub mod masking {
    //! Wrapper types that keep sensitive values out of `Debug` output and
    //! structured logs.

    use std::fmt;

    use serde::{Deserialize, Serialize};

    /// A secret value such as a signing key or terminal code.
    ///
    /// The inner value is only reachable through [`PeekInterface`] /
    /// [`ExposeInterface`], which keeps accidental formatting from leaking it.
    #[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
    pub struct Secret<T>(T);

    impl<T> Secret<T> {
        pub fn new(value: T) -> Self {
            Self(value)
        }
    }

    impl<T> From<T> for Secret<T> {
        fn from(value: T) -> Self {
            Self(value)
        }
    }

    impl<T: Default> Default for Secret<T> {
        fn default() -> Self {
            Self(T::default())
        }
    }

    impl<T> fmt::Debug for Secret<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "*** {} ***", std::any::type_name::<T>())
        }
    }

    /// Borrow the secret value.
    pub trait PeekInterface<T> {
        fn peek(&self) -> &T;
    }

    impl<T> PeekInterface<T> for Secret<T> {
        fn peek(&self) -> &T {
            &self.0
        }
    }

    /// Consume the wrapper and take the secret value.
    pub trait ExposeInterface<T> {
        fn expose(self) -> T;
    }

    impl<T> ExposeInterface<T> for Secret<T> {
        fn expose(self) -> T {
            self.0
        }
    }
}

pub use masking::{ExposeInterface, PeekInterface, Secret};

pub mod consts;
pub mod crypto;
pub mod errors;
pub mod types;

pub use errors::{CustomResult, ParsingError};

/// Generate a fixed-length reference drawn from the digits `0-9`.
///
/// Used for merchant order references: the gateway only needs per-request
/// uniqueness within its deduplication window, not unforgeability.
pub fn generate_numeric_reference(length: usize) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| consts::DIGITS[rng.gen_range(0..consts::DIGITS.len())])
        .collect()
}

pub mod date_time {
    //! UTC timestamps in the formats gateways put inside signed payloads.

    use time::{format_description::BorrowedFormatItem, OffsetDateTime, PrimitiveDateTime};

    /// Enum to represent date formats
    #[derive(Debug)]
    pub enum DateFormat {
        /// Format the date in 20191105081132 format
        YYYYMMDDHHmmss,
    }

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }

    /// Return the given date and time in UTC with the given format Eg: format: YYYYMMDDHHmmss Eg: 20191105081132
    pub fn format_date(
        date: PrimitiveDateTime,
        format: DateFormat,
    ) -> Result<String, time::error::Format> {
        let format = <&[BorrowedFormatItem<'_>]>::from(format);
        date.format(&format)
    }

    impl From<DateFormat> for &[BorrowedFormatItem<'_>] {
        fn from(format: DateFormat) -> Self {
            match format {
                DateFormat::YYYYMMDDHHmmss => time::macros::format_description!("[year repr:full][month padding:zero repr:numerical][day padding:zero][hour padding:zero repr:24][minute padding:zero][second padding:zero]"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_reference_has_requested_length_and_digits_only() {
        let reference = generate_numeric_reference(8);
        assert_eq!(reference.len(), 8);
        assert!(reference.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn numeric_references_differ_between_calls() {
        // Collisions over 16 digits are implausible enough for a unit test.
        assert_ne!(
            generate_numeric_reference(16),
            generate_numeric_reference(16)
        );
    }

    #[test]
    fn format_date_matches_compact_layout() {
        let date = time::macros::datetime!(2019-11-05 08:11:32);
        let formatted = date_time::format_date(date, date_time::DateFormat::YYYYMMDDHHmmss)
            .expect("formatting failed");
        assert_eq!(formatted, "20191105081132");
    }

    #[test]
    fn secret_debug_output_is_redacted() {
        let secret = Secret::new("hunter2".to_string());
        let printed = format!("{secret:?}");
        assert!(!printed.contains("hunter2"));
    }
}
