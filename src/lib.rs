//! Counts partitions of a non-negative integer into powers of two,
//! modulo 10^9 + 7.

use std::num::IntErrorKind;

use thiserror::Error;

pub mod mint;
pub mod partition;

pub use partition::{count, MODULUS};

/// Rejected partition target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("n must be non-negative, got `{0}`")]
    Negative(String),
    #[error("n must be an integer, got `{0}`")]
    NotAnInteger(String),
    #[error("n = {0} exceeds the addressable table size")]
    TooLarge(String),
}

/// Parses a partition target from raw text, classifying bad input.
pub fn parse_target(raw: &str) -> Result<u64, InputError> {
    let raw = raw.trim();
    match raw.parse::<u64>() {
        Ok(n) => Ok(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(InputError::TooLarge(raw.to_owned())),
            _ if looks_negative(raw) => Err(InputError::Negative(raw.to_owned())),
            _ => Err(InputError::NotAnInteger(raw.to_owned())),
        },
    }
}

fn looks_negative(raw: &str) -> bool {
    raw.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::{parse_target, InputError};

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_target("42"), Ok(42));
        assert_eq!(parse_target(" 7 "), Ok(7));
        assert_eq!(parse_target("0"), Ok(0));
    }

    #[test]
    fn rejects_negative_integers() {
        assert_eq!(
            parse_target("-5"),
            Err(InputError::Negative("-5".to_owned()))
        );
        assert_eq!(
            parse_target("-12345678901234567890123"),
            Err(InputError::Negative("-12345678901234567890123".to_owned()))
        );
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            parse_target("seven"),
            Err(InputError::NotAnInteger("seven".to_owned()))
        );
        assert_eq!(
            parse_target("3.5"),
            Err(InputError::NotAnInteger("3.5".to_owned()))
        );
        assert_eq!(parse_target(""), Err(InputError::NotAnInteger("".to_owned())));
        assert_eq!(
            parse_target("-"),
            Err(InputError::NotAnInteger("-".to_owned()))
        );
    }

    #[test]
    fn rejects_oversized_integers() {
        let raw = "123456789012345678901";
        assert_eq!(parse_target(raw), Err(InputError::TooLarge(raw.to_owned())));
    }
}
