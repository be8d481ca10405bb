//! Peg revision type.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::{FormatError, FormatErrorKind};

/// A peg revision pinning a URL to a historical revision.
///
/// Always strictly positive; absence is expressed as `Option<Peg>`.
///
/// # Examples
///
/// ```
/// use svn_urls::Peg;
///
/// let peg = Peg::parse("123").unwrap();
/// assert_eq!(peg.get(), 123);
/// assert!(Peg::parse("0").is_err());
/// assert!(Peg::parse("HEAD").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(NonZeroU64);

impl Peg {
    /// Creates a peg revision from a number.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` with `PegNotPositive` if `rev` is zero.
    pub fn new(rev: u64) -> Result<Self, FormatError> {
        NonZeroU64::new(rev)
            .map(Self)
            .ok_or_else(|| FormatError::new(rev.to_string(), FormatErrorKind::PegNotPositive))
    }

    /// Creates a peg revision from a signed number.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` with `PegNotPositive` if `rev` is zero or negative.
    pub fn from_signed(rev: i64) -> Result<Self, FormatError> {
        u64::try_from(rev)
            .map_err(|_| FormatError::new(rev.to_string(), FormatErrorKind::PegNotPositive))
            .and_then(Self::new)
    }

    /// Parses a peg revision from its decimal form.
    ///
    /// Surrounding whitespace and a leading `+` are accepted.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if:
    /// - The input is not a decimal integer (`PegNotNumber`)
    /// - The number is zero or negative (`PegNotPositive`)
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let digits = input.trim();
        match digits.parse::<i128>() {
            Ok(n) if n <= 0 => Err(FormatError::new(input, FormatErrorKind::PegNotPositive)),
            Ok(n) => u64::try_from(n)
                .map_err(|_| FormatError::new(input, FormatErrorKind::PegNotNumber))
                .and_then(Self::new),
            Err(_) => Err(FormatError::new(input, FormatErrorKind::PegNotNumber)),
        }
    }

    /// Returns the revision number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Peg {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u64> for Peg {
    type Error = FormatError;

    fn try_from(rev: u64) -> Result<Self, Self::Error> {
        Self::new(rev)
    }
}

impl From<Peg> for u64 {
    fn from(peg: Peg) -> Self {
        peg.get()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Peg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.get())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Peg {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rev = u64::deserialize(deserializer)?;
        Self::new(rev).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_number() {
        assert_eq!(Peg::parse("42").unwrap().get(), 42);
    }

    #[test]
    fn parse_tolerates_whitespace_and_plus() {
        assert_eq!(Peg::parse(" +7 ").unwrap().get(), 7);
    }

    #[test]
    fn parse_zero_fails() {
        let result = Peg::parse("0");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::PegNotPositive,
                ..
            })
        ));
    }

    #[test]
    fn parse_negative_fails() {
        let result = Peg::parse("-3");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::PegNotPositive,
                ..
            })
        ));
    }

    #[test]
    fn parse_revision_keyword_fails() {
        let result = Peg::parse("PREV");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::PegNotNumber,
                ..
            })
        ));
    }

    #[test]
    fn parse_overflow_fails() {
        let result = Peg::parse("99999999999999999999999");
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::PegNotNumber,
                ..
            })
        ));
    }

    #[test]
    fn from_signed_rejects_negative() {
        assert!(Peg::from_signed(-1).is_err());
        assert_eq!(Peg::from_signed(5).unwrap().get(), 5);
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Peg::new(123).unwrap().to_string(), "123");
    }
}
