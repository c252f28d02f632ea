use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix carried by every tracking number.
pub const TRACKING_PREFIX: &str = "EHC";

/// Number of decimal digits following the prefix.
pub const TRACKING_DIGITS: usize = 9;

/// Error returned when a string does not have the tracking number format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tracking number: {0:?} (expected EHC followed by 9 digits)")]
pub struct InvalidTrackingNumber(pub String);

/// Unique identifier for a package.
///
/// Wraps a string of the form `EHC` followed by exactly nine decimal
/// digits, zero-padded. Wrapping prevents mixing tracking numbers up
/// with other string-based values, and keying maps with raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Parses a tracking number, validating the `EHC` + 9 digit format.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidTrackingNumber> {
        let s = s.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(InvalidTrackingNumber(s))
        }
    }

    /// Returns true if the string has the tracking number format.
    pub fn is_valid(s: &str) -> bool {
        match s.strip_prefix(TRACKING_PREFIX) {
            Some(digits) => {
                digits.len() == TRACKING_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Draws a random tracking number uniformly from `EHC000000000` to
    /// `EHC999999999`.
    ///
    /// The draw is not cryptographically secure; uniqueness against an
    /// existing collection is the caller's responsibility.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let n: u32 = rng.random_range(0..1_000_000_000);
        Self(format!("{TRACKING_PREFIX}{n:09}"))
    }

    /// Returns the tracking number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TrackingNumber> for String {
    fn from(tn: TrackingNumber) -> Self {
        tn.0
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
