//! Expiration date reformatting.
//!
//! Stripes carry the expiry as `YYMM`; downstream payment flows expect
//! `MMYY`. [`reformat`] swaps the two halves and rejects anything too short
//! to hold both, including the `^` placeholder the matcher emits for an
//! absent expiry.
//!
//! No month-range or expiry check is performed here; the stripe is taken at
//! face value.

use crate::error::TrackError;
use std::fmt;

/// A canonical `MMYY` expiration extracted from a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiration {
    mmyy: String,
}

impl Expiration {
    /// Returns the expiration as a 4-character `MMYY` string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.mmyy
    }

    /// Returns the 2-character month half.
    #[inline]
    pub fn month(&self) -> &str {
        &self.mmyy[..2]
    }

    /// Returns the 2-character year half.
    #[inline]
    pub fn year(&self) -> &str {
        &self.mmyy[2..]
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month(), self.year())
    }
}

/// Reformats a raw `YYMM` expiry field into canonical `MMYY`.
///
/// Inputs shorter than 4 characters fail with
/// [`TrackError::ExpirationTooShort`]. The `^` placeholder for an absent
/// expiry is one character, so an absent expiry is always an explicit error,
/// never a silently skipped field. Characters past the fourth are ignored.
///
/// # Example
///
/// ```
/// use magparse::expiry::reformat;
///
/// let exp = reformat("2901").unwrap();
/// assert_eq!(exp.as_str(), "0129");
/// assert_eq!(exp.month(), "01");
/// assert_eq!(exp.year(), "29");
///
/// assert!(reformat("^").is_err());
/// ```
pub fn reformat(raw: &str) -> Result<Expiration, TrackError> {
    let (yy, mm) = match (raw.get(..2), raw.get(2..4)) {
        (Some(yy), Some(mm)) => (yy, mm),
        _ => {
            return Err(TrackError::ExpirationTooShort {
                length: raw.chars().count(),
            })
        }
    };

    Ok(Expiration {
        mmyy: format!("{mm}{yy}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_swaps_halves() {
        let exp = reformat("2901").unwrap();
        assert_eq!(exp.as_str(), "0129");

        let exp = reformat("2512").unwrap();
        assert_eq!(exp.as_str(), "1225");
    }

    #[test]
    fn test_accessors() {
        let exp = reformat("3007").unwrap();
        assert_eq!(exp.month(), "07");
        assert_eq!(exp.year(), "30");
        assert_eq!(exp.to_string(), "07/30");
    }

    #[test]
    fn test_placeholder_is_too_short() {
        let err = reformat("^").unwrap_err();
        assert_eq!(err, TrackError::ExpirationTooShort { length: 1 });
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(
            reformat("").unwrap_err(),
            TrackError::ExpirationTooShort { length: 0 }
        );
        assert_eq!(
            reformat("290").unwrap_err(),
            TrackError::ExpirationTooShort { length: 3 }
        );
    }

    #[test]
    fn test_extra_characters_ignored() {
        // Only the first four characters participate in the swap.
        let exp = reformat("290199").unwrap();
        assert_eq!(exp.as_str(), "0129");
    }

    #[test]
    fn test_no_month_validation() {
        // The stripe value is taken at face value, even an impossible month.
        let exp = reformat("2913").unwrap();
        assert_eq!(exp.as_str(), "1329");
    }
}
