//! Pipeline orchestration: raw stripe data in, validated track out.
//!
//! Four stages run in a fixed order, each consuming the previous stage's
//! output and failing fast:
//!
//! 1. structural matcher ([`crate::track::match_track`])
//! 2. format gate (format code must be `B`)
//! 3. Luhn checksum over the card number
//! 4. field processors (name, expiration)
//!
//! The checksum runs before the name and expiration processors, so a bad
//! card number takes precedence over a bad expiry. Name normalization never
//! fails and cannot halt the pipeline.

use crate::card::{ParsedTrack, MAX_CARD_DIGITS};
use crate::error::TrackError;
use crate::{expiry, luhn, name, track};

/// The ISO/IEC 7813 format code for financial transaction cards.
pub const FINANCIAL_FORMAT_CODE: char = 'B';

/// Parses and validates one raw track.
///
/// The input is consumed for the duration of the call only; nothing is
/// retained. The call is pure: the same input always yields the same
/// outcome, and independent calls may run concurrently.
///
/// # Errors
///
/// Returns the error of the first stage that rejects the input; see
/// [`TrackError`] for the taxonomy.
///
/// # Example
///
/// ```
/// use magparse::{parse, TrackError};
///
/// let track = parse("%B4111111111111111^DOE/JOHN^29011015400000000000?").unwrap();
/// assert_eq!(track.card_number(), "4111111111111111");
/// assert_eq!(track.last_name(), "DOE");
/// assert_eq!(track.first_name(), Some("JOHN"));
/// assert_eq!(track.expiration(), "0129");
///
/// let err = parse("garbage-not-a-track").unwrap_err();
/// assert_eq!(err, TrackError::StructuralMismatch);
/// ```
pub fn parse(raw: &str) -> Result<ParsedTrack, TrackError> {
    let fields = track::match_track(raw).ok_or(TrackError::StructuralMismatch)?;

    if fields.format_code != FINANCIAL_FORMAT_CODE {
        return Err(TrackError::UnsupportedFormatCode {
            found: fields.format_code,
        });
    }

    // The matcher guarantees 1-19 ASCII digits.
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;
    for b in fields.card_number.bytes() {
        digits[count] = b - b'0';
        count += 1;
    }

    if !luhn::validate(&digits[..count]) {
        return Err(TrackError::ChecksumFailure);
    }

    let holder = name::normalize(fields.name);
    let expiration = expiry::reformat(fields.expiry)?;

    Ok(ParsedTrack::new(
        digits,
        count as u8,
        expiration,
        holder,
        fields.service_code.map(str::to_owned),
        fields.discretionary.map(str::to_owned),
    ))
}

/// Quickly checks whether raw track data parses and validates.
///
/// # Example
///
/// ```
/// use magparse::is_valid;
///
/// assert!(is_valid("%B4111111111111111^DOE/JOHN^2901?"));
/// assert!(!is_valid("%B4111111111111112^DOE/JOHN^2901?"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    parse(raw).is_ok()
}
