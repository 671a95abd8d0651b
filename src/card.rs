//! The validated track result type.
//!
//! `ParsedTrack` is constructed only after every required pipeline stage has
//! succeeded, so a value of this type always holds a structurally valid,
//! Luhn-checked card. The account number is kept in a fixed-size digit array
//! that is zeroed on drop, and `Debug`/`Display` never expose it unmasked.

use crate::expiry::Expiration;
use crate::name::CardholderName;
use std::fmt;
use zeroize::Zeroize;

/// Maximum number of digits a track card number can carry.
pub const MAX_CARD_DIGITS: usize = 19;

/// A fully parsed and validated magnetic stripe track.
///
/// Immutable once constructed; every accessor is read-only. The PAN is
/// zeroized when the value is dropped.
///
/// # Security
///
/// - `Debug` and `Display` show the masked number only
/// - the full number is available solely through [`ParsedTrack::card_number`],
///   which is documented as sensitive
#[derive(Clone, PartialEq, Eq)]
pub struct ParsedTrack {
    /// Card number digits (0-9 values, not ASCII).
    digits: [u8; MAX_CARD_DIGITS],
    /// Number of digits actually present.
    digit_count: u8,
    /// Canonical `MMYY` expiration.
    expiration: Expiration,
    /// Normalized cardholder name.
    name: CardholderName,
    /// Raw service code field, if the track carried one.
    service_code: Option<String>,
    /// Raw discretionary data, if the track carried any.
    discretionary: Option<String>,
}

impl ParsedTrack {
    /// Internal constructor; use [`crate::parse`] to create instances.
    #[inline]
    pub(crate) fn new(
        digits: [u8; MAX_CARD_DIGITS],
        digit_count: u8,
        expiration: Expiration,
        name: CardholderName,
        service_code: Option<String>,
        discretionary: Option<String>,
    ) -> Self {
        Self {
            digits,
            digit_count,
            expiration,
            name,
            service_code,
            discretionary,
        }
    }

    /// Returns the full card number as a string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full PAN. Never log the result; for display purposes
    /// use [`ParsedTrack::masked`] instead.
    #[inline]
    pub fn card_number(&self) -> String {
        self.digits()
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits (or fewer, for very short numbers).
    ///
    /// Safe for logging and display.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.length();
        self.digits[len.saturating_sub(4)..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the card number masked for safe display.
    ///
    /// Format: `****-****-****-1111`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    /// Returns the card number with the 6-digit BIN left visible.
    ///
    /// Format: `411111******1111`.
    #[inline]
    pub fn masked_with_bin(&self) -> String {
        crate::mask::mask_with_bin(self)
    }

    /// Returns the expiration as a canonical `MMYY` string.
    #[inline]
    pub fn expiration(&self) -> &str {
        self.expiration.as_str()
    }

    /// Returns the cardholder's last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        self.name.last()
    }

    /// Returns the cardholder's first name, if present on the stripe.
    #[inline]
    pub fn first_name(&self) -> Option<&str> {
        self.name.first()
    }

    /// Returns the normalized cardholder name.
    #[inline]
    pub fn cardholder(&self) -> &CardholderName {
        &self.name
    }

    /// Returns the raw service code field, if present.
    #[inline]
    pub fn service_code(&self) -> Option<&str> {
        self.service_code.as_deref()
    }

    /// Returns the raw discretionary data, if present.
    #[inline]
    pub fn discretionary_data(&self) -> Option<&str> {
        self.discretionary.as_deref()
    }

    /// Returns the digit array slice (internal use).
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

impl fmt::Debug for ParsedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask the card number in debug output.
        f.debug_struct("ParsedTrack")
            .field("card_number", &self.masked())
            .field("expiration", &self.expiration)
            .field("name", &self.name)
            .field("service_code", &self.service_code)
            .finish()
    }
}

impl fmt::Display for ParsedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} exp {}", self.masked(), self.name, self.expiration)
    }
}

impl Drop for ParsedTrack {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
