//! Error types for track parsing and validation.
//!
//! Each variant identifies the pipeline stage that rejected the input.
//! `Display` produces the reader-facing messages expected by point-of-sale
//! callers, so errors can be shown to an operator verbatim.

use std::fmt;

/// Errors that can occur while parsing magnetic stripe track data.
///
/// The pipeline fails fast: the first stage that rejects the input produces
/// the error and no later stage runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// The raw input does not fit the expected track layout at all.
    ///
    /// No field was extracted. Typical causes are a misread swipe, a
    /// non-financial card, or plain garbage from the reader.
    StructuralMismatch,

    /// The track layout matched but the format code is not `B`.
    ///
    /// Only ISO/IEC 7813 format `B` (financial transaction card) carries the
    /// field semantics this crate understands.
    UnsupportedFormatCode {
        /// The format code that was found on the stripe.
        found: char,
    },

    /// The card number failed the Luhn mod-10 checksum.
    ChecksumFailure,

    /// The expiry field is shorter than the required 4 characters.
    ///
    /// This includes the `^` placeholder for an absent expiry, which is a
    /// single character and therefore always too short.
    ExpirationTooShort {
        /// The number of characters in the expiry field.
        length: usize,
    },
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // A structural mismatch and an unsupported format code are
            // indistinguishable to the cardholder, so both surface the same
            // operator message.
            Self::StructuralMismatch | Self::UnsupportedFormatCode { .. } => {
                write!(f, "Invalid Card Type, please use a valid credit or debit card.")
            }

            Self::ChecksumFailure => write!(f, "Invalid Credit Card Number"),

            Self::ExpirationTooShort { .. } => write!(f, "Expiration date parsing error"),
        }
    }
}

impl std::error::Error for TrackError {}
