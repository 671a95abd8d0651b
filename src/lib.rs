//! # magparse
//!
//! Parsing and validation of raw magnetic stripe track data (ISO/IEC 7811
//! Track 2-style, format B) into structured payment fields.
//!
//! Card readers deliver one noisy line of semi-structured text per swipe.
//! This crate turns that line into a validated card number, a canonical
//! `MMYY` expiration, and a normalized cardholder name, or a typed error
//! naming the stage that rejected it.
//!
//! ## Pipeline
//!
//! 1. **Structural matcher** - anchors an explicit track grammar at the start
//!    of the input, tolerating arbitrary trailing reader noise
//! 2. **Format gate** - only format code `B` (financial card) proceeds
//! 3. **Luhn check** - the card number must pass the mod-10 checksum
//! 4. **Field processors** - name normalization (tolerant of known
//!    non-conforming encodings) and expiry reformatting (`YYMM` -> `MMYY`)
//!
//! ## Quick Start
//!
//! ```rust
//! use magparse::{parse, is_valid, TrackError};
//!
//! let track = parse("%B4111111111111111^DOE/JOHN^29011015400000000000?").unwrap();
//! assert_eq!(track.last_name(), "DOE");
//! assert_eq!(track.first_name(), Some("JOHN"));
//! assert_eq!(track.expiration(), "0129");
//! assert_eq!(track.last_four(), "1111");
//!
//! // Safe for logging - never exposes the full card number
//! assert_eq!(track.masked(), "****-****-****-1111");
//!
//! // Failures are data, not panics
//! assert_eq!(parse("garbage-not-a-track").unwrap_err(), TrackError::StructuralMismatch);
//!
//! // Quick boolean check
//! assert!(is_valid("%B4111111111111111^DOE/JOHN^2901?"));
//! ```
//!
//! ## Name variants
//!
//! The nominal name encoding is `LASTNAME/FIRSTNAME`, but two real-world
//! deviations are normalized transparently:
//!
//! ```rust
//! use magparse::name::normalize;
//!
//! // Wide-stripe cards use a space instead of the separator
//! let n = normalize("LOY DARLA E");
//! assert_eq!((n.last(), n.first()), ("LOY", Some("DARLA E")));
//!
//! // Some debit cards store first-middle-last with a trailing separator
//! let n = normalize("FIRSTNAME M LASTNAME        /");
//! assert_eq!((n.last(), n.first()), ("LASTNAME", Some("FIRSTNAME M")));
//! ```
//!
//! ## Security
//!
//! - card digits live in a fixed-size array, zeroed on drop (`zeroize`)
//! - `Debug` and `Display` of [`ParsedTrack`] show masked numbers only
//! - no unsafe code (`#![deny(unsafe_code)]`)
//!
//! Reading from physical hardware, persistence, and transmission of the
//! extracted data are out of scope; the only interface is
//! [`parse`]`(&str) -> Result<ParsedTrack, TrackError>`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod parse;
pub mod track;

// Re-export main types at crate root
pub use card::{ParsedTrack, MAX_CARD_DIGITS};
pub use error::TrackError;
pub use expiry::Expiration;
pub use mask::mask_string;
pub use name::CardholderName;
pub use parse::{is_valid, parse, FINANCIAL_FORMAT_CODE};
pub use track::{match_track, RawTrackFields};
