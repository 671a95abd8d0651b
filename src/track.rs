//! Structural matcher for raw magnetic stripe track data.
//!
//! Swipe data arrives as a single line in the ISO/IEC 7813 "format B" layout:
//!
//! ```text
//! %B4111111111111111^DOE/JOHN^29011015400000000000?
//! ^ ^                ^        ^   ^  ^              ^
//! | |                |        |   |  |              terminator (optional)
//! | |                |        |   |  discretionary data (optional)
//! | |                |        |   service code, 3 digits or `^` (optional)
//! | |                |        expiry, 4 digits (YYMM) or `^` placeholder
//! | |                name field, 2-26 chars
//! | card number, 1-19 digits
//! sentinel (optional)
//! ```
//!
//! The grammar is anchored at the start of the input. Readers commonly append
//! control characters, an LRC byte, or length padding after the `?`
//! terminator, so everything past the discretionary field is ignored rather
//! than validated.
//!
//! The matcher only reports whether the input fits the layout and which
//! substrings fill each field; checksum, format code, and field content are
//! judged by later pipeline stages.

/// The raw substrings of one track, borrowed from the input.
///
/// Fields are exactly as they appear on the stripe; no normalization or
/// validation beyond the structural constraints has happened yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTrackFields<'a> {
    /// Single uppercase letter identifying the track layout (`B` = financial).
    pub format_code: char,
    /// Primary account number, 1-19 ASCII digits.
    pub card_number: &'a str,
    /// Raw name field, 2-26 characters, not yet normalized.
    pub name: &'a str,
    /// Expiry field: 4 digits (`YYMM`) or the literal `^` placeholder.
    pub expiry: &'a str,
    /// Service code: 3 digits or the literal `^` placeholder, if present.
    pub service_code: Option<&'a str>,
    /// Issuer discretionary data up to (not including) the `?` terminator.
    pub discretionary: Option<&'a str>,
}

/// A small cursor over the input string.
///
/// Keeps the grammar auditable: each field below is one `take_*` call with
/// its length and charset constraint spelled out at the call site.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes one char if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes the next char, whatever it is.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes up to `max` chars matching `pred` and returns them.
    fn take_while(&mut self, max: usize, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let mut taken = 0;
        while taken < max {
            match self.peek() {
                Some(c) if pred(c) => {
                    self.pos += c.len_utf8();
                    taken += 1;
                }
                _ => break,
            }
        }
        &self.input[start..self.pos]
    }

    /// Consumes exactly `n` chars matching `pred`, or consumes nothing.
    fn take_exact(&mut self, n: usize, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let mut probe = *self;
        let taken = probe.take_while(n, pred);
        if taken.chars().count() == n {
            self.pos = probe.pos;
            Some(taken)
        } else {
            None
        }
    }
}

/// Matches raw stripe data against the track layout.
///
/// Returns the raw field substrings, or `None` when the input does not fit
/// the structure at all. Trailing content after the discretionary field is
/// ignored.
///
/// # Example
///
/// ```
/// use magparse::track::match_track;
///
/// let fields = match_track("%B4111111111111111^DOE/JOHN^2901101?").unwrap();
/// assert_eq!(fields.format_code, 'B');
/// assert_eq!(fields.card_number, "4111111111111111");
/// assert_eq!(fields.name, "DOE/JOHN");
/// assert_eq!(fields.expiry, "2901");
/// assert_eq!(fields.service_code, Some("101"));
///
/// assert!(match_track("not a track").is_none());
/// ```
pub fn match_track(input: &str) -> Option<RawTrackFields<'_>> {
    let mut cur = Cursor::new(input);

    // Start sentinel; some readers strip it before delivery.
    cur.eat('%');

    let format_code = cur.bump().filter(|c| c.is_ascii_uppercase())?;

    let card_number = cur.take_while(19, |c| c.is_ascii_digit());
    // An empty run, a 20th digit, or anything other than the separator
    // where `^` must sit all fail the match.
    if card_number.is_empty() || !cur.eat('^') {
        return None;
    }

    let name = cur.take_while(26, |c| c != '^');
    if name.chars().count() < 2 || !cur.eat('^') {
        return None;
    }

    let expiry = cur
        .take_exact(4, |c| c.is_ascii_digit())
        .or_else(|| cur.take_exact(1, |c| c == '^'))?;

    let service_code = cur
        .take_exact(3, |c| c.is_ascii_digit())
        .or_else(|| cur.take_exact(1, |c| c == '^'));

    let discretionary = match cur.take_while(usize::MAX, |c| c != '?') {
        "" => None,
        data => Some(data),
    };

    Some(RawTrackFields {
        format_code,
        card_number,
        name,
        expiry,
        service_code,
        discretionary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_TRACK: &str = "%B4111111111111111^DOE/JOHN^29011015400000000000?";

    #[test]
    fn test_full_track() {
        let fields = match_track(FULL_TRACK).unwrap();
        assert_eq!(fields.format_code, 'B');
        assert_eq!(fields.card_number, "4111111111111111");
        assert_eq!(fields.name, "DOE/JOHN");
        assert_eq!(fields.expiry, "2901");
        assert_eq!(fields.service_code, Some("101"));
        assert_eq!(fields.discretionary, Some("5400000000000000"));
    }

    #[test]
    fn test_sentinel_is_optional() {
        let fields = match_track("B4111111111111111^DOE/JOHN^2901?").unwrap();
        assert_eq!(fields.format_code, 'B');
        assert_eq!(fields.card_number, "4111111111111111");
    }

    #[test]
    fn test_minimal_track() {
        // One-digit card number, no service code, no discretionary data,
        // no terminator.
        let fields = match_track("%B0^AB^2901").unwrap();
        assert_eq!(fields.card_number, "0");
        assert_eq!(fields.name, "AB");
        assert_eq!(fields.expiry, "2901");
        assert_eq!(fields.service_code, None);
        assert_eq!(fields.discretionary, None);
    }

    #[test]
    fn test_expiry_placeholder() {
        let fields = match_track("%B4111111111111111^DOE/JOHN^^101?").unwrap();
        assert_eq!(fields.expiry, "^");
        assert_eq!(fields.service_code, Some("101"));
    }

    #[test]
    fn test_service_code_placeholder() {
        let fields = match_track("%B4111111111111111^DOE/JOHN^2901^?").unwrap();
        assert_eq!(fields.expiry, "2901");
        assert_eq!(fields.service_code, Some("^"));
    }

    #[test]
    fn test_both_placeholders() {
        let fields = match_track("%B4111111111111111^DOE/JOHN^^^?").unwrap();
        assert_eq!(fields.expiry, "^");
        assert_eq!(fields.service_code, Some("^"));
        assert_eq!(fields.discretionary, None);
    }

    #[test]
    fn test_partial_service_code_goes_to_discretionary() {
        // Two digits cannot form a service code; they fall through to the
        // discretionary field.
        let fields = match_track("%B4111111111111111^DOE/JOHN^290112?").unwrap();
        assert_eq!(fields.expiry, "2901");
        assert_eq!(fields.service_code, None);
        assert_eq!(fields.discretionary, Some("12"));
    }

    #[test]
    fn test_trailing_noise_ignored() {
        let noisy = format!("{FULL_TRACK}\r\n;extra-reader-garbage");
        let fields = match_track(&noisy).unwrap();
        assert_eq!(fields.card_number, "4111111111111111");
        assert_eq!(fields.discretionary, Some("5400000000000000"));
    }

    #[test]
    fn test_card_number_length_limits() {
        // 19 digits is the maximum.
        let fields = match_track("%B4111111111111111110^DOE/JOHN^2901?").unwrap();
        assert_eq!(fields.card_number.len(), 19);

        // A 20th digit sits where the separator must be.
        assert!(match_track("%B41111111111111111100^DOE/JOHN^2901?").is_none());

        // Zero digits.
        assert!(match_track("%B^DOE/JOHN^2901?").is_none());
    }

    #[test]
    fn test_name_length_limits() {
        // 26 chars accepted.
        let name = "ABCDEFGHIJKLM/NOPQRSTUVWXY";
        assert_eq!(name.len(), 26);
        let track = format!("%B4111111111111111^{name}^2901?");
        assert_eq!(match_track(&track).unwrap().name, name);

        // 27 chars rejected.
        let track = format!("%B4111111111111111^{name}Z^2901?");
        assert!(match_track(&track).is_none());

        // 1 char rejected.
        assert!(match_track("%B4111111111111111^D^2901?").is_none());
    }

    #[test]
    fn test_expiry_must_be_four_digits_or_placeholder() {
        assert!(match_track("%B4111111111111111^DOE/JOHN^290?").is_none());
        assert!(match_track("%B4111111111111111^DOE/JOHN^29AB?").is_none());
        assert!(match_track("%B4111111111111111^DOE/JOHN^").is_none());
    }

    #[test]
    fn test_format_code_must_be_uppercase() {
        assert!(match_track("%b4111111111111111^DOE/JOHN^2901?").is_none());
        assert!(match_track("%54111111111111111^DOE/JOHN^2901?").is_none());
    }

    #[test]
    fn test_non_financial_format_still_matches() {
        // Other layouts match syntactically; rejecting them is the format
        // gate's job, not the matcher's.
        let fields = match_track("%A4111111111111111^DOE/JOHN^2901?").unwrap();
        assert_eq!(fields.format_code, 'A');
    }

    #[test]
    fn test_garbage_inputs() {
        assert!(match_track("").is_none());
        assert!(match_track("%").is_none());
        assert!(match_track("garbage-not-a-track").is_none());
        assert!(match_track(";4111111111111111=2901101?").is_none());
    }

    #[test]
    fn test_non_ascii_name_chars() {
        // The name field excludes only `^`; a misread byte decoded as a
        // non-ASCII char must not panic the matcher.
        let fields = match_track("%B4111111111111111^DÖE/JOHN^2901?").unwrap();
        assert_eq!(fields.name, "DÖE/JOHN");
    }
}
