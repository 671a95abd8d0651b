//! Masking utilities for safe display and logging of card numbers.
//!
//! A parsed track holds a full PAN; anything that ends up in a log or on a
//! screen must go through one of these helpers. Only the last four digits
//! (optionally plus the 6-digit BIN) are ever shown.

use crate::ParsedTrack;

/// Masks a track's card number showing only the last 4 digits.
///
/// Format: `****-****-****-1111`, grouped in fours. The safest format for
/// customer-facing display.
///
/// # Example
///
/// ```
/// use magparse::parse;
///
/// let track = parse("%B4111111111111111^DOE/JOHN^2901?").unwrap();
/// assert_eq!(track.masked(), "****-****-****-1111");
/// ```
pub fn mask_card(track: &ParsedTrack) -> String {
    let last_four = track.last_four();
    let len = track.length();
    let masked_count = len.saturating_sub(4);

    let mut result = String::with_capacity(len + len / 4);
    let mut i = 0;
    while i < masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
        i += 1;
    }

    if masked_count > 0 && masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(&last_four);
    result
}

/// Masks a track's card number keeping the BIN (first 6) and last 4 visible.
///
/// Format: `411111******1111`. Acceptable for logging in secure
/// environments. Numbers of 10 digits or fewer are masked entirely except
/// for the last 4 digits.
///
/// # Example
///
/// ```
/// use magparse::parse;
///
/// let track = parse("%B4111111111111111^DOE/JOHN^2901?").unwrap();
/// assert_eq!(track.masked_with_bin(), "411111******1111");
/// ```
pub fn mask_with_bin(track: &ParsedTrack) -> String {
    let digits = track.digits();
    let len = digits.len();

    if len <= 10 {
        // Too short for a visible BIN plus a masked middle.
        let visible = len.saturating_sub(4);
        let mut result = "*".repeat(visible);
        result.extend(digits[visible..].iter().map(|&d| (b'0' + d) as char));
        return result;
    }

    let mut result: String = digits[..6].iter().map(|&d| (b'0' + d) as char).collect();
    result.push_str(&"*".repeat(len - 10));
    result.extend(digits[len - 4..].iter().map(|&d| (b'0' + d) as char));
    result
}

/// Masks an arbitrary digit string, showing only the last 4 digits.
///
/// For masking numbers that did not come from a parsed track, e.g. raw
/// reader output echoed into an error report. Non-digit characters are
/// dropped.
///
/// # Example
///
/// ```
/// use magparse::mask_string;
///
/// assert_eq!(mask_string("4111111111111111"), "************1111");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    let visible = digits.len().saturating_sub(4);

    let mut result = "*".repeat(visible);
    result.extend(&digits[visible..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_mask_card_grouping() {
        let track = parse("%B4111111111111111^DOE/JOHN^2901?").unwrap();
        assert_eq!(mask_card(&track), "****-****-****-1111");
    }

    #[test]
    fn test_mask_card_odd_length() {
        // 15-digit Amex groups unevenly.
        let track = parse("%B378282246310005^DOE/JOHN^2901?").unwrap();
        let masked = mask_card(&track);
        assert!(!masked.contains("378282246310005"));
        assert!(masked.ends_with("0005"));
        assert_eq!(masked.matches('*').count(), 11);
    }

    #[test]
    fn test_mask_with_bin() {
        let track = parse("%B4111111111111111^DOE/JOHN^2901?").unwrap();
        assert_eq!(mask_with_bin(&track), "411111******1111");
    }

    #[test]
    fn test_mask_with_bin_short_number() {
        // 13-digit Visa still hides the middle.
        let track = parse("%B4222222222222^DOE/JOHN^2901?").unwrap();
        let masked = mask_with_bin(&track);
        assert_eq!(masked, "422222***2222");
    }

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("4111111111111111"), "************1111");
        assert_eq!(mask_string("4111-1111-1111-1111"), "************1111");
        assert_eq!(mask_string("123"), "123");
        assert_eq!(mask_string(""), "");
    }
}
