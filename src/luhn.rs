//! Luhn checksum validation for card numbers.
//!
//! The Luhn algorithm ("modulus 10") catches single-digit errors and most
//! adjacent transpositions in identification numbers. Every card number
//! extracted from a track must pass it before the number is trusted.
//!
//! The doubling step uses a lookup table, keeping validation branch-free and
//! O(n) over the 1-19 digits a track can carry.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a card number using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9 values, not ASCII).
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. The number is valid iff the sum is divisible by 10
///
/// # Example
///
/// ```
/// use magparse::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10).
#[inline]
fn checksum(digits: &[u8]) -> u32 {
    let len = digits.len();
    let mut sum: u32 = 0;

    // Right to left: position 0 (rightmost) is kept, position 1 doubled,
    // position 2 kept, and so on.
    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    sum
}

/// Computes the check digit that completes a partial card number.
///
/// Given all digits except the last, returns the digit that makes the full
/// number pass [`validate`]. Used by tests and benchmarks to synthesize
/// valid card numbers of arbitrary length.
///
/// # Example
///
/// ```
/// use magparse::luhn::check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    // With the check digit appended, every existing digit shifts one
    // position left: what is currently an even position from the right
    // becomes odd and gets doubled.
    let len = digits.len();
    let mut sum: u32 = 0;

    let mut i = 0;
    while i < len {
        let digit = digits[len - 1 - i];
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        i += 1;
    }

    ((10 - (sum % 10)) % 10) as u8
}
