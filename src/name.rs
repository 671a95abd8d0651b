//! Cardholder name normalization.
//!
//! The track name field is nominally `LASTNAME/FIRSTNAME`, but several
//! issuers deviate from the standard:
//!
//! - wide-stripe encodings use a space instead of the `/` separator,
//!   e.g. `LOY DARLA E`
//! - some debit cards store the whole name in first-middle-last order with
//!   a trailing separator, e.g. `FIRSTNAME M LASTNAME        /`
//!
//! [`normalize`] folds both variants into the canonical shape and then splits
//! it. Normalization never fails: inputs that fit no known variant degrade to
//! a best-effort single last-name token.

use std::fmt;

/// A normalized cardholder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardholderName {
    last: String,
    first: Option<String>,
}

impl CardholderName {
    /// Returns the last name (may be empty for degenerate inputs).
    #[inline]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Returns the first name, if one was present in the field.
    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }
}

impl fmt::Display for CardholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.first {
            Some(first) => write!(f, "{}/{}", self.last, first),
            None => write!(f, "{}", self.last),
        }
    }
}

/// Normalizes a raw track name field into last/first parts.
///
/// Applied in precedence order:
///
/// 1. No `/` anywhere: the first space stands in for the separator.
/// 2. Trailing `/`: the field is `FIRST MIDDLE LAST        /`; strip every
///    `/`, trim, and split on the last remaining space. Internal slashes are
///    stripped along with the trailing one, mirroring the encodings seen in
///    the field. With no space left, the whole token becomes the last name.
/// 3. Anything else is already canonical and is left alone.
///
/// # Example
///
/// ```
/// use magparse::name::normalize;
///
/// let name = normalize("DOE/JOHN");
/// assert_eq!(name.last(), "DOE");
/// assert_eq!(name.first(), Some("JOHN"));
///
/// let name = normalize("LOY DARLA E");
/// assert_eq!(name.last(), "LOY");
/// assert_eq!(name.first(), Some("DARLA E"));
/// ```
pub fn normalize(raw: &str) -> CardholderName {
    let data = if !raw.contains('/') {
        // Wide magstripe encoding: space where the separator belongs.
        raw.replacen(' ', "/", 1)
    } else if raw.ends_with('/') {
        // Separator present but nothing after it: first-middle-last order
        // with padding, e.g. `FIRSTNAME M LASTNAME        /`.
        let stripped = raw.replace('/', "");
        let stripped = stripped.trim();
        match stripped.rfind(' ') {
            Some(idx) => {
                let (first, last) = stripped.split_at(idx);
                format!("{}/{}", last.trim(), first.trim())
            }
            // Nothing to split on; keep the single token.
            None => stripped.to_string(),
        }
    } else {
        raw.to_string()
    };

    let mut parts = data.split('/');
    let last = parts.next().unwrap_or_default().trim().to_string();
    let first = parts
        .next()
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .map(str::to_string);

    CardholderName { last, first }
}
