//! Bengali numeral normalization.

/// Normalize Bengali numerals (০-৯) to ASCII digits, one-to-one.
///
/// All other characters pass through unchanged, so date separators and
/// stray non-digit characters survive; the caller decides whether the
/// result is a valid ID or date. Semantic validation is out of scope.
///
/// # Example
///
/// ```
/// use lipi::repair::normalize_digits;
///
/// assert_eq!(normalize_digits("০১/০১/১৯৯০"), "01/01/1990");
/// assert_eq!(normalize_digits("123"), "123");
/// ```
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '০'..='৯' => {
                // Bengali digit block is contiguous at U+09E6..U+09EF
                char::from(b'0' + (c as u32 - '০' as u32) as u8)
            }
            other => other,
        })
        .collect()
}
