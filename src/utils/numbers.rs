//! Number formatting utilities.

/// Format an integer with comma thousands separators.
///
/// # Example
///
/// ```rust
/// use count_tokens::utils::numbers::group_thousands;
///
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// assert_eq!(group_thousands(35), "35");
/// ```
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
