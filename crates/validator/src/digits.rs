//! Digit normalization shared by the document and contact validators.

/// Strips every character that is not an ASCII digit.
///
/// ```
/// use castra_validator::digits::digits_only;
///
/// assert_eq!(digits_only("529.982.247-25"), "52998224725");
/// assert_eq!(digits_only("(11) 98765-4321"), "11987654321");
/// assert_eq!(digits_only("sem números"), "");
/// ```
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `input`, in order.
pub(crate) fn digit_values(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Counts ASCII digits without allocating.
pub fn count_digits(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

/// True when every digit equals the first one (`111.111.111-11`).
///
/// Empty input is not considered repeated.
pub(crate) fn all_same(digits: &[u32]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values_ignores_non_ascii_digits() {
        // Arabic-indic digits are not ASCII digits
        assert_eq!(digit_values("1٢3"), vec![1, 3]);
        assert_eq!(count_digits("1٢3"), 2);
    }

    #[test]
    fn test_all_same() {
        assert!(all_same(&[7, 7, 7]));
        assert!(!all_same(&[7, 7, 1]));
        assert!(!all_same(&[]));
    }
}
