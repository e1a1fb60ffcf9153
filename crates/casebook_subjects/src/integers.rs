//! Integer arithmetic subjects.

/// Add two integers and return their sum.
///
/// Overflow wraps in release builds and panics in debug builds, like any other `i64` addition.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_small_values() {
        assert_eq!(add(2, 2), 4);
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(5, 5), 10);
    }

    #[test]
    fn test_add_negative_values() {
        assert_eq!(add(-7, 3), -4);
        assert_eq!(add(-1, -1), -2);
    }

    #[test]
    fn test_add_is_commutative() {
        assert_eq!(add(11, 31), add(31, 11));
    }
}
