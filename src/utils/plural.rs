//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "script")` -> `"0 scripts"`
/// - `plural_count(1, "script")` -> `"1 script"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "script"), "0 scripts");
        assert_eq!(plural_count(1, "script"), "1 script");
        assert_eq!(plural_count(7, "comment"), "7 comments");
    }
}
