//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_cyrillic() {
        // Cyrillic letters are 2 bytes each
        assert_eq!(truncate("НАП", 6), "НАП");
        // max_len=10 -> target=7 -> back to char boundary at 6
        assert_eq!(truncate("Загубих книжката си", 10), "Заг...");
    }

    #[test]
    fn test_truncate_emoji() {
        // 🚗 is 4 bytes: max_len=8 -> target=5 -> boundary at 4
        assert_eq!(truncate("🚗🚗🚗", 8), "🚗...");
    }
}
