//! Text normalization for scraped content.

/// Collapse all runs of whitespace into single spaces and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  a \n\t b   c "), "a b c");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n  "), "");
        assert_eq!(clean_text("already clean"), "already clean");
    }
}
