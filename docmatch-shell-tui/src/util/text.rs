//! Display-width helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest suffix of `text` that fits in `max` terminal columns.
///
/// Input fields show their tail so the caret stays visible.
pub fn tail_fit(text: &str, max: usize) -> &str {
    if text.width() <= max {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(tail_fit("dee@example.com", 40), "dee@example.com");
    }

    #[test]
    fn keeps_the_tail() {
        assert_eq!(tail_fit("abcdef", 3), "def");
    }

    #[test]
    fn wide_characters_count_double() {
        // each ideograph takes two columns
        assert_eq!(tail_fit("文档匹配", 5), "匹配");
    }
}
