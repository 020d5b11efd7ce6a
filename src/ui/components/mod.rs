/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len.saturating_sub(1)).collect::<String>())
    }
}

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_bar;
pub mod task_list;
pub mod theme_selector;
pub mod toast;

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // 多字节字符按字符数截断
        assert_eq!(truncate("日本語テキスト", 4), "日本語…");
    }
}
