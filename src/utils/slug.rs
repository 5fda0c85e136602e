//! 题干 slug 工具
//!
//! 题干同时充当单题产物的文件名，需要折叠成安全的短标识

/// slug 的最大长度（字符数）
const MAX_SLUG_LEN: usize = 80;

/// 把题干折叠为文件名安全的 slug
///
/// 字母数字转小写保留，其余字符折叠为下划线；
/// 去掉首尾下划线后截断到 80 个字符。
pub fn slugify(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            folded.extend(c.to_lowercase());
        } else {
            folded.push('_');
        }
    }

    folded
        .trim_matches('_')
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
