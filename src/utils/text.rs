/// 指定した文字をすべてアンダースコアに置き換える
pub fn underscore_chars(input: &str, targets: &[char]) -> String {
    input.replace(targets, "_")
}

/// ASCII英数字と半角スペース以外を削除する
pub fn strip_special_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// 大文字小文字を区別しない部分一致
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 前後の空白を除き、空なら `None`
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
