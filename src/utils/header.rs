use crate::models::RawRow;

/// CSVに現れる論理フィールド名
///
/// 末尾の `" - "` は元データのヘッダー表記そのもの
pub struct LogicalField;

impl LogicalField {
    pub const NAME: &'static str = "Student Body Full Name";
    pub const ABBREVIATION: &'static str = "Abbreviation/Short Form";
    pub const WRITE_UP: &'static str = "Write-Up";
    pub const DEPARTMENT: &'static str = "Department";
    pub const INSTAGRAM: &'static str = "Instagram Handle - ";
    pub const LINKEDIN: &'static str = "LinkedIn Handle - ";
    pub const GITHUB: &'static str = "GitHub / Facebook Handle - ";
}

/// ヘッダーの前後に余分な空白が付いた表記も含めて値を取得する
///
/// 完全一致 → 先頭に空白1つ → 末尾に空白1つ の順で探し、
/// 値が空でない最初の候補を返す。見つからなければ `None`。
pub fn resolve_field<'a>(row: &'a RawRow, logical: &str) -> Option<&'a str> {
    header_variants(logical)
        .iter()
        .filter_map(|key| row.get(key))
        .find(|value| !value.is_empty())
}

/// `resolve_field` の結果を所有文字列にする（空なら `None`）
pub fn resolve_owned(row: &RawRow, logical: &str) -> Option<String> {
    resolve_field(row, logical).map(str::to_string)
}

fn header_variants(logical: &str) -> [String; 3] {
    [
        logical.to_string(),
        format!(" {logical}"),
        format!("{logical} "),
    ]
}
