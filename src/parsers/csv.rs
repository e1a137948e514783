use std::path::Path;

use csv::ReaderBuilder;

use crate::models::{AppError, ParsedTable};

use super::build_raw_rows;

/// クラブ情報CSVファイルを読み込む
pub fn parse_csv_file(path: &Path) -> Result<ParsedTable, AppError> {
    let content = std::fs::read_to_string(path).map_err(|err| AppError::read(path, err))?;
    parse_csv_text(&content)
}

/// CSV文字列を行データに変換する
///
/// 列数の揃っていない行も読み込み、整形は `build_raw_rows` に任せる
pub fn parse_csv_text(content: &str) -> Result<ParsedTable, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // 引用符内の改行や空行を含めた、ファイル上の開始行
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 1);
        rows.push((line, record.iter().map(|cell| cell.to_string()).collect()));
    }

    build_raw_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_cells() {
        let text = "Student Body Full Name,Write-Up\n\"The Wall Street Club , BITS Goa\",\"Markets, \"\"finance\"\" and more\"\n";
        let table = parse_csv_text(text).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0].get("Student Body Full Name"),
            Some("The Wall Street Club , BITS Goa")
        );
        assert_eq!(
            table.rows[0].get("Write-Up"),
            Some("Markets, \"finance\" and more")
        );
    }

    #[test]
    fn test_parse_multiline_cell() {
        let text = "Student Body Full Name,Write-Up\r\nDance Club,\"line one\nline two\"\r\n";
        let table = parse_csv_text(text).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].get("Write-Up"), Some("line one\nline two"));
    }

    #[test]
    fn test_row_numbers_follow_file_lines() {
        let text = "Student Body Full Name,Write-Up\n\"Dance Club\",\"line one\nline two\"\nShort Club\n";
        let table = parse_csv_text(text).unwrap();

        assert_eq!(table.row_numbers, vec![2, 4]);
        assert_eq!(table.malformed_rows, 1);
        assert_eq!(table.rows[1].get("Write-Up"), Some(""));
    }

    #[test]
    fn test_parse_missing_file_is_read_error() {
        let err = parse_csv_file(Path::new("/nonexistent/ClubDetails.csv")).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }
}
