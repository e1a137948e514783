use tracing::warn;

use crate::models::{AppError, ParsedTable, RawRow};

const UTF8_BOM: char = '\u{FEFF}';

/// 読み込んだ行データからヘッダーとデータ行を組み立てる
///
/// # 引数
/// * `rows` - CSVの全行（ヘッダー行を含む）とファイル上の行番号（1始まり）
///
/// # 戻り値
/// ヘッダー名をキーにした行データ
///
/// 列数がヘッダーと異なる行は、不足分を空セルで補い、余分なセルは切り捨てる。
pub fn build_raw_rows(rows: Vec<(usize, Vec<String>)>) -> Result<ParsedTable, AppError> {
    let mut header_row: Option<Vec<String>> = None;
    let mut data_rows: Vec<(usize, Vec<String>)> = Vec::new();

    for (line_number, row) in rows {
        if is_blank_row(&row) {
            continue;
        }

        if header_row.is_none() {
            header_row = Some(row);
            continue;
        }

        data_rows.push((line_number, row));
    }

    let mut headers =
        header_row.ok_or_else(|| AppError::invalid_input("CSV内にヘッダー行が見つかりませんでした。"))?;

    if let Some(first) = headers.first_mut() {
        if first.starts_with(UTF8_BOM) {
            *first = first.trim_start_matches(UTF8_BOM).to_string();
        }
    }

    let width = headers.len();
    let mut rows = Vec::with_capacity(data_rows.len());
    let mut row_numbers = Vec::with_capacity(data_rows.len());
    let mut malformed_rows = 0;

    for (line_number, mut row) in data_rows {
        if row.len() != width {
            warn!(
                line = line_number,
                expected = width,
                found = row.len(),
                "列数がヘッダーと一致しません。空セルで補完または切り捨てます。"
            );
            malformed_rows += 1;
            row.resize(width, String::new());
        }

        let cells = headers.iter().cloned().zip(row).collect();
        rows.push(RawRow::new(cells));
        row_numbers.push(line_number);
    }

    Ok(ParsedTable {
        headers,
        rows,
        row_numbers,
        malformed_rows,
    })
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
