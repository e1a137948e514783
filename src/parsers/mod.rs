mod builder;
mod csv;

use std::path::Path;

use crate::models::{AppError, ParsedTable};

pub use builder::build_raw_rows;
pub use self::csv::parse_csv_text;

pub fn parse_club_file(path: &Path) -> Result<ParsedTable, AppError> {
    if !path.exists() {
        return Err(AppError::not_found(format!(
            "ファイルが見つかりません: {}",
            path.display()
        )));
    }

    csv::parse_csv_file(path)
}
