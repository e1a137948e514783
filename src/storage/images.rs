use std::fs;
use std::path::Path;

use tracing::debug;

use crate::models::AppError;

/// 画像ディレクトリ内のファイル名一覧を取得する
///
/// 出力を再現可能にするためファイル名順に並べる。サブディレクトリは含めない。
pub fn list_image_files(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir).map_err(|err| AppError::list_dir(dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| AppError::list_dir(dir, err))?;
        let file_type = entry.file_type().map_err(|err| AppError::list_dir(dir, err))?;
        if file_type.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => files.push(name),
            Err(raw) => debug!(name = ?raw, "UTF-8でないファイル名を無視しました。"),
        }
    }

    files.sort();
    Ok(files)
}
