use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::exporters::parse_clubs_json;
use crate::models::{AppError, Club};

/// データセットを書き出す
///
/// 同じディレクトリの一時ファイルに書いてから置き換えるため、
/// 失敗しても途中まで書かれたファイルは残らない
pub fn save_dataset(path: &Path, content: &str) -> Result<(), AppError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|err| AppError::write(parent, err))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|err| AppError::write(path, err))?;
    if let Some(permissions) = dataset_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|err| AppError::write(path, err))?;
    }
    file.write_all(content.as_bytes())
        .map_err(|err| AppError::write(path, err))?;
    file.persist(path)
        .map_err(|err| AppError::write(path, err.error))?;

    Ok(())
}

/// 置き換え後のファイル権限（既存ファイルがあればそれを引き継ぐ）
fn dataset_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

pub fn load_dataset(path: &Path) -> Result<Vec<Club>, AppError> {
    if !path.exists() {
        return Err(AppError::not_found(format!(
            "データセットが見つかりません: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|err| AppError::read(path, err))?;
    parse_clubs_json(&content)
}
