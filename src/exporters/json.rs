use crate::models::{AppError, Club};

/// クラブ一覧をデータセット用のJSON文字列にする（2スペースインデント）
pub fn export_clubs_json(clubs: &[Club]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(clubs)?)
}

/// データセットのJSON文字列を読み戻す
pub fn parse_clubs_json(content: &str) -> Result<Vec<Club>, AppError> {
    Ok(serde_json::from_str(content)?)
}
