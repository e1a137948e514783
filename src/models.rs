use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// CSVの1行分（ヘッダー名 → セル値、列順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// ヘッダー名の完全一致でセル値を取得
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(header, _)| header == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// 読み込み済みのCSV（ヘッダー + データ行）
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    pub row_numbers: Vec<usize>,
    pub malformed_rows: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sports,
    Technical,
    Cultural,
    #[default]
    Others,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Sports,
        Category::Technical,
        Category::Cultural,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "Sports",
            Category::Technical => "Technical",
            Category::Cultural => "Cultural",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("未知のカテゴリです: {value}")))
    }
}

/// 画像ファイル名に含まれるタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTag {
    Image1,
    Image2,
}

impl ImageTag {
    pub const ALL: [ImageTag; 2] = [ImageTag::Image1, ImageTag::Image2];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageTag::Image1 => "Image1",
            ImageTag::Image2 => "Image2",
        }
    }
}

/// 出力データセットの1レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default)]
    pub image1: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
}

/// 1回のビルドの集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub clubs: usize,
    pub dropped_rows: usize,
    pub malformed_rows: usize,
    pub unresolved_images: usize,
}

/// 実行終了時に標準出力へ出す1行サマリ
impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processed {} clubs.", self.clubs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("ファイルの読み込みに失敗しました ({}): {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ファイルの書き込みに失敗しました ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("画像ディレクトリの一覧取得に失敗しました ({}): {source}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSVの解析に失敗しました: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSONの処理に失敗しました: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn list_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ListDir {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_bare_name() {
        let json = serde_json::to_string(&Category::Technical).unwrap();
        assert_eq!(json, "\"Technical\"");
        assert_eq!(Category::default(), Category::Others);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("sports".parse::<Category>().unwrap(), Category::Sports);
        assert_eq!(" Cultural ".parse::<Category>().unwrap(), Category::Cultural);
        assert!("General".parse::<Category>().is_err());
    }

    #[test]
    fn test_club_omits_missing_text_fields_but_keeps_image_keys() {
        let club = Club {
            id: "chess-club".to_string(),
            name: "Chess Club".to_string(),
            category: Category::Others,
            abbreviation: None,
            description: Some("We play chess".to_string()),
            instagram: None,
            linkedin: None,
            github: None,
            image1: None,
            image2: Some("/club-images/Chess_Club_Image2.png".to_string()),
        };

        let value = serde_json::to_value(&club).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("abbreviation"));
        assert!(object.contains_key("description"));
        assert_eq!(object["image1"], serde_json::Value::Null);
        assert_eq!(object["category"], "Others");
    }

    #[test]
    fn test_build_report_summary_line() {
        let report = BuildReport {
            clubs: 2,
            dropped_rows: 1,
            malformed_rows: 3,
            unresolved_images: 4,
        };
        assert_eq!(report.to_string(), "Processed 2 clubs.");
        assert_eq!(BuildReport::default().to_string(), "Processed 0 clubs.");
    }

    #[test]
    fn test_raw_row_exact_lookup() {
        let row = RawRow::new(vec![
            (" Department".to_string(), "CS".to_string()),
            ("Write-Up".to_string(), "text".to_string()),
        ]);
        assert_eq!(row.get(" Department"), Some("CS"));
        assert_eq!(row.get("Department"), None);
        assert_eq!(row.len(), 2);
    }
}
