use crate::models::ImageTag;
use crate::utils::text::{strip_special_chars, underscore_chars};

pub const DEFAULT_IMAGE_ROOT: &str = "/club-images/";

/// 画像ファイル名の照合方式（厳密 → 緩い の順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// 空白・カンマ・引用符を `_` に置換
    Punctuation,
    /// 上記に加えて `&` も `_` に置換
    Ampersand,
    /// 英数字と空白以外を削除し、空白を `_` に置換
    Stripped,
}

/// 照合順序。緩い方式を先に試すと似た名前の別クラブに誤マッチする
pub const CASCADE: [MatchStrategy; 3] = [
    MatchStrategy::Punctuation,
    MatchStrategy::Ampersand,
    MatchStrategy::Stripped,
];

impl MatchStrategy {
    pub fn normalize(&self, name: &str) -> String {
        match self {
            MatchStrategy::Punctuation => underscore_chars(name, &[' ', ',', '\'', '"']),
            MatchStrategy::Ampersand => underscore_chars(name, &[' ', ',', '&', '\'', '"']),
            MatchStrategy::Stripped => strip_special_chars(name).replace(' ', "_"),
        }
    }
}

/// クラブ名と画像ファイル一覧を突き合わせる
///
/// ファイル一覧は実行開始時に1度だけ読み込んだものを共有する。
/// 同じ方式で複数ファイルが一致した場合は一覧の先頭を採用する（優先度としての意味はない）。
#[derive(Debug, Clone)]
pub struct ImageResolver<'a> {
    files: &'a [String],
    root: String,
}

impl<'a> ImageResolver<'a> {
    pub fn new(files: &'a [String], root: &str) -> Self {
        let root = if root.is_empty() || root.ends_with('/') {
            root.to_string()
        } else {
            format!("{root}/")
        };

        Self { files, root }
    }

    /// 画像パスを返す。どの方式でも一致しなければ `None`
    pub fn resolve(&self, name: &str, tag: ImageTag) -> Option<String> {
        self.resolve_with_strategy(name, tag)
            .map(|(path, _)| path)
    }

    /// 一致した方式も合わせて返す
    pub fn resolve_with_strategy(
        &self,
        name: &str,
        tag: ImageTag,
    ) -> Option<(String, MatchStrategy)> {
        let tag = tag.as_str();
        let candidates: Vec<&String> = self
            .files
            .iter()
            .filter(|file| file.contains(tag))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        CASCADE.iter().find_map(|strategy| {
            let prefix = format!("{}_{}", strategy.normalize(name), tag);
            candidates
                .iter()
                .find(|file| file.starts_with(&prefix))
                .map(|file| (format!("{}{}", self.root, file), *strategy))
        })
    }
}
