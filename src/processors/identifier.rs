use std::collections::HashSet;

/// スラッグが空になった場合の基底ID
const FALLBACK_BASE: &str = "club";

/// 表示名をURLに使えるスラッグへ変換する
///
/// 小文字化し、`[a-z0-9]` 以外の連続をハイフン1つにまとめ、前後のハイフンを除く
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// 表示名から一意なIDを払い出し、`used_ids` に登録する
///
/// # 引数
/// * `name` - クラブの表示名
/// * `used_ids` - この実行で払い出し済みのID
///
/// # 戻り値
/// 未使用のID（重複時は `-1`, `-2`, ... を付与）
pub fn assign_id(name: &str, used_ids: &mut HashSet<String>) -> String {
    let slug = slugify(name);
    let base = if slug.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        slug
    };

    let mut id = base.clone();
    let mut counter = 0usize;
    while used_ids.contains(&id) {
        counter += 1;
        id = format!("{}-{}", base, counter);
    }

    used_ids.insert(id.clone());
    id
}

/// 1回のビルドで払い出したIDの集合
#[derive(Debug, Default)]
pub struct IdRegistry {
    used: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, name: &str) -> String {
        assign_id(name, &mut self.used)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
