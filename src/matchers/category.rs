use crate::models::Category;

/// カテゴリ判定に使うキーワード（上から順に評価）
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 3] = [
    (
        Category::Sports,
        &["sport", "cricket", "football", "basketball", "ultimate", "kabaddi"],
    ),
    (
        Category::Technical,
        &[
            "robot", "code", "program", "tech", "engineer", "finance", "invest", "consult",
        ],
    ),
    (
        Category::Cultural,
        &[
            "dance", "music", "art", "drama", "theatre", "photo", "film", "fashion", "culture",
            "literary",
        ],
    ),
];

/// クラブ名・説明・学科からカテゴリを推定する
///
/// # 引数
/// * `name` - クラブ名
/// * `description` - 説明文（無ければ空文字）
/// * `department` - 学科（無ければ空文字）
///
/// # 戻り値
/// 最初にキーワードが一致したカテゴリ。どれも一致しなければ `Others`
pub fn classify(name: &str, description: &str, department: &str) -> Category {
    let text = format!("{} {} {}", name, description, department).to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sports_wins_over_technical() {
        assert_eq!(classify("Cricket and Robot Club", "", ""), Category::Sports);
        assert_eq!(classify("Robotics", "we also play cricket", ""), Category::Sports);
    }

    #[test]
    fn test_technical_wins_over_cultural() {
        assert_eq!(classify("Film Tech Society", "", ""), Category::Technical);
    }

    #[test]
    fn test_keywords_match_any_field_case_insensitive() {
        assert_eq!(classify("Dance Club", "", ""), Category::Cultural);
        assert_eq!(classify("Nritya", "We do DANCE and music", ""), Category::Cultural);
        assert_eq!(classify("Quant Society", "", "Finance"), Category::Technical);
        assert_eq!(classify("Ultimate Frisbee", "", ""), Category::Sports);
    }

    #[test]
    fn test_substring_containment() {
        // "party" に "art" が含まれるため Cultural になる
        assert_eq!(classify("Party Planners", "", ""), Category::Cultural);
    }

    #[test]
    fn test_default_is_others() {
        assert_eq!(classify("Quiz Club", "trivia nights", ""), Category::Others);
        assert_eq!(classify("", "", ""), Category::Others);
    }
}
