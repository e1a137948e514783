use std::fmt;
use std::str::FromStr;

use crate::models::{AppError, Category, Club};
use crate::utils::text::contains_ignore_case;

/// 一覧画面のカテゴリ絞り込み
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => *expected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// カテゴリと検索語でクラブを絞り込む
///
/// 検索語は名前または略称に対する大文字小文字を区別しない部分一致
pub fn filter_clubs<'a>(clubs: &'a [Club], query: &str, filter: CategoryFilter) -> Vec<&'a Club> {
    clubs
        .iter()
        .filter(|club| filter.matches(club.category))
        .filter(|club| {
            contains_ignore_case(&club.name, query)
                || club
                    .abbreviation
                    .as_deref()
                    .is_some_and(|abbr| contains_ignore_case(abbr, query))
        })
        .collect()
}

pub fn find_club<'a>(clubs: &'a [Club], id: &str) -> Option<&'a Club> {
    clubs.iter().find(|club| club.id == id)
}
