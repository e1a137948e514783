use tracing::debug;

use crate::matchers::category::classify;
use crate::matchers::image::ImageResolver;
use crate::models::{BuildReport, Club, ImageTag, ParsedTable, RawRow};
use crate::utils::header::{resolve_field, resolve_owned, LogicalField};
use crate::utils::text::non_blank;

use super::identifier::IdRegistry;

/// 1行分のデータからクラブレコードを組み立てる
///
/// # 引数
/// * `row` - CSVの1行
/// * `registry` - 払い出し済みID（このレコードのIDが追加される）
/// * `images` - 画像ファイル一覧
///
/// # 戻り値
/// クラブ名が空の場合は `None`
pub fn build_club(row: &RawRow, registry: &mut IdRegistry, images: &ImageResolver) -> Option<Club> {
    let name = non_blank(resolve_field(row, LogicalField::NAME))?;

    let id = registry.assign(&name);

    let description = resolve_owned(row, LogicalField::WRITE_UP);
    let department = resolve_field(row, LogicalField::DEPARTMENT).unwrap_or_default();
    let category = classify(&name, description.as_deref().unwrap_or_default(), department);

    let image1 = images.resolve(&name, ImageTag::Image1);
    let image2 = images.resolve(&name, ImageTag::Image2);

    Some(Club {
        id,
        category,
        abbreviation: resolve_owned(row, LogicalField::ABBREVIATION),
        description,
        instagram: resolve_owned(row, LogicalField::INSTAGRAM),
        linkedin: resolve_owned(row, LogicalField::LINKEDIN),
        github: resolve_owned(row, LogicalField::GITHUB),
        image1,
        image2,
        name,
    })
}

/// 全行を処理し、入力順のクラブ一覧と集計を返す
pub fn build_clubs(table: &ParsedTable, images: &ImageResolver) -> (Vec<Club>, BuildReport) {
    let mut registry = IdRegistry::new();
    let mut clubs = Vec::with_capacity(table.rows.len());
    let mut report = BuildReport {
        malformed_rows: table.malformed_rows,
        ..BuildReport::default()
    };

    for (idx, row) in table.rows.iter().enumerate() {
        let line_number = table.row_numbers.get(idx).copied().unwrap_or(idx + 2);

        let Some(club) = build_club(row, &mut registry, images) else {
            debug!(line = line_number, "クラブ名が空のため行を除外しました。");
            report.dropped_rows += 1;
            continue;
        };

        for tag in ImageTag::ALL {
            let image = match tag {
                ImageTag::Image1 => &club.image1,
                ImageTag::Image2 => &club.image2,
            };
            if image.is_none() {
                debug!(id = %club.id, tag = tag.as_str(), "画像が見つかりませんでした。");
                report.unresolved_images += 1;
            }
        }

        clubs.push(club);
    }

    report.clubs = clubs.len();
    (clubs, report)
}
