use tracing::info;

use crate::config::{BuildOptions, SearchOptions, ShowOptions};
use crate::exporters::export_clubs_json;
use crate::matchers::image::ImageResolver;
use crate::matchers::search::{filter_clubs, find_club};
use crate::models::{AppError, BuildReport, Club};
use crate::parsers::parse_club_file;
use crate::processors::club::build_clubs;
use crate::storage::dataset::{load_dataset, save_dataset};
use crate::storage::images::list_image_files;

/// CSVと画像ディレクトリからデータセットを生成して書き出す
///
/// 入力の読み込み・書き出しに失敗した場合はファイルを一切更新せずにエラーを返す
pub fn run_build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    info!(csv = %options.csv.display(), "CSVを読み込みます");
    let table = parse_club_file(&options.csv)?;
    info!(rows = table.rows.len(), "データ行を読み込みました");

    let files = list_image_files(&options.images)?;
    info!(
        dir = %options.images.display(),
        files = files.len(),
        "画像ファイル一覧を取得しました"
    );

    let images = ImageResolver::new(&files, &options.image_root);
    let (clubs, report) = build_clubs(&table, &images);

    let content = export_clubs_json(&clubs)?;
    save_dataset(&options.out, &content)?;
    info!(
        out = %options.out.display(),
        clubs = report.clubs,
        dropped = report.dropped_rows,
        malformed = report.malformed_rows,
        unresolved_images = report.unresolved_images,
        "データセットを書き出しました"
    );

    Ok(report)
}

pub fn run_search(options: &SearchOptions) -> Result<Vec<Club>, AppError> {
    let clubs = load_dataset(&options.data)?;
    let matched = filter_clubs(&clubs, &options.query, options.category)
        .into_iter()
        .cloned()
        .collect();
    Ok(matched)
}

pub fn run_show(options: &ShowOptions) -> Result<Club, AppError> {
    let clubs = load_dataset(&options.data)?;
    find_club(&clubs, &options.id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("クラブが見つかりません: {}", options.id)))
}
