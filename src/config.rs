use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::matchers::image::DEFAULT_IMAGE_ROOT;
use crate::matchers::search::CategoryFilter;

pub const DEFAULT_CSV_PATH: &str = "scripts/ClubDetails.csv";
pub const DEFAULT_IMAGES_DIR: &str = "public/club-images";
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/clubs.json";

#[derive(Debug, Parser)]
#[command(name = "clubdirectory")]
#[command(about = "Build and query the student club directory dataset", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub build: BuildOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// サブコマンド省略時はトップレベルのオプションでビルドする
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Build(self.build))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the club CSV and image folder into the JSON dataset
    Build(BuildOptions),

    /// List clubs whose name or abbreviation contains QUERY
    Search(SearchOptions),

    /// Print a single club by id
    Show(ShowOptions),
}

#[derive(Debug, Clone, Args)]
pub struct BuildOptions {
    /// Club details CSV export
    #[arg(long, env = "CLUBDIR_CSV", default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Directory holding the club images
    #[arg(long, env = "CLUBDIR_IMAGES", default_value = DEFAULT_IMAGES_DIR)]
    pub images: PathBuf,

    /// Where to write the dataset
    #[arg(short, long, env = "CLUBDIR_OUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,

    /// URL prefix prepended to matched image file names
    #[arg(long, env = "CLUBDIR_IMAGE_ROOT", default_value = DEFAULT_IMAGE_ROOT)]
    pub image_root: String,
}

#[derive(Debug, Clone, Args)]
pub struct SearchOptions {
    /// Case-insensitive text matched against name and abbreviation
    #[arg(default_value = "")]
    pub query: String,

    /// All, Sports, Technical, Cultural or Others
    #[arg(short, long, default_value = "All")]
    pub category: CategoryFilter,

    /// Dataset produced by `build`
    #[arg(long, env = "CLUBDIR_DATA", default_value = DEFAULT_OUTPUT_PATH)]
    pub data: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ShowOptions {
    /// Club id (slug)
    pub id: String,

    /// Dataset produced by `build`
    #[arg(long, env = "CLUBDIR_DATA", default_value = DEFAULT_OUTPUT_PATH)]
    pub data: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "clubdirectory",
            "build",
            "--csv",
            "in.csv",
            "--images",
            "imgs",
            "-o",
            "out/clubs.json",
            "--image-root",
            "/static/",
        ])
        .unwrap();

        match cli.into_command() {
            Command::Build(options) => {
                assert_eq!(options.csv, PathBuf::from("in.csv"));
                assert_eq!(options.images, PathBuf::from("imgs"));
                assert_eq!(options.out, PathBuf::from("out/clubs.json"));
                assert_eq!(options.image_root, "/static/");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_means_build() {
        let cli = Cli::try_parse_from(["clubdirectory"]).unwrap();
        assert!(matches!(cli.into_command(), Command::Build(_)));
    }

    #[test]
    fn test_build_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["clubdirectory", "--csv", "in.csv", "--out", "o.json"]).unwrap();

        match cli.into_command() {
            Command::Build(options) => {
                assert_eq!(options.csv, PathBuf::from("in.csv"));
                assert_eq!(options.out, PathBuf::from("o.json"));
                assert_eq!(options.image_root, DEFAULT_IMAGE_ROOT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_top_level_flags_conflict_with_subcommand() {
        assert!(Cli::try_parse_from(["clubdirectory", "--csv", "in.csv", "search", "robo"]).is_err());
    }

    #[test]
    fn test_search_category() {
        let cli = Cli::try_parse_from(["clubdirectory", "search", "robo", "-c", "technical"]).unwrap();
        match cli.into_command() {
            Command::Search(options) => {
                assert_eq!(options.query, "robo");
                assert_eq!(options.category, CategoryFilter::Only(Category::Technical));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["clubdirectory", "search", "-c", "General"]).is_err());
    }
}
