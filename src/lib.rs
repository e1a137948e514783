pub mod config;
pub mod models;
pub mod pipeline;
pub mod utils;

pub mod exporters;
pub mod matchers;
pub mod parsers;
pub mod processors;
pub mod storage;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use config::{Cli, Command};
use models::AppError;

/// ログ出力を初期化する（`RUST_LOG` で上書き可能、既定は info）
pub fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

/// コマンドライン引数に従って処理を実行する
///
/// 標準出力には結果のみを書き、ログは標準エラーに出す
pub fn run() -> Result<(), AppError> {
    match Cli::parse().into_command() {
        Command::Build(options) => {
            let report = pipeline::run_build(&options)?;
            println!("{report}");
        }
        Command::Search(options) => {
            let clubs = pipeline::run_search(&options)?;
            for club in &clubs {
                match &club.abbreviation {
                    Some(abbr) => println!("{}\t{}\t{} ({})", club.id, club.category, club.name, abbr),
                    None => println!("{}\t{}\t{}", club.id, club.category, club.name),
                }
            }
        }
        Command::Show(options) => {
            let club = pipeline::run_show(&options)?;
            println!("{}", serde_json::to_string_pretty(&club)?);
        }
    }

    Ok(())
}
