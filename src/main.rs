//! # 应用图标转换工具 — 程序入口
//!
//! 无参数运行：读取 `<repo>/assets/icon.png`，
//! 写出 `<repo>/windows/runner/resources/app_icon.ico`。
//! 仓库根目录取本文件往上两级，即本工具所在目录。

use std::path::Path;
use std::process::ExitCode;

use icon_converter::{IconConfig, IconPaths, convert};

/// 工具自身入口文件，编译期固定。
const ANCHOR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs");

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = IconPaths::from_anchor(Path::new(ANCHOR))
        .and_then(|paths| convert(&paths, &IconConfig::default()));

    match result {
        Ok(report) => {
            if let Some(backup) = &report.backup_path {
                log::info!("旧 ICO 已保留在: {}", backup.display());
            }
            log::info!("Done.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}
