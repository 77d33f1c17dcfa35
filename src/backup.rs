//! 备份模块
//!
//! # 设计思路
//!
//! 覆盖已有 ICO 之前，先把它按字节复制到同目录下的
//! `app_icon.ico.bak.<YYYYMMDDTHHMMSS>`。复制失败视为致命错误，
//! 绝不在未备份的情况下继续覆盖。
//!
//! # 实现思路
//!
//! - 时间戳使用 `chrono::Local`，格式固定 15 个字符。
//! - `fs::copy` 复制内容与权限；修改/访问时间尽力复制，失败只记日志。
//! - 同一秒内多次运行时，在时间戳后追加 `-1`、`-2` 避免覆盖旧备份，
//!   此时文件名为 `app_icon.ico.bak.<YYYYMMDDTHHMMSS>-<n>`，
//!   是对 15 字符时间戳命名的有意扩展；相隔一秒以上的运行不会带后缀。

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::AppError;
use crate::paths::IconPaths;

/// 备份时间戳格式：`20240102T030405`。
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// 生成备份时间戳。
pub fn backup_timestamp(now: DateTime<Local>) -> String {
    now.format(BACKUP_TIMESTAMP_FORMAT).to_string()
}

/// 若目标 ICO 已存在则备份它。
///
/// # 返回
/// - `Ok(None)` — 目标不存在，无需备份
/// - `Ok(Some(path))` — 备份文件路径
/// - `Err(AppError::Backup)` — 复制失败，目标文件未被改动
pub fn backup_existing(paths: &IconPaths, now: DateTime<Local>) -> Result<Option<PathBuf>, AppError> {
    if !paths.dest_path.exists() {
        return Ok(None);
    }

    let backup_path = free_backup_path(paths, &backup_timestamp(now));
    log::info!("🗂️ 备份已有 ICO 到: {}", backup_path.display());

    fs::copy(&paths.dest_path, &backup_path).map_err(|source| AppError::Backup {
        from: paths.dest_path.clone(),
        to: backup_path.clone(),
        source,
    })?;

    if let Err(err) = copy_file_times(&paths.dest_path, &backup_path) {
        log::warn!("⚠️ 备份文件时间戳复制失败（内容已备份）: {err}");
    }

    Ok(Some(backup_path))
}

/// 选出未被占用的备份路径。
///
/// 优先使用纯时间戳名；已被占用时改用 `<timestamp>-<n>`。
fn free_backup_path(paths: &IconPaths, timestamp: &str) -> PathBuf {
    let candidate = paths.backup_path_at(timestamp);
    if !candidate.exists() {
        return candidate;
    }

    (1u32..)
        .map(|n| paths.backup_path_at(&format!("{timestamp}-{n}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

fn copy_file_times(from: &Path, to: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(to)?.set_times(times)
}
