//! 预检模块
//!
//! 在任何写操作之前确认源图片存在；随后确保输出目录存在。
//! 两步顺序不可交换：源文件缺失时不能留下新建的目录。

use std::fs;

use crate::error::AppError;
use crate::paths::IconPaths;

/// 源图片必须存在，否则立即失败。
pub fn ensure_source_exists(paths: &IconPaths) -> Result<(), AppError> {
    if !paths.source_path.exists() {
        return Err(AppError::MissingSource {
            path: paths.source_path.clone(),
        });
    }
    Ok(())
}

/// 输出目录不存在时递归创建，失败即终止。
pub fn ensure_dest_dir(paths: &IconPaths) -> Result<(), AppError> {
    if paths.dest_dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(&paths.dest_dir).map_err(|source| AppError::DirectoryCreation {
        path: paths.dest_dir.clone(),
        source,
    })?;
    log::info!("📁 已创建输出目录: {}", paths.dest_dir.display());
    Ok(())
}
