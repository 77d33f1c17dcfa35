//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `convert` 只负责流程编排，处理链路固定为：
//! 1. 确认源图片存在（失败时不产生任何写操作）
//! 2. 确保输出目录存在
//! 3. 备份已有 ICO
//! 4. 解码源图片
//! 5. 生成多尺寸帧并写入 ICO
//!
//! 任一阶段失败立即返回，不重试、不回滚。
//!
//! ## 实现思路
//!
//! - 各阶段耗时以 `debug` 级别记录，便于定位慢步骤。
//! - 源图与帧缓冲在各自阶段结束时释放，错误路径同样由所有权保证释放。

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;

use crate::backup;
use crate::error::AppError;
use crate::icon_codec::{IconCodec, IconConfig, IconSize};
use crate::paths::IconPaths;
use crate::preflight;

/// 一次成功转换的结果摘要。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub dest_path: PathBuf,
    pub backup_path: Option<PathBuf>,
    /// 实际写入的帧尺寸（跳过的尺寸不在其中）。
    pub sizes: Vec<IconSize>,
    pub bytes_written: u64,
}

/// 执行一次 PNG → ICO 转换。
///
/// # 示例
/// ```rust,ignore
/// use icon_converter::{convert, IconConfig, IconPaths};
///
/// let paths = IconPaths::from_repo_root(std::path::Path::new("/path/to/repo"));
/// let report = convert(&paths, &IconConfig::default())?;
/// println!("{:?}", report.sizes);
/// # Ok::<(), icon_converter::AppError>(())
/// ```
pub fn convert(paths: &IconPaths, config: &IconConfig) -> Result<ConversionReport, AppError> {
    let total_start = Instant::now();

    preflight::ensure_source_exists(paths)?;
    config.validate(&paths.dest_path)?;
    preflight::ensure_dest_dir(paths)?;

    let backup_path = backup::backup_existing(paths, Local::now())?;

    let codec = IconCodec::new(config.clone());

    log::info!("🖼️ 加载源图片: {}", paths.source_path.display());
    let decode_start = Instant::now();
    let source = codec.decode_source(&paths.source_path)?;
    log::debug!("⏱️ decode 耗时: {:?}", decode_start.elapsed());

    let render_start = Instant::now();
    let frames = codec.render_frames(&source);
    drop(source);
    log::debug!("⏱️ render 耗时: {:?}", render_start.elapsed());

    let sizes: Vec<IconSize> = frames.iter().map(|frame| frame.size).collect();
    log::info!(
        "💾 写入 ICO: {} 尺寸: [{}]",
        paths.dest_path.display(),
        sizes
            .iter()
            .map(IconSize::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let write_start = Instant::now();
    let bytes_written = codec.write_ico(frames, &paths.dest_path)?;
    log::debug!("⏱️ write 耗时: {:?}", write_start.elapsed());

    log::info!(
        "✅ ICO 写入完成 - {} 字节，共 {} 帧，总耗时 {:?}",
        bytes_written,
        sizes.len(),
        total_start.elapsed()
    );

    Ok(ConversionReport {
        dest_path: paths.dest_path.clone(),
        backup_path,
        sizes,
        bytes_written,
    })
}
