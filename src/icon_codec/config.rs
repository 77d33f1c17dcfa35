//! # 配置模块
//!
//! ## 设计思路
//!
//! 工具本身不接受任何参数，但“写哪些尺寸、用什么滤镜”仍集中在 `IconConfig`，
//! 便于测试用小尺寸列表跑完整流程。
//!
//! ## 实现思路
//!
//! - `Default` 即生产配置：256/128/64/48/32/16 六档，Lanczos3 滤镜。
//! - `validate` 在写文件前拒绝空列表与超出 ICO 范围（1~256）的尺寸。

use std::fmt;
use std::path::Path;

use image::imageops::FilterType;

use crate::error::AppError;

/// ICO 目录项单边允许的最大像素。
pub const MAX_ICO_DIMENSION: u32 = 256;

/// 单个 ICO 帧的目标尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// 目标尺寸是否能被 `width x height` 的源图完整覆盖（无需放大）。
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        self.width <= width && self.height <= height
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 默认写入的尺寸列表，从大到小。
pub const DEFAULT_ICON_SIZES: [IconSize; 6] = [
    IconSize::square(256),
    IconSize::square(128),
    IconSize::square(64),
    IconSize::square(48),
    IconSize::square(32),
    IconSize::square(16),
];

/// ICO 生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 需要嵌入的帧尺寸（重复项会被去重）。
    pub sizes: Vec<IconSize>,
    /// 降采样滤镜。
    pub resize_filter: FilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl IconConfig {
    /// 校验尺寸列表。`dest_path` 仅用于错误信息。
    pub(crate) fn validate(&self, dest_path: &Path) -> Result<(), AppError> {
        if self.sizes.is_empty() {
            return Err(AppError::invalid_sizes(dest_path, "尺寸列表为空".to_string()));
        }

        if let Some(bad) = self.sizes.iter().find(|size| {
            !(1..=MAX_ICO_DIMENSION).contains(&size.width)
                || !(1..=MAX_ICO_DIMENSION).contains(&size.height)
        }) {
            return Err(AppError::invalid_sizes(
                dest_path,
                format!("非法 ICO 尺寸：{}（允许 1~{}）", bad, MAX_ICO_DIMENSION),
            ));
        }

        Ok(())
    }

    /// 去重后的尺寸，保持首次出现的顺序。
    pub(crate) fn unique_sizes(&self) -> Vec<IconSize> {
        let mut unique: Vec<IconSize> = Vec::with_capacity(self.sizes.len());
        for size in &self.sizes {
            if !unique.contains(size) {
                unique.push(*size);
            }
        }
        unique
    }
}
