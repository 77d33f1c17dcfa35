//! # 中间模型
//!
//! - `SourceImage` 表示已解码、已归一化为 RGBA8 的源图
//! - `IconFrame` 表示可直接写入 ICO 目录项的单帧 RGBA 数据

use image::RgbaImage;

use super::IconSize;

/// 解码后的源图（只读）。
pub struct SourceImage {
    pub(crate) rgba: RgbaImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// 原始 RGBA 像素（`width * height * 4` 字节）。
    pub fn as_raw(&self) -> &[u8] {
        self.rgba.as_raw()
    }
}

/// 单个 ICO 帧。
pub struct IconFrame {
    /// 帧尺寸，始终等于请求的目标尺寸。
    pub size: IconSize,
    /// RGBA 字节数组（`width * height * 4`）。
    pub rgba: Vec<u8>,
}
