//! # 图标编解码模块（icon_codec）
//!
//! ## 设计思路
//!
//! 该模块是“文件字节 ↔ 像素缓冲”的唯一边界，按职责拆分子模块：
//!
//! - `config`：尺寸列表与缩放滤镜
//! - `source`：源图与帧的中间模型
//! - `pipeline`：解码、RGBA 归一化、多尺寸缩放
//! - `encoder`：ICO 容器写入与回读
//!
//! ## 调用链
//!
//! ```text
//! converter.rs
//!    ↓
//! IconCodec::decode_source   （pipeline.rs）
//!    ↓
//! IconCodec::render_frames   （pipeline.rs）
//!    ↓
//! IconCodec::write_ico       （encoder.rs）
//! ```

mod config;
mod encoder;
mod pipeline;
mod source;

pub use config::{DEFAULT_ICON_SIZES, IconConfig, IconSize, MAX_ICO_DIMENSION};
pub use encoder::read_ico_sizes;
pub use source::{IconFrame, SourceImage};

/// 图标编解码器。
///
/// 只持有不可变配置，一次转换内所有阶段共享同一份配置。
pub struct IconCodec {
    pub(crate) config: IconConfig,
}

impl IconCodec {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }
}
