//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 转换流程是一条单向流水线，任何阶段失败都直接终止整次运行，不做局部恢复或重试。
//! 因此只定义一个 `AppError` 枚举，每个分支对应一个失败阶段，
//! 由 `main` 统一打印并以非零状态码退出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息，消息中始终包含出错路径。
//! - 底层 `io::Error` / `ImageError` 通过 `#[source]` 保留，便于日志追溯。
//! - 不提供 `From<io::Error>`：同一个 I/O 错误在不同阶段含义不同，
//!   必须由调用点显式归类。

use std::io;
use std::path::PathBuf;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 锚点文件不足两级父目录，无法推导仓库根目录
    #[error("无法从锚点推导仓库根目录: {path}")]
    InvalidAnchor { path: PathBuf },

    /// 源 PNG 不存在（未执行任何写操作）
    #[error("源图片不存在: {path}")]
    MissingSource { path: PathBuf },

    /// 目标目录创建失败
    #[error("创建目录 '{path}' 失败: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 已有 ICO 备份失败（目标文件保持原样）
    #[error("备份 '{from}' 到 '{to}' 失败: {source}")]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 源文件存在但无法识别或解码
    #[error("解码图片 '{path}' 失败: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// ICO 编码或写入失败（目标文件可能处于半写状态）
    #[error("写入 ICO '{path}' 失败: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// 尺寸列表非法时使用的编码错误。
    ///
    /// 尺寸校验发生在真正写文件之前，但语义上属于“无法产出 ICO”。
    pub(crate) fn invalid_sizes(path: impl Into<PathBuf>, detail: String) -> Self {
        Self::Encode {
            path: path.into(),
            source: io::Error::new(io::ErrorKind::InvalidInput, detail),
        }
    }
}
