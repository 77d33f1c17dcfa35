//! # 应用图标转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 → 路径解析 → convert → 退出码 │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓ Result<ConversionReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  converter ── 单向流水线编排                              │
//! │   ├─ paths        仓库根目录 / 源 PNG / 目标 ICO 路径     │
//! │   ├─ preflight    源文件存在性 + 输出目录创建             │
//! │   ├─ backup       已有 ICO 带时间戳备份                   │
//! │   └─ icon_codec   解码 · RGBA 归一化 · 多尺寸 · ICO 写入  │
//! │                                                          │
//! │  error ── AppError（每个失败阶段一个分支）                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`paths`] | 从锚点文件推导全部路径 |
//! | [`preflight`] | 写操作之前的存在性检查与目录创建 |
//! | [`backup`] | 覆盖前备份已有 ICO |
//! | [`icon_codec`] | 图片解码、缩放与 ICO 容器读写 |
//! | [`converter`] | 串联以上各阶段 |

pub mod backup;
pub mod converter;
pub mod error;
pub mod icon_codec;
pub mod paths;
pub mod preflight;

pub use converter::{ConversionReport, convert};
pub use error::AppError;
pub use icon_codec::{IconConfig, IconSize};
pub use paths::IconPaths;
