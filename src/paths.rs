//! 路径解析模块
//!
//! # 设计思路
//!
//! 工具没有任何参数，所有路径都由“工具自身位置”推导而来：
//! 仓库根目录 = 锚点文件往上两级目录。
//! 推导结果在入口处一次性计算，之后只读。
//!
//! # 实现思路
//!
//! - `from_anchor` 负责从锚点文件找到仓库根目录。
//! - `from_repo_root` 负责从根目录拼出源文件、目标目录与目标文件。
//! - 本模块只做纯路径运算，不访问文件系统。

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// 源图片相对仓库根目录的位置。
const SOURCE_RELATIVE: [&str; 2] = ["assets", "icon.png"];
/// ICO 输出目录相对仓库根目录的位置。
const DEST_DIR_RELATIVE: [&str; 3] = ["windows", "runner", "resources"];
/// ICO 文件名。
const DEST_FILE_NAME: &str = "app_icon.ico";

/// 一次转换涉及的全部路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub repo_root: PathBuf,
    pub source_path: PathBuf,
    pub dest_dir: PathBuf,
    pub dest_path: PathBuf,
}

impl IconPaths {
    /// 从锚点文件推导路径。
    ///
    /// # 参数
    /// * `anchor` - 工具自身的入口文件，例如 `<repo>/src/main.rs`
    ///
    /// # 返回
    /// - `Ok(IconPaths)` — 以锚点上两级目录为仓库根目录
    /// - `Err(AppError::InvalidAnchor)` — 锚点不足两级父目录
    pub fn from_anchor(anchor: &Path) -> Result<Self, AppError> {
        let repo_root = anchor
            .parent()
            .and_then(Path::parent)
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or_else(|| AppError::InvalidAnchor {
                path: anchor.to_path_buf(),
            })?;
        Ok(Self::from_repo_root(repo_root))
    }

    /// 从仓库根目录推导路径。
    pub fn from_repo_root(root: &Path) -> Self {
        let source_path = SOURCE_RELATIVE
            .iter()
            .fold(root.to_path_buf(), |acc, part| acc.join(part));
        let dest_dir = DEST_DIR_RELATIVE
            .iter()
            .fold(root.to_path_buf(), |acc, part| acc.join(part));
        let dest_path = dest_dir.join(DEST_FILE_NAME);

        Self {
            repo_root: root.to_path_buf(),
            source_path,
            dest_dir,
            dest_path,
        }
    }

    /// 备份文件路径：`<dest_path>.bak.<timestamp>`。
    pub fn backup_path_at(&self, timestamp: &str) -> PathBuf {
        let mut name = OsString::from(self.dest_path.as_os_str());
        name.push(".bak.");
        name.push(timestamp);
        PathBuf::from(name)
    }
}
