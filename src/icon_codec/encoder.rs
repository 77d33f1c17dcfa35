//! # ICO 容器读写
//!
//! 写入：每帧编码为一个目录项，整体一次性写出。
//! 写入过程中失败时目标文件可能只写了一半，这里不做临时文件替换。
//!
//! 读取：只解析目录项尺寸，用于写完后的汇总日志与测试断言。

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use super::source::IconFrame;
use super::{IconCodec, IconSize};
use crate::error::AppError;

impl IconCodec {
    /// 将帧写入 `dest_path`，返回写入的字节数。
    pub fn write_ico(&self, frames: Vec<IconFrame>, dest_path: &Path) -> Result<u64, AppError> {
        let encode_err = |source: io::Error| AppError::Encode {
            path: dest_path.to_path_buf(),
            source,
        };

        if frames.is_empty() {
            return Err(AppError::invalid_sizes(dest_path, "没有可写入的帧".to_string()));
        }

        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for frame in frames {
            let image = IconImage::from_rgba_data(frame.size.width, frame.size.height, frame.rgba);
            icon_dir.add_entry(IconDirEntry::encode(&image).map_err(encode_err)?);
        }

        let file = File::create(dest_path).map_err(encode_err)?;
        let mut writer = BufWriter::new(file);
        icon_dir.write(&mut writer).map_err(encode_err)?;
        writer.flush().map_err(encode_err)?;
        drop(writer);

        fs::metadata(dest_path).map(|m| m.len()).map_err(encode_err)
    }
}

/// 读取 ICO 中各目录项的尺寸，按文件中的顺序返回。
pub fn read_ico_sizes(path: &Path) -> io::Result<Vec<IconSize>> {
    let icon_dir = IconDir::read(BufReader::new(File::open(path)?))?;
    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| IconSize {
            width: entry.width(),
            height: entry.height(),
        })
        .collect())
}
