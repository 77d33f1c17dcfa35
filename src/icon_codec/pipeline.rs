//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“文件 → 图像 → RGBA → 多尺寸帧”的过程集中管理。
//! 源图只解码一次，各尺寸帧都从同一份 RGBA 源图独立缩放，不做级联缩放。
//!
//! ## 实现思路
//!
//! 1. 按文件内容猜测格式并完整解码（不依赖扩展名）
//! 2. 统一转换为 RGBA8（无 alpha 通道时补 255）
//! 3. 按目标尺寸等比缩放到“框内最大”，再居中贴到透明画布上
//! 4. 目标尺寸大于源图时跳过该尺寸；全部被跳过时保底放大出最小尺寸

use std::path::Path;

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, ImageReader, Rgba, RgbaImage};

use super::source::{IconFrame, SourceImage};
use super::{IconCodec, IconSize};
use crate::error::AppError;

impl IconCodec {
    /// 解码源图片并归一化为 RGBA8。
    pub fn decode_source(&self, path: &Path) -> Result<SourceImage, AppError> {
        let decode_err = |source: image::ImageError| AppError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let decoded = ImageReader::open(path)
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        let color = decoded.color();
        let rgba = decoded.to_rgba8();

        log::info!(
            "✅ 源图片解码成功 - 尺寸: {}x{} 色彩: {:?}",
            rgba.width(),
            rgba.height(),
            color
        );

        Ok(SourceImage { rgba })
    }

    /// 为配置中的每个尺寸生成一帧。
    ///
    /// 返回顺序与配置顺序一致（去重后）。
    pub fn render_frames(&self, source: &SourceImage) -> Vec<IconFrame> {
        let (src_width, src_height) = (source.width(), source.height());
        let requested = self.config.unique_sizes();

        let mut targets: Vec<IconSize> = Vec::with_capacity(requested.len());
        for size in &requested {
            if size.fits_within(src_width, src_height) {
                targets.push(*size);
            } else {
                log::warn!(
                    "⚠️ 跳过尺寸 {}：大于源图 {}x{}",
                    size,
                    src_width,
                    src_height
                );
            }
        }

        if targets.is_empty() {
            if let Some(smallest) = requested
                .iter()
                .min_by_key(|size| u64::from(size.width) * u64::from(size.height))
            {
                log::warn!(
                    "⚠️ 源图 {}x{} 小于所有目标尺寸，放大生成 {} 以保证 ICO 非空",
                    src_width,
                    src_height,
                    smallest
                );
                targets.push(*smallest);
            }
        }

        targets
            .into_iter()
            .map(|size| self.render_frame(source, size))
            .collect()
    }

    fn render_frame(&self, source: &SourceImage, size: IconSize) -> IconFrame {
        let (fit_width, fit_height) = fit_within(source.width(), source.height(), size);

        let fitted = if (fit_width, fit_height) == (source.width(), source.height()) {
            source.rgba.clone()
        } else {
            self.resize(source, fit_width, fit_height)
        };

        let rgba = if (fit_width, fit_height) == (size.width, size.height) {
            fitted
        } else {
            let mut canvas = RgbaImage::new(size.width, size.height);
            let x = i64::from((size.width - fit_width) / 2);
            let y = i64::from((size.height - fit_height) / 2);
            imageops::replace(&mut canvas, &fitted, x, y);
            canvas
        };

        log::debug!(
            "🧩 生成帧 {}（内容 {}x{}，filter={:?}）",
            size,
            fit_width,
            fit_height,
            self.config.resize_filter
        );

        IconFrame {
            size,
            rgba: rgba.into_raw(),
        }
    }

    fn resize(&self, source: &SourceImage, target_width: u32, target_height: u32) -> RgbaImage {
        let filter = self.config.resize_filter;
        match Self::resize_with_fast_image_resize(source, target_width, target_height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize：{}", err);
                imageops::resize(&source.rgba, target_width, target_height, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        source: &SourceImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, String> {
        let src_image = fr::images::ImageRef::new(
            source.width(),
            source.height(),
            source.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| format!("构建源图像缓冲失败：{}", e))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| format!("fast_image_resize 执行失败：{}", e))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| "fast_image_resize 输出缓冲长度异常".to_string())
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

/// 等比缩放到目标框内的最大尺寸，单边至少 1 像素。
fn fit_within(width: u32, height: u32, target: IconSize) -> (u32, u32) {
    let scale = (f64::from(target.width) / f64::from(width))
        .min(f64::from(target.height) / f64::from(height));

    let fit_width = ((f64::from(width) * scale).round() as u32).clamp(1, target.width);
    let fit_height = ((f64::from(height) * scale).round() as u32).clamp(1, target.height);
    (fit_width, fit_height)
}
