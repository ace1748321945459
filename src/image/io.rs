//! I/O helpers for page rasters, masks and JSON.
//!
//! - `decode_rgb`: decode PNG/JPEG bytes into an RGB raster.
//! - `load_rgb_image`: read an image file from disk as RGB.
//! - `encode_png`: serialize a grayscale buffer to in-memory PNG bytes.
//! - `save_gray_png` / `save_rgb_png`: write buffers to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use crate::error::RosterError;
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, RosterError> {
    Ok(image::load_from_memory(bytes)?.into_rgb8())
}

pub fn load_rgb_image(path: &Path) -> Result<RgbImage, RosterError> {
    Ok(image::open(path)?.into_rgb8())
}

/// PNG bytes for a grayscale buffer, as fed to external recognizers.
pub fn encode_png(buffer: &GrayImageU8) -> Result<Vec<u8>, RosterError> {
    let mut out = Cursor::new(Vec::new());
    buffer.to_gray_image().write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

pub fn save_gray_png(buffer: &GrayImageU8, path: &Path) -> Result<(), RosterError> {
    ensure_parent_dir(path)?;
    buffer.to_gray_image().save(path)?;
    Ok(())
}

pub fn save_rgb_png(image: &RgbImage, path: &Path) -> Result<(), RosterError> {
    ensure_parent_dir(path)?;
    image.save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), RosterError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), RosterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
