//! I/O helpers for the command-line tool.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit grey buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `write_segments_txt`: one `x1 y1 x2 y2` line per segment.
use super::ImageU8;
use crate::geometry::LineSegment;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Format segments as whitespace-separated endpoint rows.
pub fn format_segments_txt(segments: &[LineSegment]) -> String {
    let mut out = String::with_capacity(segments.len() * 32);
    for seg in segments {
        let _ = writeln!(
            out,
            "{:.3} {:.3} {:.3} {:.3}",
            seg.beg[0], seg.beg[1], seg.end[0], seg.end[1]
        );
    }
    out
}

/// Write segments as text, one `x1 y1 x2 y2` row each.
pub fn write_segments_txt(path: &Path, segments: &[LineSegment]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, format_segments_txt(segments))
        .map_err(|e| format!("Failed to write segments {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
