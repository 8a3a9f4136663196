//! GIF to spritesheet conversion
//!
//! **Why**: The game engine loads one horizontal strip per animation, while
//! the art pipeline delivers animated GIFs. Each GIF becomes a single PNG
//! with its frames tiled left-to-right in decode order.
//!
//! **Used by**: Batch driver (one call per matched source file)

use image::codecs::gif::GifDecoder;
use image::{imageops, AnimationDecoder, ImageFormat, RgbaImage};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Result summary for one written spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetInfo {
    /// Number of frames tiled into the sheet
    pub frames: usize,
    /// Width of a single frame (first frame is canonical)
    pub width: u32,
    /// Height of a single frame
    pub height: u32,
}

impl SheetInfo {
    /// Final sheet dimensions: `(width * frames, height)`
    pub fn sheet_size(&self) -> (u32, u32) {
        (self.width * self.frames as u32, self.height)
    }
}

/// Conversion errors
#[derive(Debug)]
pub enum SheetError {
    Open(String),
    Decode(String),
    NoFrames,
    TooLarge(String),
    Write(String),
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::Open(e) => write!(f, "Cannot open source: {}", e),
            SheetError::Decode(e) => write!(f, "Decode error: {}", e),
            SheetError::NoFrames => write!(f, "No frames in animation"),
            SheetError::TooLarge(e) => write!(f, "Sheet too large: {}", e),
            SheetError::Write(e) => write!(f, "Write error: {}", e),
        }
    }
}

impl std::error::Error for SheetError {}

/// Convert one animated GIF into a horizontally tiled PNG spritesheet.
///
/// Decodes every frame to RGBA (alpha preserved), takes the first frame's
/// size as canonical, allocates a fully transparent canvas of
/// `(width * frame_count, height)` and pastes frame `i` at `(i * width, 0)`.
/// Pastes overwrite rather than blend; slots never overlap, so this is a
/// straight copy. Parent directories of `destination` are created as needed.
///
/// Nothing is written on failure. Frames are assumed to share the first
/// frame's size (the GIF decoder yields full-canvas frames).
pub fn convert(source: &Path, destination: &Path) -> Result<SheetInfo, SheetError> {
    let file = File::open(source).map_err(|e| SheetError::Open(e.to_string()))?;
    let decoder =
        GifDecoder::new(BufReader::new(file)).map_err(|e| SheetError::Decode(e.to_string()))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| SheetError::Decode(e.to_string()))?;

    if frames.is_empty() {
        return Err(SheetError::NoFrames);
    }

    let (frame_w, frame_h) = frames[0].buffer().dimensions();
    let sheet_w = sheet_width(frame_w, frames.len()).ok_or_else(|| {
        SheetError::TooLarge(format!("{} frames of width {}", frames.len(), frame_w))
    })?;

    // RgbaImage::new zero-fills: fully transparent background
    let mut sheet = RgbaImage::new(sheet_w, frame_h);
    for (i, frame) in frames.iter().enumerate() {
        imageops::replace(&mut sheet, frame.buffer(), i as i64 * frame_w as i64, 0);
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SheetError::Write(e.to_string()))?;
        }
    }
    sheet
        .save_with_format(destination, ImageFormat::Png)
        .map_err(|e| SheetError::Write(e.to_string()))?;

    debug!(
        "Tiled {} frames of {}x{} into {}",
        frames.len(),
        frame_w,
        frame_h,
        destination.display()
    );

    Ok(SheetInfo {
        frames: frames.len(),
        width: frame_w,
        height: frame_h,
    })
}

/// Sheet width for a frame size and count, None when it overflows u32
fn sheet_width(frame_w: u32, frames: usize) -> Option<u32> {
    u32::try_from(frames)
        .ok()
        .and_then(|n| frame_w.checked_mul(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Frame, Rgba};
    use std::path::PathBuf;

    fn write_test_gif(path: &PathBuf, frames: usize, w: u32, h: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        let frames: Vec<Frame> = (0..frames)
            .map(|i| {
                let buf = RgbaImage::from_pixel(w, h, Rgba([10 + (i as u8) * 40, 0, 0, 255]));
                Frame::new(buf)
            })
            .collect();
        encoder.encode_frames(frames).unwrap();
    }

    #[test]
    fn test_sheet_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("anim.gif");
        let dst = dir.path().join("anim.png");
        write_test_gif(&src, 3, 8, 8);

        let info = convert(&src, &dst).unwrap();
        assert_eq!(info.frames, 3);
        assert_eq!((info.width, info.height), (8, 8));
        assert_eq!(info.sheet_size(), (24, 8));

        let sheet = image::open(&dst).unwrap().to_rgba8();
        assert_eq!(sheet.dimensions(), (24, 8));
        // Every frame slot is filled with opaque pixels
        for i in 0..3u32 {
            assert_eq!(sheet.get_pixel(i * 8 + 4, 4)[3], 255);
        }
    }

    #[test]
    fn test_frames_tile_in_animation_order() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("anim.gif");
        let dst = dir.path().join("anim.png");
        write_test_gif(&src, 4, 8, 8);

        convert(&src, &dst).unwrap();
        let sheet = image::open(&dst).unwrap().to_rgba8();

        // write_test_gif paints frame i solid red 10 + i*40, so slot i must
        // carry frame i's color. GIF palettes may shift values slightly:
        // allow a small tolerance and require reds to increase across slots.
        let reds: Vec<u8> = (0..4u32).map(|i| sheet.get_pixel(i * 8 + 4, 4)[0]).collect();
        for (i, &r) in reds.iter().enumerate() {
            let expected = 10 + i as i16 * 40;
            assert!(
                (r as i16 - expected).abs() <= 8,
                "slot {}: red {} not near {}",
                i,
                r,
                expected
            );
        }
        assert!(reds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sheet_width_overflow() {
        assert_eq!(sheet_width(8, 3), Some(24));
        assert_eq!(sheet_width(0, 5), Some(0));
        assert_eq!(sheet_width(u32::MAX, 2), None);
        assert_eq!(sheet_width(65535, 65537), None);
    }

    #[test]
    fn test_creates_output_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("anim.gif");
        let dst = dir.path().join("out").join("nested").join("anim.png");
        write_test_gif(&src, 2, 4, 6);

        let info = convert(&src, &dst).unwrap();
        assert_eq!(info.sheet_size(), (8, 6));
        assert!(dst.is_file());
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("nope.gif");
        let dst = dir.path().join("out.png");

        let err = convert(&src, &dst).unwrap_err();
        assert!(matches!(err, SheetError::Open(_)));
        assert!(!dst.exists());
    }

    #[test]
    fn test_corrupt_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("garbage.gif");
        let dst = dir.path().join("out.png");
        std::fs::write(&src, b"definitely not a gif").unwrap();

        assert!(convert(&src, &dst).is_err());
        assert!(!dst.exists());
    }

    #[test]
    fn test_empty_animation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("empty.gif");
        let dst = dir.path().join("out.png");

        // Minimal GIF89a: header + logical screen descriptor + trailer, no frames
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"GIF89a");
        bytes.extend_from_slice(&[8, 0, 8, 0, 0, 0, 0]);
        bytes.push(0x3B);
        std::fs::write(&src, &bytes).unwrap();

        let err = convert(&src, &dst).unwrap_err();
        assert!(matches!(err, SheetError::NoFrames | SheetError::Decode(_)));
        assert!(!dst.exists());
    }

    #[test]
    fn test_idempotent_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("anim.gif");
        let dst = dir.path().join("anim.png");
        write_test_gif(&src, 4, 16, 16);

        convert(&src, &dst).unwrap();
        let first = std::fs::read(&dst).unwrap();
        convert(&src, &dst).unwrap();
        let second = std::fs::read(&dst).unwrap();
        assert_eq!(first, second);
    }
}
