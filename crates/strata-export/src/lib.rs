//! PNG persistence for linearized map buffers.
//!
//! A sink at the edge of the pipeline: callers hand in a row-major RGBA
//! buffer plus dimensions and a path. Export failures never invalidate the
//! generated maps; generation success and persistence success are
//! independent outcomes. Hosts without a writable filesystem simply skip
//! this crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Errors that can occur while encoding or writing a map image.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The buffer does not hold `width * height` RGBA pixels.
    #[error("buffer of length {len} does not match {width}x{height} RGBA (expected {expected})")]
    LengthMismatch {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },

    /// Failed to create or write the output file.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Write a row-major RGBA buffer as an 8-bit PNG at `path`.
///
/// The parent directory must already exist; the file is created or
/// truncated.
pub fn write_rgba_png(
    path: &Path,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(), ExportError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(ExportError::LengthMismatch {
            len: pixels.len(),
            width,
            height,
            expected,
        });
    }

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_png_decodes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");

        let pixels: Vec<u8> = (0..4 * 2 * 4).map(|i| (i * 3 % 256) as u8).collect();
        write_rgba_png(&path, 4, 2, &pixels).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();

        assert_eq!((info.width, info.height), (4, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&buf[..info.buffer_size()], pixels.as_slice());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");

        let result = write_rgba_png(&path, 4, 4, &[0; 10]);
        assert!(matches!(
            result,
            Err(ExportError::LengthMismatch { len: 10, expected: 64, .. })
        ));
        assert!(!path.exists(), "No file may be created on a mismatch");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("map.png");

        let result = write_rgba_png(&path, 1, 1, &[1, 2, 3, 255]);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
