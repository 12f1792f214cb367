//! In-memory single entry ZIP payloads.
//!
//! The payload is what ends up in the generated header. Entries are stored
//! with a fixed modification time so the same input always yields the same
//! bytes.

use std::io::{Cursor, Read, Write};

use zip::{write::SimpleFileOptions, CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::{EmbedError, Result};

/// Lowest deflate level accepted for `compression_level`.
pub const MIN_COMPRESSION_LEVEL: i64 = 1;
/// Highest deflate level accepted for `compression_level`.
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

fn entry_options(compression_level: Option<i64>) -> Result<SimpleFileOptions> {
    if let Some(level) = compression_level {
        if !(MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).contains(&level) {
            return Err(EmbedError::InvalidCompressionLevel { level });
        }
    }
    Ok(SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(compression_level)
        .last_modified_time(DateTime::default()))
}

/// Builds a ZIP archive containing `data` as the single entry `entry_name`.
///
/// `compression_level` of `None` uses the deflate default.
pub fn build_archive(entry_name: &str, data: &[u8], compression_level: Option<i64>) -> Result<Vec<u8>> {
    let options = entry_options(compression_level)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(entry_name, options)?;
    writer.write_all(data)?;
    let payload = writer.finish()?.into_inner();
    log::debug!("archived '{}': {} bytes -> {} bytes", entry_name, data.len(), payload.len());
    Ok(payload)
}

/// Reopens an archive payload and returns the decompressed content of `entry_name`.
pub fn read_entry(payload: &[u8], entry_name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(Cursor::new(payload))?;
    let mut file = archive.by_name(entry_name)?;
    let mut buffer = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abc_round_trip() {
        let payload = build_archive("x.ttf", b"ABC", None).unwrap();
        assert_eq!(read_entry(&payload, "x.ttf").unwrap(), b"ABC");
    }

    #[test]
    fn test_single_deflated_entry() {
        let payload = build_archive("font.ttf", &[7u8; 512], None).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(payload.as_slice())).unwrap();
        assert_eq!(archive.len(), 1);
        let file = archive.by_index(0).unwrap();
        assert_eq!(file.name(), "font.ttf");
        assert_eq!(file.compression(), CompressionMethod::Deflated);
        assert_eq!(file.size(), 512);
    }

    #[test]
    fn test_empty_entry() {
        let payload = build_archive("empty.ttf", &[], None).unwrap();
        assert!(!payload.is_empty());
        assert!(read_entry(&payload, "empty.ttf").unwrap().is_empty());
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 31 % 251) as u8).collect();
        let a = build_archive("a.ttf", &data, None).unwrap();
        let b = build_archive("a.ttf", &data, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compression_level() {
        let data = b"The quick brown fox jumps over the lazy dog. ".repeat(200);
        for level in MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL {
            let payload = build_archive("t.ttf", &data, Some(level)).unwrap();
            assert!(payload.len() < data.len());
            assert_eq!(read_entry(&payload, "t.ttf").unwrap(), data);
        }
    }

    #[test]
    fn test_invalid_compression_level() {
        assert!(matches!(
            build_archive("t.ttf", b"data", Some(10)),
            Err(EmbedError::InvalidCompressionLevel { level: 10 })
        ));
        assert!(matches!(
            build_archive("t.ttf", b"data", Some(0)),
            Err(EmbedError::InvalidCompressionLevel { level: 0 })
        ));
    }

    #[test]
    fn test_missing_entry() {
        let payload = build_archive("a.ttf", b"data", None).unwrap();
        assert!(matches!(read_entry(&payload, "b.ttf"), Err(EmbedError::Zip(_))));
    }
}
