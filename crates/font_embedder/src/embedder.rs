use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    archive::{build_archive, read_entry},
    header::{write_header, HeaderSymbols},
    EmbedError, Result,
};

/// Settings for a single [`embed`] run.
#[derive(Clone, Debug, Default)]
pub struct EmbedOptions {
    pub symbols: HeaderSymbols,

    /// Deflate level `1..=9`, `None` for the default.
    pub compression_level: Option<i64>,

    /// Reopen the archive and compare the entry with the input before writing.
    pub verify: bool,
}

/// Summary of a successful [`embed`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedReport {
    pub output_path: PathBuf,
    pub entry_name: String,
    pub input_len: usize,
    pub archive_len: usize,
}

/// Zips `input_path` into a single entry archive and writes it as a C++ header to `output_path`.
///
/// The header is written to a temporary file next to `output_path` and renamed into place,
/// so a failed run never leaves a truncated header behind.
pub fn embed(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>, options: &EmbedOptions) -> Result<EmbedReport> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let Some(entry_name) = input_path.file_name() else {
        return Err(EmbedError::NoFileName { path: input_path.to_path_buf() });
    };
    // the entry name must match the input file name exactly
    let Some(entry_name) = entry_name.to_str().map(str::to_string) else {
        return Err(EmbedError::NonUtf8FileName { path: input_path.to_path_buf() });
    };
    let data = fs::read(input_path).map_err(|err| EmbedError::read_input(input_path, err))?;
    log::debug!("read {} bytes from {}", data.len(), input_path.display());

    let payload = build_archive(&entry_name, &data, options.compression_level)?;

    if options.verify {
        if read_entry(&payload, &entry_name)? != data {
            return Err(EmbedError::VerifyMismatch { entry: entry_name });
        }
        log::debug!("verified archive entry '{}'", entry_name);
    }

    write_atomic(output_path, |out| write_header(out, &options.symbols, &payload))
        .map_err(|err| EmbedError::write_output(output_path, err))?;

    log::info!(
        "embedded {} ({} bytes) into {} ({} archive bytes)",
        input_path.display(),
        data.len(),
        output_path.display(),
        payload.len()
    );

    Ok(EmbedReport {
        output_path: output_path.to_path_buf(),
        entry_name,
        input_len: data.len(),
        archive_len: payload.len(),
    })
}

/// Attempts to find an unused temporary name before giving up.
const TEMP_ATTEMPTS: usize = 16;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.{:016x}.tmp", std::process::id(), fastrand::u64(..)));
    path.with_file_name(name)
}

/// Creates a fresh temporary sibling of `path`, never reusing one another writer holds.
fn create_temp(path: &Path) -> io::Result<(PathBuf, File)> {
    for _ in 0..TEMP_ATTEMPTS {
        let temp_path = temp_path_for(path);
        match OpenOptions::new().write(true).create_new(true).open(&temp_path) {
            Ok(file) => return Ok((temp_path, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(io::ErrorKind::AlreadyExists, "no unused temporary file name found"))
}

fn write_atomic<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let (temp_path, file) = create_temp(path)?;
    let result = (|| -> io::Result<()> {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()?;
        out.get_ref().sync_all()?;
        drop(out);
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("out/dir/Font.hpp"));
        assert_eq!(temp.parent(), Some(Path::new("out/dir")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".Font.hpp."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn test_temp_paths_are_unique() {
        let a = temp_path_for(Path::new("Font.hpp"));
        let b = temp_path_for(Path::new("Font.hpp"));
        assert_ne!(a, b);
    }
}
