//! C++ header generation for archive payloads.

use std::io::{self, Write};

pub const DEFAULT_ARRAY_NAME: &str = "kEmbeddedFontData";
pub const DEFAULT_SIZE_NAME: &str = "kEmbeddedFontSize";
pub const DEFAULT_NAMESPACE: &str = "uapmd::app";

/// Number of byte literals per array line.
pub const BYTES_PER_LINE: usize = 16;

/// Symbol names used in the generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderSymbols {
    pub array_name: String,
    pub size_name: String,
    /// Namespace path, e.g. `foo::bar`.
    pub namespace: String,
}

impl Default for HeaderSymbols {
    fn default() -> Self {
        Self {
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            size_name: DEFAULT_SIZE_NAME.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl HeaderSymbols {
    pub fn new(array_name: impl Into<String>, size_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            array_name: array_name.into(),
            size_name: size_name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Writes `payload` as a `uint8_t` array and a `size_t` constant inside `symbols.namespace`.
///
/// The writer is not flushed; wrap file handles in a `BufWriter`.
pub fn write_header<W: Write>(out: &mut W, symbols: &HeaderSymbols, payload: &[u8]) -> io::Result<()> {
    out.write_all(b"#pragma once\n\n")?;
    out.write_all(b"#include <cstdint>\n")?;
    out.write_all(b"#include <cstddef>\n\n")?;
    writeln!(out, "namespace {} {{\n", symbols.namespace)?;
    writeln!(out, "inline constexpr uint8_t {}[] = {{", symbols.array_name)?;
    write_byte_lines(out, payload)?;
    out.write_all(b"};\n\n")?;
    writeln!(out, "inline constexpr size_t {} = {};\n", symbols.size_name, payload.len())?;
    writeln!(out, "}} // namespace {}", symbols.namespace)?;
    Ok(())
}

fn write_byte_lines<W: Write>(out: &mut W, payload: &[u8]) -> io::Result<()> {
    let line_count = payload.chunks(BYTES_PER_LINE).len();
    for (line, chunk) in payload.chunks(BYTES_PER_LINE).enumerate() {
        out.write_all(b"    ")?;
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            write!(out, "0x{byte:02x}")?;
        }
        if line + 1 < line_count {
            out.write_all(b",")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Renders the header into a string.
pub fn render_header(symbols: &HeaderSymbols, payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(payload.len() * 6 + 256);
    // writing into a Vec can't fail
    let _ = write_header(&mut buffer, symbols, payload);
    String::from_utf8_lossy(&buffer).into_owned()
}
