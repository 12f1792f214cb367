//! Embeds a font file into a C++ header as a deflate-compressed ZIP byte array.
//!
//! ```no_run
//! use font_embedder::{embed, EmbedOptions};
//!
//! embed("assets/Font.ttf", "gen/EmbeddedFont.hpp", &EmbedOptions::default())?;
//! # Ok::<(), font_embedder::EmbedError>(())
//! ```

pub mod archive;
pub mod embedder;
pub mod error;
pub mod header;

pub use embedder::*;
pub use error::*;
pub use header::{HeaderSymbols, DEFAULT_ARRAY_NAME, DEFAULT_NAMESPACE, DEFAULT_SIZE_NAME};
