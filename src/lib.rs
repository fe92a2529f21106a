//! Huffman coding compressor for text and other byte data.
//!
//! Version 0.1.0
//!
//! Builds a single Huffman code table from the byte frequencies of the input, packs the
//! input with it, and stores the packed bytes next to a plain text copy of the code table.
//! Decompression reads both back and decodes the bits.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufftext -z notes.txt`
//!
//! This will create notes_compressed.txt and notes_compressed_list.txt. Then
//!
//! `$> hufftext -d notes_compressed.txt`
//!
//! writes notes_compressed_decoded.txt.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod storage;
pub mod tools;

pub use compression::compress::{compress, CompressionReport, Encoded};
pub use compression::decompress::decompress;
pub use error::{HuffError, Result};
