//! The storage module is where hufftext meets the file system.
//!
//! The coder itself only sees byte buffers. The `Store` trait is the short list of
//! things it needs from storage: the content to compress, somewhere to put the packed
//! bytes and the code table, and the way back again when decompressing.
//!
//! `FileStore` keeps each artifact in its own file, named after the input:
//! - `notes.txt` is compressed into `notes_compressed.txt`,
//! - its code table goes to `notes_compressed_list.txt`,
//! - and decompressing writes `notes_compressed_decoded.txt`.
//!
pub mod table_file;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use table_file::{parse_table, write_table};

pub const COMPRESSED_SUFFIX: &str = "_compressed";
pub const TABLE_SUFFIX: &str = "_list";
pub const DECODED_SUFFIX: &str = "_decoded";

/// Storage operations needed to compress and decompress.
pub trait Store {
    /// Content to compress.
    fn load_content(&self) -> Result<Vec<u8>>;
    fn store_encoded_bytes(&mut self, bytes: &[u8]) -> Result<()>;
    fn store_code_table(&mut self, table: &CodeTable, pad_bits: u8) -> Result<()>;
    /// Undo a store_encoded_bytes whose code table could not be stored.
    fn discard_encoded_bytes(&mut self) -> Result<()> {
        Ok(())
    }
    fn load_encoded_bytes(&self) -> Result<Vec<u8>>;
    fn load_code_table(&self) -> Result<(CodeTable, u8)>;
    /// Decompressed content.
    fn store_decoded(&mut self, content: &[u8]) -> Result<()>;
}

/// `notes.txt` + `_compressed` -> `notes_compressed.txt`
pub fn derived_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Keeps every artifact in its own file next to the input.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub content: PathBuf,
    pub encoded: PathBuf,
    pub table: PathBuf,
    pub decoded: PathBuf,
    force_overwrite: bool,
}

impl FileStore {
    /// Paths for compressing the original file at `input`.
    pub fn for_input(input: &Path, force_overwrite: bool) -> Self {
        Self::for_compressed(
            input,
            &derived_path(input, COMPRESSED_SUFFIX),
            force_overwrite,
        )
    }

    /// Paths for decompressing the packed file at `compressed`.
    pub fn for_compressed_file(compressed: &Path, force_overwrite: bool) -> Self {
        Self::for_compressed(compressed, compressed, force_overwrite)
    }

    fn for_compressed(content: &Path, encoded: &Path, force_overwrite: bool) -> Self {
        Self {
            content: content.to_path_buf(),
            encoded: encoded.to_path_buf(),
            table: derived_path(encoded, TABLE_SUFFIX),
            decoded: derived_path(encoded, DECODED_SUFFIX),
            force_overwrite,
        }
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        if !self.force_overwrite && path.exists() {
            return Err(HuffError::Unwritable {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    ErrorKind::AlreadyExists,
                    "file exists, use --force to overwrite",
                ),
            });
        }
        fs::write(path, data).map_err(|source| HuffError::Unwritable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

/// Read a whole file, telling a missing file apart from one that can not be read.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => HuffError::NotFound(path.to_path_buf()),
        _ => HuffError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

impl Store for FileStore {
    fn load_content(&self) -> Result<Vec<u8>> {
        read_file(&self.content)
    }

    fn store_encoded_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write(&self.encoded, bytes)
    }

    fn store_code_table(&mut self, table: &CodeTable, pad_bits: u8) -> Result<()> {
        self.write(&self.table, write_table(table, pad_bits).as_bytes())
    }

    fn discard_encoded_bytes(&mut self) -> Result<()> {
        warn!("Removing {}", self.encoded.display());
        fs::remove_file(&self.encoded).map_err(|source| HuffError::Unwritable {
            path: self.encoded.clone(),
            source,
        })
    }

    fn load_encoded_bytes(&self) -> Result<Vec<u8>> {
        read_file(&self.encoded)
    }

    fn load_code_table(&self) -> Result<(CodeTable, u8)> {
        let record = String::from_utf8(read_file(&self.table)?).map_err(|_| {
            HuffError::MalformedTable(format!("{} is not text", self.table.display()))
        })?;
        parse_table(&record)
    }

    fn store_decoded(&mut self, content: &[u8]) -> Result<()> {
        self.write(&self.decoded, content)
    }
}

/// Keeps every artifact in memory. The table is held in its text record form so it
/// goes through the same parsing as a stored file.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub content: Vec<u8>,
    pub encoded: Option<Vec<u8>>,
    pub table: Option<String>,
    pub decoded: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

impl Store for MemoryStore {
    fn load_content(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }

    fn store_encoded_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.encoded = Some(bytes.to_vec());
        Ok(())
    }

    fn store_code_table(&mut self, table: &CodeTable, pad_bits: u8) -> Result<()> {
        self.table = Some(write_table(table, pad_bits));
        Ok(())
    }

    fn discard_encoded_bytes(&mut self) -> Result<()> {
        self.encoded = None;
        Ok(())
    }

    fn load_encoded_bytes(&self) -> Result<Vec<u8>> {
        self.encoded
            .clone()
            .ok_or_else(|| HuffError::NotFound(PathBuf::from("<memory>/encoded")))
    }

    fn load_code_table(&self) -> Result<(CodeTable, u8)> {
        let record = self
            .table
            .as_deref()
            .ok_or_else(|| HuffError::NotFound(PathBuf::from("<memory>/table")))?;
        parse_table(record)
    }

    fn store_decoded(&mut self, content: &[u8]) -> Result<()> {
        self.decoded = Some(content.to_vec());
        Ok(())
    }
}
