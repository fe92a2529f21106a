use log::{debug, error, info, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::HuffmanTree;
use crate::storage::Store;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::{fold_text, freqs};

/// Packed bits plus everything needed to unpack them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub packed: Vec<u8>,
    /// Zero bits added after the last code to fill the last byte (0-7).
    pub pad_bits: u8,
    pub table: CodeTable,
}

/// Sizes before and after compression, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    pub before: usize,
    pub after: usize,
}

impl CompressionReport {
    /// Share of the input saved, 0.25 meaning a quarter smaller.
    pub fn reduction(&self) -> f64 {
        if self.before == 0 {
            return 0.0;
        }
        (self.before as f64 - self.after as f64) / self.before as f64
    }

    pub fn log(&self) {
        info!("Before compression: {} bytes", self.before);
        info!("After compression: {} bytes", self.after);
        info!("Reduction in size: {:.2}%", self.reduction() * 100.0);
    }
}

/// Compress content into packed bits and the code table that unpacks them.
pub fn compress(content: &[u8]) -> Result<Encoded> {
    let tree = HuffmanTree::from_freqs(&freqs(content))?;
    tree.print_structure();
    let table = CodeTable::from_tree(&tree);
    let (packed, pad_bits) = encode(content, &table)?;
    debug!(
        "Packed {} symbols into {} bytes ({} pad bits)",
        content.len(),
        packed.len(),
        pad_bits
    );
    Ok(Encoded {
        packed,
        pad_bits,
        table,
    })
}

/// Replace each symbol with its code and pack the codes into bytes.
/// Returns the bytes and the number of pad bits in the last byte.
pub fn encode(content: &[u8], table: &CodeTable) -> Result<(Vec<u8>, u8)> {
    let codes = table.encode_map();
    let mut bp = BitPacker::new(content.len());
    for &symbol in content {
        let code = codes.get(&symbol).ok_or(HuffError::MissingSymbol(symbol))?;
        bp.push_code(code)?;
    }
    let pad_bits = bp.flush();
    trace!("Packed {} code bits, output ends at {}", bp.bit_len(), bp.loc());
    Ok((bp.output, pad_bits))
}

/// Symbols to compress from raw stored content. In text mode the content is read as
/// UTF-8 and folded into the byte domain.
pub(crate) fn content_symbols(opts: &HuffOpts, raw: Vec<u8>) -> Vec<u8> {
    if opts.text {
        fold_text(&String::from_utf8_lossy(&raw))
    } else {
        raw
    }
}

/// Load content from the store, compress it, and store the packed bytes and code table.
/// Nothing is stored unless compression succeeds.
pub fn compress_file<S: Store>(opts: &HuffOpts, store: &mut S) -> Result<CompressionReport> {
    let content = content_symbols(opts, store.load_content()?);
    info!("Compressing {} symbols", content.len());

    let encoded = compress(&content)?;

    store.store_encoded_bytes(&encoded.packed)?;
    if let Err(e) = store.store_code_table(&encoded.table, encoded.pad_bits) {
        error!("Could not store the code table, discarding the packed bytes.");
        store.discard_encoded_bytes()?;
        return Err(e);
    }

    let report = CompressionReport {
        before: content.len(),
        after: encoded.packed.len(),
    };
    report.log();
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::code_table::CodeEntry;
    use crate::storage::MemoryStore;

    #[test]
    fn abacabad_test() {
        let encoded = compress(b"abacabad").unwrap();
        // a=0 b=10 c=110 d=111: 0 10 0 110 0 10 0 111 = 14 bits
        assert_eq!(encoded.packed, [0b0100_1100, 0b1001_1100]);
        assert_eq!(encoded.pad_bits, 2);
        assert_eq!(encoded.table.len(), 4);
    }

    #[test]
    fn pad_bits_test() {
        // Every code here is 8 bits long, so no padding is needed
        let data: Vec<u8> = (0..=255).collect();
        let encoded = compress(&data).unwrap();
        assert_eq!(encoded.pad_bits, 0);
        assert_eq!(encoded.packed.len(), 256);
    }

    #[test]
    fn single_symbol_test() {
        let encoded = compress(b"aaaa").unwrap();
        assert_eq!(encoded.packed, [0]);
        assert_eq!(encoded.pad_bits, 4);
    }

    #[test]
    fn empty_test() {
        assert!(matches!(compress(b""), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn invalid_code_test() {
        let table = CodeTable::from_entries(vec![
            CodeEntry::new(b'a', "0"),
            CodeEntry::new(b'b', "1?"),
        ]);
        assert!(matches!(
            encode(b"ab", &table),
            Err(HuffError::InvalidCodeSymbol { .. })
        ));
    }

    #[test]
    fn missing_symbol_test() {
        let table = CodeTable::from_entries(vec![CodeEntry::new(b'a', "0")]);
        assert!(matches!(
            encode(b"ab", &table),
            Err(HuffError::MissingSymbol(b'b'))
        ));
    }

    #[test]
    fn report_test() {
        let report = CompressionReport {
            before: 200,
            after: 150,
        };
        assert!((report.reduction() - 0.25).abs() < 1e-9);
        assert_eq!(CompressionReport { before: 0, after: 0 }.reduction(), 0.0);
    }

    #[test]
    fn compress_file_test() {
        let mut store = MemoryStore::new("abacabad");
        let report = compress_file(&HuffOpts::new(), &mut store).unwrap();
        assert_eq!(report, CompressionReport { before: 8, after: 2 });
        assert_eq!(store.encoded, Some(vec![0b0100_1100, 0b1001_1100]));
        assert_eq!(
            store.table.as_deref(),
            Some("97\n0\n98\n10\n99\n110\n100\n111\n2\n")
        );
    }

    #[test]
    fn compress_file_empty_stores_nothing_test() {
        let mut store = MemoryStore::new("");
        assert!(compress_file(&HuffOpts::new(), &mut store).is_err());
        assert!(store.encoded.is_none());
        assert!(store.table.is_none());
    }

    #[test]
    fn text_mode_test() {
        let mut opts = HuffOpts::new();
        opts.text = true;
        let mut store = MemoryStore::new("a€a");
        let report = compress_file(&opts, &mut store).unwrap();
        // Three chars, with the euro sign folded to '?'
        assert_eq!(report.before, 3);
        let table = store.table.unwrap();
        assert!(table.starts_with("63\n") || table.contains("\n63\n"));
    }
}
