use log::{debug, error, info, trace};

use super::compress::{compress, content_symbols, CompressionReport, Encoded};
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{CodeTable, CodeTableByLength};
use crate::storage::Store;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::unfold_text;

/// Decode a bit sequence. At each position the longest code that fits is tried first,
/// then each shorter length down to one bit.
pub fn decode(bits: &[bool], by_len: &CodeTableByLength) -> Result<Vec<u8>> {
    let max_len = by_len.max_len();
    let mut out = Vec::with_capacity(bits.len() / max_len.max(1));
    let mut pos = 0;

    'symbol: while pos < bits.len() {
        // Near the end, only look as far as the bits we still have.
        let longest = max_len.min(bits.len() - pos);
        for len in (1..=longest).rev() {
            if let Some(sym) = by_len.lookup(&bits[pos..pos + len]) {
                trace!("{:>6}: {:>3}", pos, sym);
                out.push(sym);
                pos += len;
                continue 'symbol;
            }
        }
        error!("No code matches the stream at bit {}", pos);
        return Err(HuffError::UndecodableSequence { position: pos });
    }
    Ok(out)
}

/// Unpack and decode packed bytes using the table they were encoded with.
pub fn decompress_parts(packed: &[u8], pad_bits: u8, table: &CodeTable) -> Result<Vec<u8>> {
    let by_len = CodeTableByLength::new(table)?;
    let reader = BitReader::new(packed);
    trace!("Reading {} bits from {}", reader.bits_left(), reader.loc());
    let bits = reader.bits(pad_bits)?;
    debug!(
        "Decoding {} bits with codes of up to {} bits",
        bits.len(),
        by_len.max_len()
    );
    decode(&bits, &by_len)
}

pub fn decompress(encoded: &Encoded) -> Result<Vec<u8>> {
    decompress_parts(&encoded.packed, encoded.pad_bits, &encoded.table)
}

/// Load the packed bytes and code table from the store, decode them, and store the
/// result. Returns the stored content. Nothing is stored unless decoding succeeds.
pub fn decompress_file<S: Store>(opts: &HuffOpts, store: &mut S) -> Result<Vec<u8>> {
    let packed = store.load_encoded_bytes()?;
    let (table, pad_bits) = store.load_code_table()?;
    info!(
        "Decompressing {} bytes with a {} entry code table",
        packed.len(),
        table.len()
    );

    let symbols = decompress_parts(&packed, pad_bits, &table)?;
    let content = if opts.text {
        unfold_text(&symbols).into_bytes()
    } else {
        symbols
    };

    store.store_decoded(&content)?;
    info!("Wrote {} bytes of decompressed data.", content.len());
    Ok(content)
}

/// Compress and decompress the stored content in memory without storing anything.
/// Returns the sizes and whether the round trip gave back the input.
pub fn test_file<S: Store>(opts: &HuffOpts, store: &S) -> Result<(CompressionReport, bool)> {
    let content = content_symbols(opts, store.load_content()?);
    let encoded = compress(&content)?;
    let decoded = decompress(&encoded)?;

    let report = CompressionReport {
        before: content.len(),
        after: encoded.packed.len(),
    };
    report.log();
    let matched = decoded == content;
    if matched {
        info!("Round trip matched the input.");
    } else {
        let first = decoded
            .iter()
            .zip(&content)
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| decoded.len().min(content.len()));
        error!("Round trip differs from the input at symbol {}!", first);
    }
    Ok((report, matched))
}
