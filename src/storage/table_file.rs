//! Text record of a code table.
//!
//! One value per line: the decimal symbol, then its code, for every entry in table
//! order. A last line holds the pad bit count of the packed stream. Symbols are written
//! as numbers so that a newline symbol can not break the record.
//!
//! ```text
//! 97
//! 0
//! 98
//! 10
//! 5
//! ```

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{CodeEntry, CodeTable};

/// Render the table and pad count as a text record.
pub fn write_table(table: &CodeTable, pad_bits: u8) -> String {
    let mut out = String::with_capacity(table.len() * 12 + 4);
    for entry in table.entries() {
        out.push_str(&entry.symbol.to_string());
        out.push('\n');
        out.push_str(&entry.code);
        out.push('\n');
    }
    out.push_str(&pad_bits.to_string());
    out.push('\n');
    out
}

/// Parse a text record back into the table and pad count.
pub fn parse_table(record: &str) -> Result<(CodeTable, u8)> {
    let record = record.strip_suffix('\n').unwrap_or(record);
    let mut lines: Vec<&str> = record
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let pad_line = lines.pop().unwrap_or_default();
    let pad_bits: u8 = pad_line
        .trim()
        .parse()
        .ok()
        .filter(|p| *p < 8)
        .ok_or_else(|| HuffError::MalformedTable(format!("bad pad count {:?}", pad_line)))?;

    if lines.is_empty() || lines.len() % 2 != 0 {
        return Err(HuffError::MalformedTable(format!(
            "expected symbol and code pairs, found {} lines",
            lines.len()
        )));
    }

    let entries = lines
        .chunks(2)
        .map(|pair| {
            let symbol = pair[0].trim().parse::<u8>().map_err(|_| {
                HuffError::MalformedTable(format!("bad symbol value {:?}", pair[0]))
            })?;
            Ok(CodeEntry::new(symbol, pair[1]))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((CodeTable::from_entries(entries), pad_bits))
}
