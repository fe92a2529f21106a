use rayon::prelude::*;

/// Size of the symbol domain. Every symbol is one byte.
pub const SYMBOL_COUNT: usize = 256;

/// Symbol that text characters outside the byte domain collapse to ('?').
pub const FALLBACK_SYMBOL: u8 = b'?';

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
/// Counts are u32, so inputs over 4 GiB are not supported.
pub fn freqs(data: &[u8]) -> [u32; SYMBOL_COUNT] {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u32; SYMBOL_COUNT],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u32; SYMBOL_COUNT],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u32; SYMBOL_COUNT];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Turns text into symbols. Any char above 255 is counted (and encoded) as
/// FALLBACK_SYMBOL, so the fold is lossy for such text.
pub fn fold_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(FALLBACK_SYMBOL))
        .collect()
}

/// Turns decoded symbols back into text, one char per symbol.
pub fn unfold_text(symbols: &[u8]) -> String {
    symbols.iter().map(|&s| char::from(s)).collect()
}
