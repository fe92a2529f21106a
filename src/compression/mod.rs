//! The compression module drives hufftext end to end.
//!
//! Compression happens in the following steps:
//! - Frequency count: How often each byte value appears in the input.
//! - Tree build: Join the two lightest nodes until one root is left.
//! - Code table: Walk the tree, '0' for left and '1' for right, to get each symbol's code.
//! - Packing: Write each input symbol's code, then pad the last byte with zeros and note how many.
//!
//! Decompression is the inverse:
//! - Unpacking: Expand the bytes to bits and drop the pad bits.
//! - Decoding: Group the codes by length and match the longest code that fits at each position.
//!
//! Both sides work entirely in memory. The `_file` variants load from and save to a `Store`.
//!

pub mod compress;
pub mod decompress;
