//! The bitstream module is the bit level I/O layer of hufftext.
//!
//! BitPacker turns the sequence of variable length codes into bytes and remembers how
//! many zero bits it had to add to fill the final byte. BitReader does the reverse,
//! expanding bytes back into bits and dropping that padding again.
//!
//! Both work on in-memory buffers. Reading and writing files is left to the storage module.
//!
pub mod bitpacker;
pub mod bitreader;
