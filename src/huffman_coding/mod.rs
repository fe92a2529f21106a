//! The huffman module builds the prefix codes used by hufftext.
//!
//! A single code table is built for the whole input. The tree is built by repeatedly
//! joining the two lightest nodes, found by a plain linear scan. With at most 256 leaves
//! that is cheap, and taking the first of several equal weights keeps the tree (and so
//! every code) the same from run to run.
//!
//! Codes are read off the tree left to right, '0' for a left branch and '1' for a right
//! branch. For decoding the codes are grouped by length.
//!

pub mod code_table;
pub mod tree;
