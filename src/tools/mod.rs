//! The tools module provides helper functions for hufftext.
//!
//! The tools are:
//! - cli: Command line interface and the options it fills in.
//! - freq_count: Frequency count of the input symbols, and text to symbol folding.
//! - likeness: Similarity score between a decompressed file and its original.
//!
pub mod cli;
pub mod freq_count;
pub mod likeness;
