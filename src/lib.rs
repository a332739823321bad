//! # Prefix codes
//!
//! *Build a code from the text, then read the bits back with nothing but the
//! table.*
//!
//! ## Intuition First
//!
//! Give every character of a text its own string of bits. If no character's
//! bit-string is a prefix of another's, you can glue all the codes together
//! into one long bit sequence and still cut it back apart unambiguously: read
//! bits until what you have read so far *is* a code, emit that character, and
//! start over. No markers, no lengths, no tree in the output — the table
//! alone is enough.
//!
//! That no-prefix guarantee comes free from a binary tree. Put every
//! character at a leaf and label each step left/right with 0/1; two distinct
//! leaves can never lie on the same root path, so no code can be a prefix of
//! another.
//!
//! ## The Problem
//!
//! A fixed-length code spends the same number of bits on `e` as on `z`.
//! Huffman's insight was to build the tree bottom-up by always merging the
//! two rarest subtrees, which pushes rare characters deep (long codes) and
//! leaves frequent characters shallow (short codes) — the optimal
//! prefix-code lengths for the measured frequencies.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon   Entropy as the fundamental limit
//! 1949  Fano      Top-down code construction, suboptimal
//! 1952  Huffman   Bottom-up greedy merge: optimal prefix codes
//! 1985  —         Adaptive variants (FGK, Vitter) for streaming
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Tree build**: O(n log n) heap operations for n distinct symbols.
//! - **Encode**: O(1) table lookup per character.
//! - **Decode**: O(1) trie step per bit; one pass over the input.
//!
//! ## Failure Modes
//!
//! 1. **Single-symbol alphabets**: the sole leaf is also the root, whose
//!    path is empty. This crate assigns the 1-bit code `"0"` instead.
//! 2. **Foreign bits**: decoding bits produced under a different table walks
//!    off the trie and is reported as an error, never truncated output.
//!
//! ## Implementation Notes
//!
//! This crate provides two pipelines over the same component contracts:
//! - **Huffman**: frequency-weighted merge order, variable-length codes.
//! - **Fixed**: frequency-blind FIFO merge order, near-equal-length codes —
//!   the baseline the Huffman output is compared against.
//!
//! Bit-strings are literal `'0'`/`'1'` text throughout, so encoded output
//! can be written to and read from plain-text files byte for byte.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Shannon, C. (1948). "A Mathematical Theory of Communication."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod report;
pub mod sample;
pub mod tree;

pub use code::CodeBook;
pub use codec::{Decoder, Encoder};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use report::SizeReport;
pub use tree::Node;
