//! Code assignment.
//!
//! A [`CodeBook`] maps every leaf symbol of a prefix tree to its root-to-leaf
//! bit path, together with the inverse mapping used by the decoder. Codes are
//! prefix-free by construction: they are paths to distinct leaves of one
//! binary tree, so no code can be a prefix of another.
//!
//! Codes are kept as literal `'0'`/`'1'` strings rather than packed bits;
//! that keeps encoded output byte-compatible with plain-text bit files.

use std::collections::HashMap;

use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::tree::{self, Node};

/// A symbol→code table and its inverse.
///
/// Immutable once built; the tree it was read from can be discarded.
#[derive(Debug, Clone, Default)]
pub struct CodeBook {
    codes: HashMap<char, String>,
    inverse: HashMap<String, char>,
}

impl CodeBook {
    /// Build a Huffman tree from `freqs` and assign its codes.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`](crate::Error::EmptyAlphabet) if
    /// `freqs` has no symbols.
    pub fn huffman(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::from_tree(&tree::huffman(freqs)?))
    }

    /// Build a fixed-pairing tree from `freqs` and assign its codes.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`](crate::Error::EmptyAlphabet) if
    /// `freqs` has no symbols.
    pub fn fixed(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::from_tree(&tree::fixed(freqs)?))
    }

    /// Assign a code to every leaf of `root` by depth-first traversal.
    ///
    /// A tree whose root is itself a leaf (single-symbol alphabet) would
    /// yield an empty path, which cannot be told apart from "no more input"
    /// while decoding; that sole symbol gets the 1-bit code `"0"` instead.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = HashMap::new();
        Self::assign(root, String::new(), &mut codes);
        let inverse = codes.iter().map(|(&sym, code)| (code.clone(), sym)).collect();
        Self { codes, inverse }
    }

    fn assign(node: &Node, prefix: String, codes: &mut HashMap<char, String>) {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() { "0".to_owned() } else { prefix };
                codes.insert(*symbol, code);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                Self::assign(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                Self::assign(right, right_prefix, codes);
            }
        }
    }

    /// The code for `symbol`, if it is in the alphabet.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// The symbol for a complete `code`, if any.
    pub fn symbol(&self, code: &str) -> Option<char> {
        self.inverse.get(code).copied()
    }

    /// Number of symbols in the book.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest code, zero for an empty book.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Iterate `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&sym, code)| (sym, code.as_str()))
    }
}
