//! Text ↔ bit-string codec.
//!
//! [`Encoder`] replaces each character of the source text with its code and
//! concatenates the results. [`Decoder`] compiles the inverse table into a
//! small binary trie once, then walks it bit by bit, emitting a symbol and
//! returning to the root whenever it reaches a leaf. The prefix-free
//! invariant of the book guarantees the walk never needs to backtrack, so
//! decoding is a single O(total bits) pass.

use crate::code::CodeBook;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Encodes text into a bit-string under a fixed code book.
#[derive(Debug, Clone)]
pub struct Encoder {
    book: CodeBook,
}

impl Encoder {
    /// Create an encoder over an existing code book.
    pub fn new(book: CodeBook) -> Self {
        Self { book }
    }

    /// Build a Huffman code book from `freqs` and wrap it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if `freqs` has no symbols.
    pub fn huffman(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::new(CodeBook::huffman(freqs)?))
    }

    /// Build a fixed-pairing code book from `freqs` and wrap it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if `freqs` has no symbols.
    pub fn fixed(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::new(CodeBook::fixed(freqs)?))
    }

    /// The code book this encoder writes under.
    pub fn book(&self) -> &CodeBook {
        &self.book
    }

    /// Encode `text` as the concatenation of each character's code.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] on the first character with no entry
    /// in the book. That cannot happen when the book was derived from the
    /// same text's frequency table.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::new();
        for symbol in text.chars() {
            match self.book.code(symbol) {
                Some(code) => bits.push_str(code),
                None => return Err(Error::UnknownSymbol(symbol)),
            }
        }
        Ok(bits)
    }

    /// Encode a sequence of lines in order. Equivalent to encoding their
    /// concatenation; lines are expected to keep their trailing newline.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] on the first character with no entry
    /// in the book.
    pub fn encode_lines<I, S>(&self, lines: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bits = String::new();
        for line in lines {
            bits.push_str(&self.encode(line.as_ref())?);
        }
        Ok(bits)
    }
}

/// One trie slot: child indices per bit and the symbol, if this slot
/// completes a code.
#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    children: [Option<u32>; 2],
    symbol: Option<char>,
}

/// Decodes a bit-string back into text under a fixed code book.
#[derive(Debug, Clone)]
pub struct Decoder {
    trie: Vec<TrieNode>,
}

impl Decoder {
    /// Compile the inverse table of `book` into a trie.
    pub fn new(book: &CodeBook) -> Self {
        let mut trie = vec![TrieNode::default()];
        for (symbol, code) in book.iter() {
            let mut at = 0usize;
            for bit in code.bytes() {
                let side = usize::from(bit == b'1');
                at = match trie[at].children[side] {
                    Some(next) => next as usize,
                    None => {
                        let next = trie.len();
                        trie.push(TrieNode::default());
                        trie[at].children[side] = Some(next as u32);
                        next
                    }
                };
            }
            trie[at].symbol = Some(symbol);
        }
        log::debug!("decoder trie: {} slots for {} codes", trie.len(), book.len());
        Self { trie }
    }

    /// Build a Huffman code book from `freqs` and compile it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if `freqs` has no symbols.
    pub fn huffman(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::new(&CodeBook::huffman(freqs)?))
    }

    /// Build a fixed-pairing code book from `freqs` and compile it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if `freqs` has no symbols.
    pub fn fixed(freqs: &FrequencyTable) -> Result<Self> {
        Ok(Self::new(&CodeBook::fixed(freqs)?))
    }

    /// Decode a `'0'`/`'1'` string into text.
    ///
    /// Every complete codeword emits exactly one symbol; an empty input
    /// yields empty text.
    ///
    /// # Errors
    /// Returns [`Error::UndecodableSequence`] when the walk falls off the
    /// trie (the book is not the one the bits were encoded under, or the
    /// bits are corrupted), when a byte is not `'0'` or `'1'`, and when the
    /// input ends in the middle of a codeword. The reported offset is where
    /// the failing codeword started, except for a non-bit byte, which
    /// reports its own position.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut text = String::new();
        let mut at = 0usize;
        let mut start = 0usize;
        for (offset, bit) in bits.bytes().enumerate() {
            let side = match bit {
                b'0' => 0,
                b'1' => 1,
                _ => return Err(Error::UndecodableSequence(offset)),
            };
            at = match self.trie[at].children[side] {
                Some(next) => next as usize,
                None => return Err(Error::UndecodableSequence(start)),
            };
            if let Some(symbol) = self.trie[at].symbol {
                text.push(symbol);
                at = 0;
                start = offset + 1;
            }
        }
        if at != 0 {
            return Err(Error::UndecodableSequence(start));
        }
        Ok(text)
    }
}
