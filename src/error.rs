//! Error types for prefix-code construction and the codec.

use thiserror::Error;

/// Error variants for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table has no symbols, so there is no tree to build.
    #[error("empty alphabet: frequency table has no symbols")]
    EmptyAlphabet,

    /// The text contains a symbol with no entry in the code table.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// The bit sequence stopped matching the code table at the given byte
    /// offset (corrupted input, trailing partial codeword, or a non-bit
    /// character).
    #[error("undecodable bit sequence at offset {0}")]
    UndecodableSequence(usize),

    /// An I/O error occurred while reading a text source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
