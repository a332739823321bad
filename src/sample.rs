//! Random sample text.
//!
//! Generates throwaway lowercase text for benchmarks, tests, and the
//! comparison driver: uniform `a..=z` with a newline replacing every 50th
//! character, so the alphabet and line shape resemble the kind of text file
//! the codec is meant for.

use rand::Rng;

/// A newline replaces every character at a multiple of this position.
pub const LINE_WIDTH: usize = 50;

/// Generate `len` characters of sample text with the thread-local RNG.
pub fn sample_text(len: usize) -> String {
    sample_text_with(&mut rand::thread_rng(), len)
}

/// Generate `len` characters of sample text from `rng`. Pass a seeded
/// [`rand::rngs::StdRng`] for reproducible output.
pub fn sample_text_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut text = String::with_capacity(len);
    for i in 0..len {
        if i != 0 && i % LINE_WIDTH == 0 {
            text.push('\n');
            continue;
        }
        text.push(char::from(rng.gen_range(b'a'..=b'z')));
    }
    text
}
