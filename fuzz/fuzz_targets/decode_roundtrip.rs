#![no_main]
use libfuzzer_sys::fuzz_target;
use prefixcode::{CodeBook, Decoder, Encoder, FrequencyTable};

fuzz_target!(|data: (String, Vec<u8>)| {
    let (text, noise) = data;
    if text.is_empty() {
        return;
    }

    let freqs = FrequencyTable::from_text(&text);
    let book = CodeBook::huffman(&freqs).unwrap();
    let bits = Encoder::new(book.clone()).encode(&text).unwrap();

    let decoder = Decoder::new(&book);
    assert_eq!(decoder.decode(&bits).unwrap(), text);

    // Arbitrary bits against the same book must decode or error, never panic.
    let garbage: String = noise
        .iter()
        .map(|&b| if b & 1 == 0 { '0' } else { '1' })
        .collect();
    let _ = decoder.decode(&garbage);
});
