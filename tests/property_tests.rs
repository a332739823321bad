use prefixcode::{CodeBook, Decoder, Encoder, FrequencyTable};
use proptest::prelude::*;

fn prefix_free(book: &CodeBook) -> bool {
    let codes: Vec<&str> = book.iter().map(|(_, code)| code).collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j && b.starts_with(a) {
                return false;
            }
        }
    }
    true
}

// A text of 10,000 characters over 5 symbols, one of them at 80% frequency.
// Huffman must beat the frequency-blind code outright on such a skew.
#[test]
fn skewed_text_compresses_strictly_better_than_fixed() {
    let mut text = "e".repeat(8000);
    for _ in 0..500 {
        text.push_str("abcd");
    }
    assert_eq!(text.chars().count(), 10_000);

    let freqs = FrequencyTable::from_text(&text);
    assert_eq!(freqs.len(), 5);
    assert_eq!(freqs.count('e'), 8000);

    let huffman_bits = Encoder::huffman(&freqs).unwrap().encode(&text).unwrap();
    let fixed_bits = Encoder::fixed(&freqs).unwrap().encode(&text).unwrap();
    assert!(
        huffman_bits.len() < fixed_bits.len(),
        "huffman {} vs fixed {}",
        huffman_bits.len(),
        fixed_bits.len()
    );
}

// One distinct character: the fallback 1-bit code must still round-trip.
#[test]
fn degenerate_single_symbol_text_roundtrips() {
    let text = "aaaa";
    let freqs = FrequencyTable::from_text(text);
    let book = CodeBook::huffman(&freqs).unwrap();
    assert_eq!(book.code('a'), Some("0"));

    let bits = Encoder::new(book.clone()).encode(text).unwrap();
    assert_eq!(bits, "0000");
    assert_eq!(Decoder::new(&book).decode(&bits).unwrap(), text);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(250))]

    #[test]
    fn prop_huffman_roundtrip(text in "[a-j\\n]{1,300}") {
        let freqs = FrequencyTable::from_text(&text);
        let bits = Encoder::huffman(&freqs).unwrap().encode(&text).unwrap();
        let decoded = Decoder::huffman(&freqs).unwrap().decode(&bits).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn prop_fixed_roundtrip(text in "[a-j\\n]{1,300}") {
        let freqs = FrequencyTable::from_text(&text);
        let bits = Encoder::fixed(&freqs).unwrap().encode(&text).unwrap();
        let decoded = Decoder::fixed(&freqs).unwrap().decode(&bits).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn prop_codes_are_prefix_free(text in "[a-p]{2,200}") {
        let freqs = FrequencyTable::from_text(&text);
        prop_assert!(prefix_free(&CodeBook::huffman(&freqs).unwrap()));
        prop_assert!(prefix_free(&CodeBook::fixed(&freqs).unwrap()));
    }

    // Strictly more frequent symbols never get strictly longer codes; ties
    // may resolve either way and are skipped.
    #[test]
    fn prop_huffman_code_lengths_follow_frequency(text in "[a-f]{2,400}") {
        let freqs = FrequencyTable::from_text(&text);
        let book = CodeBook::huffman(&freqs).unwrap();
        for (a, count_a) in freqs.symbols() {
            for (b, count_b) in freqs.symbols() {
                if count_a > count_b {
                    let len_a = book.code(a).unwrap().len();
                    let len_b = book.code(b).unwrap().len();
                    prop_assert!(
                        len_a <= len_b,
                        "{:?} ({} uses, {} bits) vs {:?} ({} uses, {} bits)",
                        a, count_a, len_a, b, count_b, len_b
                    );
                }
            }
        }
    }

    #[test]
    fn prop_book_covers_exactly_the_alphabet(text in "[a-z\\n]{1,200}") {
        let freqs = FrequencyTable::from_text(&text);
        for book in [CodeBook::huffman(&freqs).unwrap(), CodeBook::fixed(&freqs).unwrap()] {
            prop_assert_eq!(book.len(), freqs.len());
            for (symbol, _) in freqs.symbols() {
                prop_assert!(book.code(symbol).is_some());
            }
        }
    }
}
