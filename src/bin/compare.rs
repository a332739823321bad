use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use prefixcode::{sample, Decoder, Encoder, FrequencyTable, Result, SizeReport};

const SAMPLE_LEN: usize = 5000;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = match args.get(1).map(String::as_str) {
        Some("--sample") => {
            let path = PathBuf::from("sample_text.txt");
            fs::write(&path, sample::sample_text(SAMPLE_LEN))?;
            println!("wrote {}", path.display());
            path
        }
        Some(arg) => PathBuf::from(arg),
        None => {
            println!("usage: compare <input-file>");
            println!("       compare --sample");
            return Ok(());
        }
    };

    let text = fs::read_to_string(&path)?;
    let freqs = FrequencyTable::from_text(&text);
    log::debug!("{}: {} chars, {} distinct", path.display(), text.chars().count(), freqs.len());

    let huffman_bits = run_pipeline(&text, &freqs, Variant::Huffman)?;
    let fixed_bits = run_pipeline(&text, &freqs, Variant::Fixed)?;

    println!("{}", SizeReport::new(&text, &huffman_bits, &fixed_bits));
    Ok(())
}

enum Variant {
    Huffman,
    Fixed,
}

impl Variant {
    fn name(&self) -> &'static str {
        match self {
            Variant::Huffman => "huffman",
            Variant::Fixed => "fixed",
        }
    }
}

/// Encode, persist the bit-string, decode it back, persist and check the
/// reconstruction. Returns the bit-string for the size report.
fn run_pipeline(text: &str, freqs: &FrequencyTable, variant: Variant) -> Result<String> {
    let (encoder, decoder) = match variant {
        Variant::Huffman => (Encoder::huffman(freqs)?, Decoder::huffman(freqs)?),
        Variant::Fixed => (Encoder::fixed(freqs)?, Decoder::fixed(freqs)?),
    };

    let bits = encoder.encode(text)?;
    write_out(&format!("{}_binary-encoding.txt", variant.name()), &bits)?;

    let decoded = decoder.decode(&bits)?;
    write_out(&format!("{}_encoding.txt", variant.name()), &decoded)?;

    if decoded == text {
        println!("{}: round trip ok ({} bits)", variant.name(), bits.len());
    } else {
        println!("{}: round trip MISMATCH", variant.name());
        for (line, (want, got)) in text.lines().zip(decoded.lines()).enumerate() {
            if want != got {
                println!("line {}:\n  {want}\n  {got}", line + 1);
            }
        }
    }
    Ok(bits)
}

fn write_out(name: &str, contents: &str) -> Result<()> {
    fs::write(Path::new(name), contents)?;
    Ok(())
}
