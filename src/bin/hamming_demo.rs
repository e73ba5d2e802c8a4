use clap::Parser;
use hamcode::cs::ecc::hamming::{
    decode_to_string, encode_str, to_char, ErrorInjector, HammingCode,
};

const SAMPLE: &str = "Oh praise Jehovah, all ye nations;
Laud him, all ye peoples.
For his lovingkindness is great toward us;
And the truth of Jehovah endureth for ever.
Praise ye Jehovah.";

/// Demonstrates single-character Hamming coding with random bit errors
#[derive(Parser, Debug)]
#[command(name = "hamming_demo", version, about)]
struct Args {
    /// Data bits per character
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Seed for the error injector; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Character used for the error-correction check
    #[arg(long, default_value_t = 'a')]
    probe: char,

    /// Text to encode and decode
    #[arg(long)]
    message: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let code = HammingCode::new(args.width)?;
    let mut injector = match args.seed {
        Some(seed) => ErrorInjector::seeded(seed),
        None => ErrorInjector::from_entropy(),
    };

    println!(
        "Hamming code: {} data bits, {} parity bits, {}-bit codewords",
        code.layout().data_bits(),
        code.layout().parity_bits(),
        code.layout().total_bits()
    );

    let encoded = code.encode_char(args.probe)?;
    println!("{:?} encodes to {}", args.probe, encoded);

    // A single flipped bit is always corrected; two may or may not survive.
    for errors in 1..=2 {
        let noisy = injector.inject(&encoded, errors)?;
        let report = code.decode_report(&noisy)?;
        let decoded = to_char(report.value).unwrap_or(char::REPLACEMENT_CHARACTER);
        let verdict = if decoded == args.probe {
            "recovered"
        } else {
            "not recovered"
        };
        println!(
            "{} bit error(s): received {}, syndrome {}, decoded {:?} ({})",
            errors, noisy, report.syndrome, decoded, verdict
        );
    }

    let message = args.message.as_deref().unwrap_or(SAMPLE);
    let words = encode_str(&code, message)?;
    let rendered: Vec<String> = words.iter().map(|word| word.to_string()).collect();
    println!("{:?}", rendered);
    println!("{}", decode_to_string(&code, &words)?);

    Ok(())
}
