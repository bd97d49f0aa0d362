//! Quick statistical summary of lanerand output.
//!
//! ```sh
//! cargo run -p randomness --release
//! cargo run -p randomness --release -- --dump target/xsa.bin 1000000 xorshift128p
//! ```
//!
//! The dump is a flat concatenation of output vectors in generation order,
//! native-endian, no header.

use lanerand::{Mwc1616, Xorshift128Plus};
use statrs::statistics::{Data, Distribution};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

const N: usize = 1_000_000;

struct Stats {
    mean: f64,
    var: f64,
    entropy: f64,
}

fn summarize(samples: Vec<f64>) -> Stats {
    let total = samples.len() as f64;
    let mut hist = [0usize; 256];

    for &v in &samples {
        let idx = ((v * 255.0) as usize).min(255);
        hist[idx] += 1;
    }

    let entropy: f64 = hist
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    let data = Data::new(samples);

    Stats {
        mean: data.mean().unwrap_or(f64::NAN),
        var: data.variance().unwrap_or(f64::NAN),
        entropy,
    }
}

fn print_stats(name: &str, s: &Stats) {
    println!("{name}:");
    println!("  mean     : {:.6}", s.mean);
    println!("  variance : {:.6}", s.var);
    println!("  entropy  : {:.3} bits", s.entropy);
    println!();
}

fn stats() -> lanerand::Result<()> {
    let mut mwc: Mwc1616 = Mwc1616::new()?;
    let mut buf32 = vec![0u32; N];
    mwc.fill(&mut buf32);

    let mwc_stats = summarize(buf32.iter().map(|&v| v as f64 / u32::MAX as f64).collect());

    let mut xsa: Xorshift128Plus = Xorshift128Plus::new()?;
    let mut buf64 = vec![0u64; N];
    xsa.fill(&mut buf64);

    let xsa_stats = summarize(buf64.iter().map(|&v| v as f64 / u64::MAX as f64).collect());

    println!("Stats over {N} values ({} engine):\n", lanerand::engine_name());
    print_stats("mwc1616", &mwc_stats);
    print_stats("xorshift128+", &xsa_stats);
    println!("(expected ~mean=0.5, var=0.0833, entropy≈8 bits)");

    Ok(())
}

fn dump(path: &str, count: usize, which: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(File::create(path)?);

    match which {
        "mwc1616" => {
            let mut rng: Mwc1616 = Mwc1616::new()?;

            for _ in 0..count {
                for v in rng.next_block() {
                    out.write_all(&v.to_ne_bytes())?;
                }
            }
        }
        "xorshift128p" => {
            let mut rng: Xorshift128Plus = Xorshift128Plus::new()?;

            for _ in 0..count {
                for v in rng.next_block() {
                    out.write_all(&v.to_ne_bytes())?;
                }
            }
        }
        other => return Err(format!("unknown generator `{other}`").into()),
    }

    out.flush()?;
    println!("Wrote {count} {which} output vectors to {path}");

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let res: Result<(), Box<dyn std::error::Error>> = match args.as_slice() {
        [] => stats().map_err(Into::into),
        [flag, path, count, rest @ ..] if flag == "--dump" && rest.len() <= 1 => match count.parse::<usize>() {
            Ok(count) => dump(path, count, rest.first().map_or("xorshift128p", String::as_str)),
            Err(e) => Err(format!("invalid step count `{count}`: {e}").into()),
        },
        _ => Err("usage: randomness [--dump <path> <steps> [mwc1616|xorshift128p]]".into()),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
