//! Raw throughput harness.
//!
//! Steps each generator `NUM_RUNS` times, reports bandwidth, and prints the
//! last output vector so the loop can't be optimized out.
//!
//! Set `LANERAND_DUMP_DIR` to also write `DUMP_STEPS` output vectors per
//! generator as flat native-endian binary (no header) for external test
//! suites such as dieharder or PractRand.

use lanerand::{LANES_U32, LANES_U64, Mwc1616, Xorshift128Plus};
use std::fs::File;
use std::hint::black_box;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

const NUM_RUNS: usize = 100_000_000;
const DUMP_STEPS: usize = 1 << 20;

fn report(name: &str, bytes_per_step: usize, value_bytes: usize, elapsed_ms: f64) {
    // GB/s
    let bandwidth = bytes_per_step as f64 * NUM_RUNS as f64 / elapsed_ms * 0.000001;
    let gnumbers = bandwidth / value_bytes as f64;

    println!("{name} ({} engine)", lanerand::engine_name());
    println!("Elapsed time: {:.3} ms", elapsed_ms);
    println!(
        "Bandwidth: {:.3} GB/s, {:.3} GNumbers/s, {:.4} ns per number\n",
        bandwidth,
        gnumbers,
        1.0 / gnumbers
    );
}

fn measure_mwc1616() -> Mwc1616 {
    let mut rng: Mwc1616 = Mwc1616::new().expect("os entropy unavailable");

    let start = Instant::now();

    for _ in 0..NUM_RUNS {
        rng.step();
        black_box(rng.result());
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    for v in rng.result() {
        print!("{v:08X} ");
    }
    println!();

    report("mwc1616", LANES_U32 * 4, 4, elapsed_ms);
    rng
}

fn measure_xorshift128p() -> Xorshift128Plus {
    let mut rng: Xorshift128Plus = Xorshift128Plus::new().expect("os entropy unavailable");

    let start = Instant::now();

    for _ in 0..NUM_RUNS {
        rng.step();
        black_box(rng.result());
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    for v in rng.result() {
        print!("{v:016X} ");
    }
    println!();

    report("xorshift128+", LANES_U64 * 8, 8, elapsed_ms);
    rng
}

fn dump(dir: &Path, mut mwc: Mwc1616, mut xsa: Xorshift128Plus) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut out = BufWriter::new(File::create(dir.join("mwc1616.bin"))?);
    for _ in 0..DUMP_STEPS {
        for v in mwc.next_block() {
            out.write_all(&v.to_ne_bytes())?;
        }
    }
    out.flush()?;

    let mut out = BufWriter::new(File::create(dir.join("xorshift128p.bin"))?);
    for _ in 0..DUMP_STEPS {
        for v in xsa.next_block() {
            out.write_all(&v.to_ne_bytes())?;
        }
    }
    out.flush()?;

    println!("Dumped {} steps per generator to {}", DUMP_STEPS, dir.display());
    Ok(())
}

fn main() -> std::io::Result<()> {
    // `cargo bench` passes `--bench`, nothing to parse here
    let mwc = measure_mwc1616();
    let xsa = measure_xorshift128p();

    if let Some(dir) = std::env::var_os("LANERAND_DUMP_DIR") {
        dump(Path::new(&dir), mwc, xsa)?;
    }

    Ok(())
}
