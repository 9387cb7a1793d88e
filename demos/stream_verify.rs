//! Basic usage walkthrough for slicecrc
//!
//! Run with: cargo run --example stream_verify

use slicecrc::*;

fn main() -> Result<(), Error> {
    println!("SliceCRC Stream Verification Example");
    println!("====================================");

    // Example 1: One-shot checksum
    println!("\n1. One-shot Checksum:");
    {
        let crc = checksum(&CrcTables::ETHERNET, b"123456789");
        println!("  crc32(\"123456789\") = 0x{:08X}", crc);
    }

    // Example 2: Streaming a frame beat by beat
    println!("\n2. Beat-by-beat Verification (4 bytes per step):");
    {
        let payload: [u8; 10] = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let fcs = checksum(&CrcTables::ETHERNET, &payload);

        let mut verifier = FrameVerifier::new(&CrcTables::ETHERNET, 4)?;
        let beat_count = payload.len().div_ceil(4);

        for (i, (chunk, keep)) in beats_of(&payload, 4).enumerate() {
            let beat = if i + 1 == beat_count {
                Beat::trailer(chunk, Some(fcs))
            } else {
                Beat::payload(chunk)
            };
            let out = verifier.step(beat);
            println!(
                "  beat {}: {} bytes forwarded, keep=0b{:04b}, last={}, pass={}",
                i,
                out.data.len(),
                keep,
                out.last,
                out.pass
            );
        }
        println!("  last_result = {}", verifier.last_result());
    }

    // Example 3: Corrupted frame and missing check value
    println!("\n3. Failure Modes:");
    {
        let payload = *b"integrity matters";
        let fcs = checksum(&CrcTables::ETHERNET, &payload);

        let mut verifier = FrameVerifier::new(&CrcTables::ETHERNET, 8)?;

        let mut corrupted = payload;
        corrupted[3] ^= 0x40;
        println!(
            "  corrupted payload:   pass = {}",
            verifier.verify_frame(&corrupted, Some(fcs))
        );
        println!(
            "  missing check value: pass = {}",
            verifier.verify_frame(&payload, None)
        );
        println!(
            "  pristine payload:    pass = {}",
            verifier.verify_frame(&payload, Some(fcs))
        );
    }

    // Example 4: Custom engine configuration
    println!("\n4. Registered (one-step-lag) Output:");
    {
        let config = CrcConfig {
            slice_length: 8,
            register_output: true,
            ..CrcConfig::default()
        };
        let mut engine = SlicingCrc::new(&CrcTables::ETHERNET, config)?;

        let same_step = engine.step(b"12345678", 0xFF, false);
        let drained = engine.step(b"9", 0x01, false);
        let settled = engine.step(&[], 0, false);
        println!("  after beat 1: 0x{:08X} (still the initial value)", same_step);
        println!("  after beat 2: 0x{:08X} (beat 1's result)", drained);
        println!("  after drain:  0x{:08X} (the full \"123456789\" CRC)", settled);
    }

    // Example 5: Throughput check
    println!("\n5. Throughput Check:");
    {
        const N: usize = 1_000;
        let frame: Vec<u8> = (0..1500).map(|i| (i * 17 + 3) as u8).collect();
        let fcs = checksum(&CrcTables::ETHERNET, &frame);
        let mut verifier = FrameVerifier::new(&CrcTables::ETHERNET, 16)?;

        let start = std::time::Instant::now();
        let mut passes = 0usize;
        for _ in 0..N {
            if verifier.verify_frame(std::hint::black_box(&frame), Some(fcs)) {
                passes += 1;
            }
        }
        let elapsed = start.elapsed();
        let mb_per_sec =
            (N * frame.len()) as f64 / 1_000_000.0 / elapsed.as_secs_f64();

        println!("  {} frames of {} bytes, {} passed", N, frame.len(), passes);
        println!("  {:.0} MB/s through the verifier", mb_per_sec);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
