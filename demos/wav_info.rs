//! Print the header of a WAVE file and its peak sample level
//!
//! Usage: `cargo run --example wav_info -- path/to/file.wav`

use wavstream::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wavstream=debug".into()),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: wav_info <file.wav>");
        std::process::exit(2);
    };

    let mut stream = WaveStream::open(&path)?;
    println!("File:        {path}");
    println!(
        "Format:      {:?} ({} bits)",
        stream.sample_format(),
        stream.bits_per_sample()
    );
    println!("Frame rate:  {} Hz", stream.frame_rate());
    println!("Channels:    {}", stream.channel_count());
    println!("Frames:      {}", stream.frame_count());
    println!("Duration:    {:.3} s", stream.duration().as_secs_f64());

    let mut peak = 0.0f32;
    while let Some(sample) = stream.next_sample()? {
        peak = peak.max(sample.abs());
    }
    println!("Peak level:  {peak:.4}");

    Ok(())
}
