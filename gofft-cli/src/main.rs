use clap::{Args, Parser, Subcommand};
use gofft::shorttime::Padding;
use gofft_cli::{analyze, generate, read_signal, write_csv, Mode, Request};
use std::error::Error;
use std::path::PathBuf;

/// Generate test signals and evaluate Goertzel magnitudes from the command line.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a unit sine to a CSV file, one sample per line
    Gensig {
        /// Output CSV path
        output: PathBuf,

        /// Tone frequency in Hz
        #[arg(long, default_value_t = 60.0)]
        ft: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 1000)]
        fs: u32,

        /// Signal length in seconds
        #[arg(short = 'T', long, default_value_t = 100.0)]
        duration: f64,
    },
    /// Evaluate target frequencies in a CSV or WAV signal
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// CSV (one value per line) or WAV input
    input: PathBuf,

    /// Target frequencies in Hz, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    ft: Vec<f64>,

    /// Sample rate in Hz; required for CSV, overrides the WAV header
    #[arg(long)]
    fs: Option<u32>,

    /// Filter size or short-time block width; defaults to the sample rate
    #[arg(long)]
    width: Option<u32>,

    #[arg(long, value_enum, default_value_t = Mode::Multi)]
    mode: Mode,

    /// Band width in Hz for `--mode range`; defaults to one bin
    #[arg(long)]
    rng: Option<f64>,

    /// Zero-pad the trailing partial block in `--mode shorttime`
    #[arg(long)]
    pad: bool,

    /// CSV column holding the samples
    #[arg(long, default_value_t = 0)]
    column: usize,
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let signal = read_signal(&args.input, args.column)?;
    let fs = args
        .fs
        .or(signal.sample_rate)
        .ok_or("sample rate unknown, pass --fs")?;
    log::info!(
        "loaded {} samples at {} Hz from {}",
        signal.samples.len(),
        fs,
        args.input.display()
    );
    let req = Request {
        mode: args.mode,
        fs,
        width: args.width.unwrap_or(fs),
        targets: args.ft,
        rng: args.rng,
        padding: if args.pad { Padding::Zero } else { Padding::Drop },
    };
    let mags = analyze(&signal.samples, &req)?;
    for (f, m) in req.targets.iter().zip(&mags) {
        println!("{f}\t{m:.6}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    match Cli::parse().command {
        Command::Gensig {
            output,
            ft,
            fs,
            duration,
        } => {
            let samples = generate(fs, ft, duration);
            write_csv(&output, &samples)?;
            log::info!("wrote {} samples to {}", samples.len(), output.display());
        }
        Command::Analyze(args) => run_analyze(args)?,
    }
    Ok(())
}
