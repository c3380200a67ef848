use clap::ValueEnum;
use gofft::checked;
use gofft::shorttime::{goertzel_st_m, Padding};
use gofft::signal::linspace_sine;
use gofft::GoertzelError;
use hound::{SampleFormat, WavReader};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Samples read from disk, with the rate when the container records one.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f64>,
    pub sample_rate: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One `goertzel` call per target
    Single,
    /// All targets in one `goertzel_m` call
    Multi,
    /// Sum of the bins in `[ft, ft + rng)` for each target
    Range,
    /// Average over consecutive blocks of `width` samples
    Shorttime,
}

/// Parameters of one `analyze` run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub mode: Mode,
    pub fs: u32,
    pub targets: Vec<f64>,
    pub width: u32,
    pub rng: Option<f64>,
    pub padding: Padding,
}

pub fn read_signal(path: &Path, column: usize) -> Result<Signal, Box<dyn Error>> {
    if path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
    {
        return read_wav(path);
    }
    read_csv(path, column)
}

fn read_wav(path: &Path) -> Result<Signal, Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / scale))
                .collect::<Result<_, _>>()?
        }
    };
    let channels = usize::from(spec.channels.max(1));
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect()
    };
    Ok(Signal {
        samples,
        sample_rate: Some(spec.sample_rate),
    })
}

/// One value per line, optionally comma separated; `column` picks the field.
fn read_csv(path: &Path, column: usize) -> Result<Signal, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let field = line.split(',').nth(column).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: no column {column}", idx + 1),
            )
        })?;
        let value = field.trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {e}: {:?}", idx + 1, field.trim()),
            )
        })?;
        samples.push(value);
    }
    Ok(Signal {
        samples,
        sample_rate: None,
    })
}

pub fn write_csv(path: &Path, samples: &[f64]) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(File::create(path)?);
    for s in samples {
        writeln!(out, "{s}")?;
    }
    out.flush()?;
    Ok(())
}

/// Unit sine sampled on `linspace(0, duration, duration * fs)`.
pub fn generate(fs: u32, ft: f64, duration: f64) -> Vec<f64> {
    let count = (duration * f64::from(fs)) as usize;
    linspace_sine(ft, duration, count)
}

/// Magnitude per target, in the order of `req.targets`.
pub fn analyze(samples: &[f64], req: &Request) -> Result<Vec<f64>, GoertzelError> {
    match req.mode {
        Mode::Single => req
            .targets
            .iter()
            .map(|&f| checked::goertzel(samples, req.fs, f, req.width))
            .collect(),
        Mode::Multi => checked::goertzel_m_vec(samples, req.fs, &req.targets, req.width),
        Mode::Range => {
            let rng = req.rng.unwrap_or(f64::from(req.fs) / f64::from(req.width.max(1)));
            req.targets
                .iter()
                .map(|&f| checked::goertzel_rng(samples, req.fs, f, req.width, rng))
                .collect()
        }
        Mode::Shorttime => {
            let mut mag = vec![0.0; req.targets.len()];
            goertzel_st_m(
                samples,
                req.fs,
                &req.targets,
                req.width,
                req.padding,
                &mut mag,
            )?;
            Ok(mag)
        }
    }
}
