// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use gocfar::signal::{magnitude_from_pcm, rectify, time_axis_ms};
use gocfar::{detect_all, CfarDetector, Signal, SignalDetection};

#[derive(Parser, Debug)]
#[command(name = "gocfar")]
#[command(about = "Greatest-Of CFAR peak detection for wav signals")]
struct Args {
    /// Input wav file or directory
    #[arg(short, long)]
    input: PathBuf,

    /// Training cells on each side of the cell under test
    #[arg(short, long, default_value_t = 5000)]
    training_cells: usize,

    /// Guard cells on each side of the cell under test
    #[arg(short, long, default_value_t = 50)]
    guard_cells: usize,

    /// Target false-alarm rate(s), each in (0, 1); repeat for multiple runs
    #[arg(short, long = "false-alarm-rate", default_values_t = vec![0.2, 0.05])]
    false_alarm_rate: Vec<f64>,

    /// Emit peak summaries as JSON (thresholds stay library-only)
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SignalSummary {
    name: String,
    samples: usize,
    peak_count: usize,
    peaks: Vec<usize>,
    peak_times_ms: Vec<f64>,
}

#[derive(Serialize)]
struct RunSummary {
    training_cells: usize,
    guard_cells: usize,
    false_alarm_rate: f64,
    threshold_factor: f64,
    signals: Vec<SignalSummary>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let detectors: Vec<CfarDetector> = args
        .false_alarm_rate
        .iter()
        .map(|&rate| {
            CfarDetector::new(args.training_cells, args.guard_cells, rate)
                .with_context(|| format!("invalid configuration for false-alarm rate {rate}"))
        })
        .collect::<Result<_>>()?;

    let wav_files = collect_wav_files(&args.input)?;
    if wav_files.is_empty() {
        println!("{}", "No wav files found!".red());
        return Ok(());
    }
    info!("found {} wav file(s)", wav_files.len());

    let signals = wav_files
        .iter()
        .map(|path| load_signal(path))
        .collect::<Result<Vec<_>>>()?;

    let mut runs = Vec::with_capacity(detectors.len());
    for detector in &detectors {
        let results = detect_all(detector, &signals);
        let run = summarize(detector, &signals, results);
        if !args.json {
            print_run(&run);
        }
        runs.push(run);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    }

    Ok(())
}

fn collect_wav_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry?;
            let is_wav = entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("wav"))
                .unwrap_or(false);
            if entry.file_type().is_file() && is_wav {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
    } else {
        anyhow::bail!("input path does not exist: {}", path.display());
    }

    Ok(files)
}

/// Decode the first channel of a wav file into a rectified magnitude
/// signal scaled to [0, 1].
fn load_signal(path: &Path) -> Result<Signal> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let raw: Vec<i32> = reader
                .samples::<i32>()
                .collect::<Result<_, _>>()
                .with_context(|| format!("failed to decode {}", path.display()))?;
            let mono: Vec<i32> = raw.iter().step_by(channels).copied().collect();
            magnitude_from_pcm(&mono, spec.bits_per_sample)
        }
        hound::SampleFormat::Float => {
            let raw: Vec<f32> = reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .with_context(|| format!("failed to decode {}", path.display()))?;
            let mono: Vec<f64> = raw.iter().step_by(channels).map(|&s| s as f64).collect();
            rectify(&mono)
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(
        "{}: {} samples at {} Hz, {} channel(s)",
        name,
        samples.len(),
        spec.sample_rate,
        channels
    );

    Ok(Signal {
        name,
        sample_rate: spec.sample_rate,
        samples,
    })
}

fn print_run(run: &RunSummary) {
    println!(
        "CFAR: {} training / {} guard cells, Pfa {}, factor {:.4}",
        run.training_cells, run.guard_cells, run.false_alarm_rate, run.threshold_factor
    );
    for summary in &run.signals {
        let count = summary.peak_count;
        let label = format!("{count} peak(s)");
        let label = if count > 0 { label.green() } else { label.yellow() };
        match summary.peak_times_ms.first() {
            Some(first) => println!("  {:<30} {} (first at {:.1} ms)", summary.name, label, first),
            None => println!("  {:<30} {}", summary.name, label),
        }
    }
    println!();
}

fn summarize(
    detector: &CfarDetector,
    signals: &[Signal],
    results: Vec<SignalDetection>,
) -> RunSummary {
    let signals = signals
        .iter()
        .zip(results)
        .map(|(signal, r)| {
            let axis = time_axis_ms(signal.samples.len(), signal.sample_rate);
            SignalSummary {
                name: r.name,
                samples: r.detection.len(),
                peak_count: r.detection.peak_count(),
                peak_times_ms: r.detection.peaks.iter().map(|&i| axis[i]).collect(),
                peaks: r.detection.peaks,
            }
        })
        .collect();

    RunSummary {
        training_cells: detector.training_cells(),
        guard_cells: detector.guard_cells(),
        false_alarm_rate: detector.false_alarm_rate(),
        threshold_factor: detector.threshold_factor(),
        signals,
    }
}
