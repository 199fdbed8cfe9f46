use clap::Parser;
use indicatif::ProgressBar;
use std::fs::{self, File};
use std::path::PathBuf;

use glidetype::io_utils::{glide_cli_error, io_cli_error};
use glidetype::{parse_word_list, path_length, source_digest, Corpus, KeyLayout, LayoutParams};

/// Precompile a corpus word list into a binary cache of resampled ideal
/// trajectories.
#[derive(Parser)]
struct Args {
    /// Corpus word list, `word frequency` per line
    input: PathBuf,
    /// Output cache path (.gtc)
    output: PathBuf,
    /// Sample count for ideal paths
    #[clap(long, default_value_t = glidetype::DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
    /// Also dump the built entries as CSV
    #[clap(long)]
    csv: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .map_err(|e| io_cli_error("reading corpus file", &args.input, e))?;
    let digest = source_digest(&text);
    let pairs = parse_word_list(&text);

    let bar = ProgressBar::new(pairs.len() as u64);
    let layout = KeyLayout::new(LayoutParams::default());
    let (corpus, stats) = Corpus::build(
        pairs.into_iter().map(|pair| {
            bar.inc(1);
            pair
        }),
        &layout,
        args.sample_size,
    );
    bar.finish_and_clear();
    stats.report();
    eprintln!("Source fingerprint: {}", hex::encode(digest));

    corpus
        .save(&args.output, digest)
        .map_err(|e| glide_cli_error("writing corpus cache", e))?;
    eprintln!(
        "Wrote {} entries to {}",
        corpus.entries.len(),
        args.output.display()
    );

    if let Some(csv_path) = &args.csv {
        let file = File::create(csv_path).map_err(|e| io_cli_error("creating csv", csv_path, e))?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(["word", "frequency", "ideal_path_length"])?;
        for entry in &corpus.entries {
            wtr.write_record([
                entry.word.clone(),
                entry.frequency.to_string(),
                format!("{:.2}", path_length(&entry.ideal_path)),
            ])?;
        }
        wtr.flush()?;
    }

    Ok(())
}
