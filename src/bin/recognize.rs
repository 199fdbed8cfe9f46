use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glidetype::io_utils::{glide_cli_error, io_cli_error, simple_cli_error, CliError};
use glidetype::{
    parse_word_list, Corpus, KeyLayout, LayoutParams, PointerEvent, RecognizeStats, Recognizer,
    RecognizerConfig, StrokeBuilder,
};

/// Replay a pointer-event stream against a word corpus and print ranked
/// candidates for every completed stroke.
#[derive(Parser)]
struct Args {
    /// Corpus word list (`word frequency` per line) or a precompiled .gtc cache
    corpus: PathBuf,
    /// Event stream file (`type x y` per line; 1 start, 2 move, 3 end, 4 explore)
    events: PathBuf,
    /// Optional JSON config file
    #[clap(long)]
    config: Option<PathBuf>,
    /// Candidates to print per stroke (overrides config)
    #[clap(long)]
    top_k: Option<usize>,
    /// Corpus window: most-frequent entries searched per stroke (overrides config)
    #[clap(long)]
    window: Option<usize>,
    /// Treat event coordinates as normalized [0,1] and scale to the canvas
    #[clap(long)]
    normalized: bool,
    /// Canvas size for normalized coordinates, as WIDTHxHEIGHT
    #[clap(long, default_value = "450x450")]
    canvas: String,
    /// Emit one JSON object per stroke instead of text
    #[clap(long)]
    json: bool,
    /// Report stroke and candidate counters on exit
    #[clap(long)]
    status: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(p) => {
            RecognizerConfig::from_file(p).map_err(|e| glide_cli_error("loading config", e))?
        }
        None => RecognizerConfig::default(),
    };
    if let Some(k) = args.top_k {
        config.top_k = k;
    }
    if let Some(w) = args.window {
        config.corpus_window = w;
    }

    let (canvas_w, canvas_h) = parse_canvas(&args.canvas)?;
    let layout = KeyLayout::new(LayoutParams::default());
    let corpus = load_corpus(&args.corpus, &layout, config.sample_size)?;
    let recognizer =
        Recognizer::new(config, Arc::new(corpus)).map_err(|e| glide_cli_error("setting up", e))?;

    let events_text = fs::read_to_string(&args.events)
        .map_err(|e| io_cli_error("reading events file", &args.events, e))?;

    let mut builder = StrokeBuilder::new();
    let mut stats = RecognizeStats::new();
    for line in events_text.lines() {
        let mut event = match PointerEvent::parse_line(line) {
            Some(ev) => ev,
            None => continue,
        };
        if args.normalized {
            event = event.denormalized(canvas_w, canvas_h);
        }
        let stroke = match builder.push(event) {
            Some(s) => s,
            None => continue,
        };
        let candidates = recognizer
            .recognize(&stroke)
            .map_err(|e| glide_cli_error("ranking stroke", e))?;
        stats.tick_stroke(candidates.len());
        if args.json {
            let list: Vec<_> = candidates
                .iter()
                .map(|c| serde_json::json!({ "word": c.word, "score": c.score }))
                .collect();
            println!("{}", serde_json::json!({ "candidates": list }));
        } else {
            let list: Vec<String> = candidates
                .iter()
                .map(|c| format!("{} ({:.3})", c.word, c.score))
                .collect();
            println!("{}", list.join("  "));
        }
    }

    if args.status {
        stats.report();
    }
    Ok(())
}

fn load_corpus(path: &Path, layout: &KeyLayout, sample_size: usize) -> Result<Corpus, CliError> {
    let is_cache = path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| ext.to_ascii_lowercase() == "gtc");
    if is_cache {
        let (corpus, _digest) =
            Corpus::load(path).map_err(|e| glide_cli_error("loading corpus cache", e))?;
        if corpus.sample_size != sample_size {
            return Err(simple_cli_error(&format!(
                "Corpus cache resampled at {} points but config expects {}. \
                 Rebuild it with corpus_tool.",
                corpus.sample_size, sample_size
            )));
        }
        return Ok(corpus);
    }
    let text =
        fs::read_to_string(path).map_err(|e| io_cli_error("reading corpus file", path, e))?;
    let (corpus, stats) = Corpus::build(parse_word_list(&text), layout, sample_size);
    stats.report();
    Ok(corpus)
}

fn parse_canvas(size: &str) -> Result<(f64, f64), CliError> {
    let mut parts = size.splitn(2, 'x');
    let parse = |s: Option<&str>| s.and_then(|v| v.parse::<f64>().ok());
    match (parse(parts.next()), parse(parts.next())) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Ok((w, h)),
        _ => Err(simple_cli_error(&format!(
            "Invalid canvas size '{size}'. Expected WIDTHxHEIGHT, e.g. 450x450."
        ))),
    }
}
