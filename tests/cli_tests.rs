use std::fs;
use std::process::Command;

use glidetype::{KeyLayout, LayoutParams};

const CORPUS: &str = "hello 100\nworld 90\nhelp 80\nhold 70\n";

/// Event stream sweeping through the key centers of `word`.
fn events_for(word: &str) -> String {
    let layout = KeyLayout::new(LayoutParams::default());
    let centers = layout.word_path(word).unwrap();
    let mut out = String::new();
    for (i, c) in centers.iter().enumerate() {
        let code = if i == 0 {
            1
        } else if i == centers.len() - 1 {
            3
        } else {
            2
        };
        out.push_str(&format!("{} {} {}\n", code, c.x, c.y));
    }
    out
}

#[test]
fn recognize_ranks_the_swiped_word_first() {
    let exe = env!("CARGO_BIN_EXE_recognize");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let events = dir.path().join("events.txt");

    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&events, events_for("hello")).unwrap();

    let output = Command::new(exe)
        .args([
            corpus.to_str().unwrap(),
            events.to_str().unwrap(),
            "--json",
            "--top-k",
            "2",
        ])
        .output()
        .expect("recognize failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.lines().next().expect("no output line");
    let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
    let candidates = parsed["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["word"], "hello");
}

#[test]
fn corpus_cache_roundtrip_through_the_tools() {
    let tool = env!("CARGO_BIN_EXE_corpus_tool");
    let recognize = env!("CARGO_BIN_EXE_recognize");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let cache = dir.path().join("corpus.gtc");
    let csv_path = dir.path().join("corpus.csv");
    let events = dir.path().join("events.txt");

    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&events, events_for("world")).unwrap();

    let status = Command::new(tool)
        .args([
            corpus.to_str().unwrap(),
            cache.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .status()
        .expect("corpus_tool failed");
    assert!(status.success());

    let csv_text = fs::read_to_string(&csv_path).unwrap();
    // Header plus one row per corpus entry.
    assert_eq!(csv_text.lines().count(), 5);
    assert!(csv_text.starts_with("word,frequency,ideal_path_length"));

    let output = Command::new(recognize)
        .args([
            cache.to_str().unwrap(),
            events.to_str().unwrap(),
            "--top-k",
            "1",
        ])
        .output()
        .expect("recognize failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("world "),
        "expected 'world' first, got: {stdout}"
    );
}

#[test]
fn stale_cache_is_refused_with_a_nonzero_exit() {
    let tool = env!("CARGO_BIN_EXE_corpus_tool");
    let recognize = env!("CARGO_BIN_EXE_recognize");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    let cache = dir.path().join("corpus.gtc");
    let events = dir.path().join("events.txt");

    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&events, events_for("hello")).unwrap();

    let status = Command::new(tool)
        .args([
            corpus.to_str().unwrap(),
            cache.to_str().unwrap(),
            "--sample-size",
            "32",
        ])
        .status()
        .expect("corpus_tool failed");
    assert!(status.success());

    // The default config expects 50 samples; a 32-sample cache is refused.
    let output = Command::new(recognize)
        .args([cache.to_str().unwrap(), events.to_str().unwrap()])
        .output()
        .expect("recognize failed");
    assert!(!output.status.success());
}
