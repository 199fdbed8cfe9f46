//! Dictionary words and their precomputed ideal trajectories.
//!
//! A corpus is built once from a `word frequency` text resource, sorted by
//! descending frequency, and never mutated afterwards; reloads publish a
//! whole new corpus. Builds can be persisted to a binary cache that
//! remembers a fingerprint of the source text, so a stale cache is
//! rejected instead of silently reused.

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;

use crate::error::GlideError;
use crate::geometry::Point;
use crate::layout::KeyLayout;
use crate::resample::resample;
use crate::stats::BuildStats;

/// One dictionary word with its precomputed ideal trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub word: String,
    pub frequency: u64,
    /// Resampled key-to-key path, derived once at build time.
    pub ideal_path: Vec<Point>,
}

/// The full dictionary, sorted by descending frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Sample count every ideal path was resampled to.
    pub sample_size: usize,
    pub entries: Vec<CorpusEntry>,
}

/// On-disk cache layout.
#[derive(Serialize, Deserialize)]
struct CacheFile {
    /// SHA-256 of the source word list the corpus was built from.
    source_digest: [u8; 32],
    corpus: Corpus,
}

/// Fingerprint of a corpus source text, stored in the cache header.
pub fn source_digest(text: &str) -> [u8; 32] {
    Sha256::digest(text.as_bytes()).into()
}

/// Parse whitespace-separated `word frequency` lines. Blank and malformed
/// lines are skipped.
pub fn parse_word_list(text: &str) -> Vec<(String, u64)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let word = match parts.next() {
            Some(w) => w,
            None => continue,
        };
        let frequency = match parts.next().and_then(|f| f.parse().ok()) {
            Some(f) => f,
            None => continue,
        };
        pairs.push((word.to_string(), frequency));
    }
    pairs
}

impl Corpus {
    /// Build a corpus from parsed `(word, frequency)` pairs.
    ///
    /// Each word's key-center path is resampled to `sample_size` points.
    /// Words containing characters the layout cannot place are skipped and
    /// counted, not fatal. Entries are sorted by descending frequency, with
    /// the word itself as a deterministic tie-break.
    pub fn build<I>(pairs: I, layout: &KeyLayout, sample_size: usize) -> (Self, BuildStats)
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut stats = BuildStats::new();
        let mut entries = Vec::new();
        for (word, frequency) in pairs {
            stats.tick_word();
            if word.is_empty() {
                stats.tick_skipped();
                continue;
            }
            let centers = match layout.word_path(&word) {
                Ok(c) => c,
                Err(_) => {
                    stats.tick_skipped();
                    continue;
                }
            };
            let ideal_path = resample(&centers, sample_size);
            entries.push(CorpusEntry {
                word,
                frequency,
                ideal_path,
            });
        }
        entries.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        (
            Self {
                sample_size,
                entries,
            },
            stats,
        )
    }

    /// Serialize to a cache file, remembering the source fingerprint.
    pub fn save<P: AsRef<Path>>(&self, path: P, source_digest: [u8; 32]) -> Result<(), GlideError> {
        let cache = CacheFile {
            source_digest,
            corpus: self.clone(),
        };
        let data = bincode::serialize(&cache)
            .map_err(|e| GlideError::Corpus(format!("failed to serialize cache: {e}")))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load a cache file using memory mapping. Returns the corpus and the
    /// fingerprint of the source it was built from.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(Self, [u8; 32]), GlideError> {
        let file = File::open(path)?;
        let cache: CacheFile = unsafe {
            let mmap = Mmap::map(&file)?;
            bincode::deserialize(&mmap)
                .map_err(|e| GlideError::Corpus(format!("invalid corpus cache: {e}")))?
        };
        Ok((cache.corpus, cache.source_digest))
    }

    /// Load a cache and reject it if it was built from different source
    /// text or at a different sample size.
    pub fn load_verified<P: AsRef<Path>>(
        path: P,
        expected_digest: [u8; 32],
        sample_size: usize,
    ) -> Result<Self, GlideError> {
        let (corpus, digest) = Self::load(path)?;
        if digest != expected_digest {
            return Err(GlideError::Corpus(
                "cache is stale: source word list has changed".into(),
            ));
        }
        if corpus.sample_size != sample_size {
            return Err(GlideError::Corpus(format!(
                "cache resampled at {} points, expected {}",
                corpus.sample_size, sample_size
            )));
        }
        Ok(corpus)
    }
}
