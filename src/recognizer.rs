//! Composition root: one configuration, one corpus snapshot, one ranking
//! pass per completed stroke.

use std::sync::Arc;

use crate::config::RecognizerConfig;
use crate::corpus::Corpus;
use crate::error::GlideError;
use crate::geometry::Point;
use crate::rank::{self, Candidate};
use crate::resample::resample;

/// Recognizes completed strokes against an immutable corpus snapshot.
///
/// The corpus is shared read-only; concurrent `recognize` calls need no
/// locking. Replacing the dictionary publishes a whole new snapshot via
/// [`Recognizer::swap_corpus`], so in-flight callers holding the old `Arc`
/// finish against the old snapshot in its entirety.
pub struct Recognizer {
    config: RecognizerConfig,
    corpus: Arc<Corpus>,
}

impl Recognizer {
    /// The corpus must have been resampled at the configured sample size;
    /// a mismatch would break the fixed-length comparison invariant.
    pub fn new(config: RecognizerConfig, corpus: Arc<Corpus>) -> Result<Self, GlideError> {
        config.validate()?;
        check_sample_size(&config, &corpus)?;
        Ok(Self { config, corpus })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// Rank the corpus against one completed stroke.
    ///
    /// Called exactly once per gesture, with the full accumulated stroke
    /// from the capture layer. The stroke must be non-empty.
    pub fn recognize(&self, stroke: &[Point]) -> Result<Vec<Candidate>, GlideError> {
        let query = resample(stroke, self.config.sample_size);
        rank::rank(
            &query,
            &self.corpus,
            self.config.corpus_window,
            self.config.top_k,
        )
    }

    /// Atomically replace the corpus snapshot.
    pub fn swap_corpus(&mut self, corpus: Arc<Corpus>) -> Result<(), GlideError> {
        check_sample_size(&self.config, &corpus)?;
        self.corpus = corpus;
        Ok(())
    }
}

fn check_sample_size(config: &RecognizerConfig, corpus: &Corpus) -> Result<(), GlideError> {
    if corpus.sample_size != config.sample_size {
        return Err(GlideError::Config(format!(
            "corpus resampled at {} points, config expects {}",
            corpus.sample_size, config.sample_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;
    use crate::geometry::Point;

    fn tiny_corpus(sample_size: usize) -> Corpus {
        let path = resample(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], sample_size);
        Corpus {
            sample_size,
            entries: vec![CorpusEntry {
                word: "ab".into(),
                frequency: 1,
                ideal_path: path,
            }],
        }
    }

    #[test]
    fn rejects_sample_size_mismatch() {
        let config = RecognizerConfig {
            sample_size: 50,
            ..Default::default()
        };
        let corpus = Arc::new(tiny_corpus(32));
        assert!(Recognizer::new(config, corpus).is_err());
    }

    #[test]
    fn swap_checks_sample_size_too() {
        let config = RecognizerConfig::default();
        let corpus = Arc::new(tiny_corpus(config.sample_size));
        let mut rec = Recognizer::new(config, corpus).unwrap();
        assert!(rec.swap_corpus(Arc::new(tiny_corpus(10))).is_err());
        assert!(rec.swap_corpus(Arc::new(tiny_corpus(50))).is_ok());
    }

    #[test]
    fn recognize_returns_the_only_word() {
        let config = RecognizerConfig::default();
        let corpus = Arc::new(tiny_corpus(config.sample_size));
        let rec = Recognizer::new(config, corpus).unwrap();
        let out = rec
            .recognize(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "ab");
    }
}
