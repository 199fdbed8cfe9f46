//! Trajectory matching for gesture typing.
//!
//! A user sweeps a pointer across an on-screen keyboard without lifting;
//! glidetype infers the intended word by resampling the completed stroke
//! into a fixed number of arc-length-uniform points and ranking every
//! dictionary word's precomputed ideal key-to-key path by mean pointwise
//! distance. The result is identical regardless of how many points the
//! raw drag emitted.

pub mod config;
pub mod corpus;
pub mod error;
pub mod events;
pub mod geometry;
pub mod io_utils;
pub mod layout;
pub mod rank;
pub mod recognizer;
pub mod resample;
pub mod stats;

pub use config::RecognizerConfig;
pub use corpus::{parse_word_list, source_digest, Corpus, CorpusEntry};
pub use error::GlideError;
pub use events::{PointerEvent, StrokeBuilder, StrokeState};
pub use geometry::{distance, path_length, pointwise_distance, Point};
pub use layout::{KeyLayout, LayoutParams};
pub use rank::{rank, score_distance, Candidate};
pub use recognizer::Recognizer;
pub use resample::resample;
pub use stats::{BuildStats, RecognizeStats};

/// Default number of points every trajectory is resampled to.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;
