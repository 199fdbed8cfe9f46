use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlideError {
    /// Two fixed-length paths disagreed on length. This indicates a bug in
    /// the resampling pipeline, not bad user data.
    #[error("path length mismatch: expected {expected}, got {actual}")]
    PathLength { expected: usize, actual: usize },

    /// A word contains a character the keyboard layout cannot place.
    #[error("no key center for character {0:?}")]
    Layout(char),

    /// Corpus text or cache failure.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
