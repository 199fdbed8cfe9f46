//! Counters for corpus builds and recognition passes. Reported over
//! stderr; mainly consumed by the command-line tools and test helpers.

/// Counts gathered while building a corpus from a word list.
#[derive(Debug, Default, Clone)]
pub struct BuildStats {
    pub words_parsed: u64,
    pub words_skipped: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_word(&mut self) {
        self.words_parsed += 1;
    }

    pub fn tick_skipped(&mut self) {
        self.words_skipped += 1;
    }

    /// Number of words that made it into the corpus.
    pub fn loaded(&self) -> u64 {
        self.words_parsed - self.words_skipped
    }

    pub fn report(&self) {
        eprintln!(
            "Corpus: {} words loaded, {} skipped of {} parsed",
            self.loaded(),
            self.words_skipped,
            self.words_parsed
        );
    }
}

/// Counts gathered while replaying strokes through the recognizer.
#[derive(Debug, Default, Clone)]
pub struct RecognizeStats {
    pub strokes: u64,
    pub candidates: u64,
}

impl RecognizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_stroke(&mut self, candidates: usize) {
        self.strokes += 1;
        self.candidates += candidates as u64;
    }

    pub fn report(&self) {
        eprintln!(
            "Recognized {} strokes, {} candidates emitted",
            self.strokes, self.candidates
        );
    }
}
