//! Key-center lookup for the on-screen QWERTY keyboard.
//!
//! The layout is a collaborator of the matching core: it maps each letter
//! to the center of its key in the same coordinate space the stroke events
//! arrive in. Ideal word paths are built from these centers once, at
//! corpus-build time.

use std::collections::HashMap;

use crate::error::GlideError;
use crate::geometry::Point;

/// Rows of the standard QWERTY letter grid.
const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Placement of the keyboard rectangle inside the canvas.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    pub pos_x: f64,
    pub pos_y: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        // 450x450 canvas with the keyboard filling the bottom half.
        Self {
            width: 450.0,
            height: 225.0,
            pos_x: 0.0,
            pos_y: 225.0,
        }
    }
}

/// Precomputed key centers for one keyboard placement.
pub struct KeyLayout {
    centers: HashMap<char, Point>,
}

impl KeyLayout {
    pub fn new(params: LayoutParams) -> Self {
        let key_w = params.width / ROWS[0].len() as f64;
        let key_h = params.height / ROWS.len() as f64;
        let mut centers = HashMap::new();
        for (row_ix, row) in ROWS.iter().enumerate() {
            // Shorter rows are centered within the keyboard width.
            let row_offset = (params.width - row.len() as f64 * key_w) / 2.0;
            for (col_ix, ch) in row.chars().enumerate() {
                let x = params.pos_x + row_offset + (col_ix as f64 + 0.5) * key_w;
                let y = params.pos_y + (row_ix as f64 + 0.5) * key_h;
                centers.insert(ch, Point::new(x, y));
            }
        }
        Self { centers }
    }

    /// Key center for a letter, case-insensitive. `None` for characters
    /// without a key.
    pub fn center_of(&self, ch: char) -> Option<Point> {
        self.centers.get(&ch.to_ascii_lowercase()).copied()
    }

    /// Key-center sequence for a whole word. Fails on the first character
    /// without a key so the corpus loader can skip the word.
    pub fn word_path(&self, word: &str) -> Result<Vec<Point>, GlideError> {
        word.chars()
            .map(|ch| self.center_of(ch).ok_or(GlideError::Layout(ch)))
            .collect()
    }
}
