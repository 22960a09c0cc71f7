//! Asset loading - the two fixed-path text-art files
//!
//! A failed load is logged and tolerated: the game runs without a
//! background and with markerless words.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

/// A rectangular grid of characters parsed from a text file.
///
/// Rows may have uneven lengths in the file; reads outside a row fall back
/// to a space so the art always behaves as a full `width × height` grid.
#[derive(Debug, Clone)]
pub struct TextArt {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl TextArt {
    /// Parse art from file contents. Returns `None` for blank input.
    pub fn parse(text: &str) -> Option<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        if width == 0 || rows.is_empty() {
            return None;
        }
        Some(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at `(x, y)`, space-padded outside ragged rows or the grid.
    pub fn get(&self, x: usize, y: usize) -> char {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(' ')
    }
}

/// Optional visuals loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub background: Option<TextArt>,
    pub marker: Option<TextArt>,
}

impl Assets {
    /// Load both assets from `dir`, degrading gracefully per file.
    pub fn load(dir: &Path) -> Self {
        Self {
            background: load_art(&dir.join("background.txt")),
            marker: load_art(&dir.join("meteor.txt")),
        }
    }
}

fn load_art(path: &Path) -> Option<TextArt> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let art = TextArt::parse(&text);
            match &art {
                Some(a) => info!(path = %path.display(), width = a.width(), height = a.height(), "loaded asset"),
                None => warn!(path = %path.display(), "asset file is blank, ignoring"),
            }
            art
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to load asset, rendering degrades");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_ragged_rows() {
        let art = TextArt::parse("ab\na\nabcd").unwrap();
        assert_eq!(art.width(), 4);
        assert_eq!(art.height(), 3);
        assert_eq!(art.get(1, 0), 'b');
        assert_eq!(art.get(1, 1), ' ');
        assert_eq!(art.get(3, 2), 'd');
        // Out of bounds reads are spaces, not panics.
        assert_eq!(art.get(100, 100), ' ');
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(TextArt::parse("").is_none());
        assert!(TextArt::parse("\n\n").is_none());
    }

    #[test]
    fn test_load_missing_files_degrades() {
        let assets = Assets::load(Path::new("/nonexistent/for/sure"));
        assert!(assets.background.is_none());
        assert!(assets.marker.is_none());
    }
}
