use std::f32::consts::TAU;

use egui::{Pos2, Rect, Vec2, vec2};

use super::frequency::WordWeight;

/// Logical canvas every cloud is laid out on; painting scales it to fit.
pub const LAYOUT_CANVAS: Vec2 = Vec2::new(800.0, 400.0);

/// Side of one occupancy cell, in canvas units.
const CELL: f32 = 2.0;
/// Cells the spiral moves outward per turn.
const SPIRAL_SPACING: f32 = 1.0;
const WORD_PADDING: f32 = 1.0;
const SHRINK_FACTOR: f32 = 0.8;

/// Font size bounds for the cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontRange {
    pub min: f32,
    pub max: f32,
}

impl FontRange {
    fn size_for(&self, weight: f32) -> f32 {
        self.min + (self.max - self.min) * weight.clamp(0.0, 1.0)
    }
}

/// A word positioned on the canvas, in canvas-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub weight: f32,
    pub font_size: f32,
    pub rect: Rect,
}

/// Place words on a `canvas`-sized area, largest first.
///
/// The canvas is split into square cells. Each word tries centre cells in
/// Archimedean spiral order until its padded box covers only free cells. A
/// word that finds no spot is retried at a smaller size, down to `fonts.min`,
/// and dropped if it still does not fit. `measure` returns the text size of a
/// word at a font size.
pub fn layout_words(
    words: &[WordWeight],
    canvas: Vec2,
    fonts: FontRange,
    mut measure: impl FnMut(&str, f32) -> Vec2,
) -> Vec<PlacedWord> {
    let mut grid = Occupancy::new(canvas);
    let spiral = grid.spiral();
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());
    for word in words {
        let mut font_size = fonts.size_for(word.weight);
        loop {
            let size = measure(&word.word, font_size);
            if let Some(rect) = grid.claim(size, &spiral) {
                placed.push(PlacedWord {
                    word: word.word.clone(),
                    weight: word.weight,
                    font_size,
                    rect,
                });
                break;
            }
            if font_size <= fonts.min {
                break;
            }
            font_size = (font_size * SHRINK_FACTOR).max(fonts.min);
        }
    }
    placed
}

/// Filled cells plus a summed-area table for constant-time box checks.
struct Occupancy {
    cols: usize,
    rows: usize,
    filled: Vec<bool>,
    sums: Vec<u32>,
}

impl Occupancy {
    fn new(canvas: Vec2) -> Self {
        let cols = (canvas.x / CELL).floor().max(0.0) as usize;
        let rows = (canvas.y / CELL).floor().max(0.0) as usize;
        Self {
            cols,
            rows,
            filled: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    /// Every cell once, walking an Archimedean spiral out from the centre.
    fn spiral(&self) -> Vec<(usize, usize)> {
        if self.cols == 0 || self.rows == 0 {
            return Vec::new();
        }
        let centre = (self.cols as f32 / 2.0, self.rows as f32 / 2.0);
        let aspect = self.rows as f32 / self.cols as f32;
        let max_radius = centre.0 * std::f32::consts::SQRT_2 + 1.0;
        let mut seen = vec![false; self.cols * self.rows];
        let mut cells = Vec::with_capacity(self.cols * self.rows);
        let mut angle = 0.0f32;
        loop {
            let radius = SPIRAL_SPACING * angle / TAU;
            if radius > max_radius {
                break;
            }
            let x = centre.0 + radius * angle.cos();
            let y = centre.1 + radius * angle.sin() * aspect;
            if x >= 0.0 && y >= 0.0 {
                let (col, row) = (x as usize, y as usize);
                if col < self.cols && row < self.rows && !seen[row * self.cols + col] {
                    seen[row * self.cols + col] = true;
                    cells.push((col, row));
                }
            }
            angle += 0.5 / radius.max(1.0);
        }
        cells
    }

    /// Cells covered by a padded box of `size`.
    fn span(size: Vec2) -> (usize, usize) {
        let cells = |len: f32| ((len + 2.0 * WORD_PADDING) / CELL).ceil().max(1.0) as usize;
        (cells(size.x), cells(size.y))
    }

    fn is_free(&self, col: usize, row: usize, width: usize, height: usize) -> bool {
        let stride = self.cols + 1;
        let at = |c: usize, r: usize| self.sums[r * stride + c];
        let (right, bottom) = (col + width, row + height);
        at(right, bottom) + at(col, row) == at(col, bottom) + at(right, row)
    }

    fn fill(&mut self, col: usize, row: usize, width: usize, height: usize) {
        for r in row..row + height {
            for c in col..col + width {
                self.filled[r * self.cols + c] = true;
            }
        }
        // Prefix sums above or left of the new box are unchanged.
        let stride = self.cols + 1;
        for r in row..self.rows {
            for c in col..self.cols {
                let cell = u32::from(self.filled[r * self.cols + c]);
                self.sums[(r + 1) * stride + c + 1] =
                    cell + self.sums[r * stride + c + 1] + self.sums[(r + 1) * stride + c]
                        - self.sums[r * stride + c];
            }
        }
    }

    /// Reserve the first free spot along `spiral` for a word of `size`.
    fn claim(&mut self, size: Vec2, spiral: &[(usize, usize)]) -> Option<Rect> {
        let (width, height) = Self::span(size);
        if width > self.cols || height > self.rows {
            return None;
        }
        let (col, row) = spiral.iter().find_map(|&(centre_col, centre_row)| {
            let col = centre_col.checked_sub(width / 2)?;
            let row = centre_row.checked_sub(height / 2)?;
            let fits = col + width <= self.cols
                && row + height <= self.rows
                && self.is_free(col, row, width, height);
            fits.then_some((col, row))
        })?;
        self.fill(col, row, width, height);
        let block = Rect::from_min_size(
            Pos2::new(col as f32 * CELL, row as f32 * CELL),
            vec2(width as f32, height as f32) * CELL,
        );
        Some(Rect::from_center_size(block.center(), size))
    }
}

/// Map a canvas-local rect into screen space: scaled by `scale`, then moved to
/// `origin`.
pub fn to_screen(rect: Rect, origin: Pos2, scale: f32) -> Rect {
    Rect::from_min_size(origin + rect.min.to_vec2() * scale, rect.size() * scale)
}
