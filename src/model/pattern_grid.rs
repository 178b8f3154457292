use itertools::Itertools;
use log::trace;

use super::{GridDimensions, PanelFinish};
use crate::error::{DesignerError, Result};

/// Per-panel finishes for the whole floor, stored row-major.
///
/// A default grid is uninitialized (0x0); it becomes ready the first time it is
/// resized to the planned dimensions. Changing the shape always starts over
/// with every panel opaque, so no toggle ever survives at a coordinate that
/// meant something else under the old shape.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PatternGrid {
    dimensions: GridDimensions,
    cells: Vec<PanelFinish>,
}

impl std::fmt::Debug for PatternGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');

        for (row, chunk) in self.rows_iter().enumerate() {
            output.push_str(&format!("{:>2}|", row));
            output.push_str(&chunk.iter().map(|finish| finish.symbol()).join(""));
            output.push('|');
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl PatternGrid {
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![PanelFinish::Opaque; dimensions.panel_count()],
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.dimensions.is_empty()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn cols(&self) -> usize {
        self.dimensions.cols
    }

    /// Reallocates to all-opaque when the shape differs; keeps the current
    /// pattern when it doesn't. Returns true if the grid was reallocated.
    pub fn resize(&mut self, dimensions: GridDimensions) -> bool {
        if self.dimensions == dimensions {
            return false;
        }

        trace!(
            target: "pattern_grid",
            "Resizing pattern grid from {} to {}",
            self.dimensions,
            dimensions
        );
        *self = Self::new(dimensions);
        true
    }

    pub fn get(&self, row: usize, col: usize) -> Option<PanelFinish> {
        self.index_of(row, col).map(|idx| self.cells[idx])
    }

    /// Flips one panel and returns its new finish.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<PanelFinish> {
        let idx = self.index_of(row, col).ok_or(DesignerError::OutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })?;
        let finish = self.cells[idx].toggled();
        self.cells[idx] = finish;
        Ok(finish)
    }

    pub fn reset(&mut self) {
        self.cells.fill(PanelFinish::Opaque);
    }

    /// Mirror where `row + col` is odd, opaque elsewhere; the top-left panel is
    /// always opaque.
    pub fn fill_checkerboard(&mut self) {
        let cols = self.cols();
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            *cell = if (row + col) % 2 == 1 {
                PanelFinish::Mirror
            } else {
                PanelFinish::Opaque
            };
        }
    }

    /// Every panel with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, PanelFinish)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, finish)| (idx / cols, idx % cols, *finish))
    }

    pub fn finishes(&self) -> impl Iterator<Item = PanelFinish> + '_ {
        self.cells.iter().copied()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[PanelFinish]> + '_ {
        // chunks() rejects a zero chunk size; an uninitialized grid has no cells anyway
        self.cells.chunks(self.cols().max(1))
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if self.dimensions.contains(row, col) {
            Some(row * self.cols() + col)
        } else {
            None
        }
    }

    /// Parse a grid from the `Debug` format: one line per row, `.` for opaque
    /// and `#` for mirror between the `|` delimiters.
    #[cfg(test)]
    pub fn parse(input: &str) -> Self {
        let mut rows: Vec<Vec<PanelFinish>> = Vec::new();
        for line in input.lines() {
            let line = line.trim();
            let Some(start) = line.find('|') else {
                continue;
            };
            let body = line[start + 1..].trim_end_matches('|');
            rows.push(
                body.chars()
                    .map(|c| PanelFinish::from_symbol(c).unwrap())
                    .collect(),
            );
        }

        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        assert!(rows.iter().all(|row| row.len() == cols), "ragged grid");
        Self {
            dimensions: GridDimensions::new(rows.len(), cols),
            cells: rows.into_iter().flatten().collect(),
        }
    }
}
