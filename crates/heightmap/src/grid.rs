//! Row-major grid addressing.
//!
//! Every filter goes through [`GridIndex`] so that composed filters agree on
//! which cells are neighbors: `index(col, row) = row * columns + col`.

use crate::errors::{FilterError, Result};

/// Offsets `(d_col, d_row)` of the 3x3 neighborhood, self included.
const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offsets where both components are nonzero.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    columns: usize,
    rows: usize,
}

impl GridIndex {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear offset of `(col, row)`. Coordinates are not range-checked.
    #[inline]
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.columns + col
    }

    /// Inverse of [`GridIndex::index`].
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.columns && row < self.rows
    }

    /// Indices of the in-bounds cells of the 3x3 neighborhood, self included.
    ///
    /// Cells past an edge are skipped: there is no wraparound or reflection.
    pub fn neighbors(&self, col: usize, row: usize) -> impl Iterator<Item = usize> {
        self.offset_cells(col, row, &NEIGHBORHOOD)
    }

    /// Indices of the in-bounds diagonal neighbors (at most four).
    pub fn diagonal_neighbors(&self, col: usize, row: usize) -> impl Iterator<Item = usize> {
        self.offset_cells(col, row, &DIAGONALS)
    }

    fn offset_cells(
        &self,
        col: usize,
        row: usize,
        offsets: &'static [(isize, isize)],
    ) -> impl Iterator<Item = usize> + use<> {
        let grid = *self;
        offsets.iter().filter_map(move |&(d_col, d_row)| {
            let c = col.checked_add_signed(d_col)?;
            let r = row.checked_add_signed(d_row)?;
            grid.contains(c, r).then(|| grid.index(c, r))
        })
    }
}

/// Splits a flat grid into rows.
pub fn to_rows(grid: &[f64], index: GridIndex) -> Result<Vec<Vec<f64>>> {
    if grid.len() != index.len() {
        return Err(FilterError::GridSize {
            expected: index.len(),
            actual: grid.len(),
        });
    }
    if index.columns() == 0 {
        return Ok(Vec::new());
    }
    Ok(grid
        .chunks_exact(index.columns())
        .map(<[f64]>::to_vec)
        .collect())
}

/// Flattens rows into a row-major grid. All rows must have the same length.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<(Vec<f64>, GridIndex)> {
    let columns = rows.first().map_or(0, Vec::len);
    if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(FilterError::InvalidParameter(format!(
            "row {row} has {} cells, expected {columns}",
            bad.len()
        )));
    }
    let grid = rows.iter().flatten().copied().collect();
    Ok((grid, GridIndex::new(columns, rows.len())))
}

/// Summary statistics of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of distinct elevation values.
    pub distinct: usize,
}

impl GridStats {
    /// Returns `None` for an empty grid.
    pub fn of(grid: &[f64]) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }
        let (min, max) = min_max(grid);
        let mean = grid.iter().sum::<f64>() / grid.len() as f64;

        let mut sorted = grid.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted.dedup_by(|a, b| a.to_bits() == b.to_bits());

        Some(Self {
            min,
            max,
            mean,
            distinct: sorted.len(),
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Smallest and largest value. `(inf, -inf)` for an empty slice.
pub(crate) fn min_max(grid: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &z in grid {
        lo = lo.min(z);
        hi = hi.max(z);
    }
    (lo, hi)
}
