//! Double buffering for neighborhood filters.
//!
//! A filter that reads a cell's neighbors must never see a neighbor it has
//! already rewritten. The filter fills a [`ScratchBuffer`] from the untouched
//! grid and only then commits the buffer back in one step.

/// Reusable full-grid buffer. Keeps its allocation between calls.
#[derive(Debug, Default, Clone)]
pub struct ScratchBuffer {
    values: Vec<f64>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(len: usize) -> Self {
        Self {
            values: Vec::with_capacity(len),
        }
    }

    /// Zeroes and resizes the buffer to `len` cells and hands it out for writing.
    pub fn prepare(&mut self, len: usize) -> &mut [f64] {
        self.values.clear();
        self.values.resize(len, 0.0);
        &mut self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copies the buffer over `grid`.
    pub fn commit(&self, grid: &mut [f64]) {
        grid.copy_from_slice(&self.values);
    }

    /// Writes `f(scratch, original)` into every cell of `grid`.
    pub fn commit_with(&self, grid: &mut [f64], f: impl Fn(f64, f64) -> f64) {
        for (z, &s) in grid.iter_mut().zip(&self.values) {
            *z = f(s, *z);
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }
}
