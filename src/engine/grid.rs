use super::{rule, Traversal};
use crate::NiceInt;
use anyhow::{bail, ensure, Result};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;

/// Bounded Game of Life field of `rows x columns` cells.
///
/// Cell `(x, y)` lives in column `x` and row `y`. Everything outside the field
/// is permanently dead: neighborhoods are clipped at the edges and never wrap.
///
/// The next generation is computed into a scratch buffer from a frozen copy of
/// the current one and only then committed, so the traversal order of cells
/// can't affect the result.
#[derive(Clone, Debug)]
pub struct Grid {
    alive: Vec<bool>,      // Current generation, row-major.
    alive_next: Vec<bool>, // Generation being computed; meaningless between updates.
    rows: usize,
    columns: usize,
    generation: u64, // Number of committed updates.
}

impl Grid {
    const FILL_RATE: f64 = 0.5;

    fn cell_count(rows: usize, columns: usize) -> Result<usize> {
        ensure!(
            rows > 0 && columns > 0,
            "Grid dimensions must be positive, got {}x{}",
            rows,
            columns
        );
        match rows.checked_mul(columns) {
            Some(n) => Ok(n),
            None => bail!("Grid {}x{} is too large", rows, columns),
        }
    }

    /// Create a field with all cells dead.
    pub fn blank(rows: usize, columns: usize) -> Result<Self> {
        let n = Self::cell_count(rows, columns)?;
        Self::from_cells(rows, columns, vec![false; n])
    }

    /// Create a field from row-major cell states.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Result<Self> {
        let n = Self::cell_count(rows, columns)?;
        ensure!(
            cells.len() == n,
            "Expected {} cells for a {}x{} grid, got {}",
            n,
            rows,
            columns,
            cells.len()
        );
        Ok(Self {
            alive: cells,
            alive_next: vec![false; n],
            rows,
            columns,
            generation: 0,
        })
    }

    /// Create a field where exactly the listed `(x, y)` cells are alive.
    pub fn from_coords(rows: usize, columns: usize, coords: &[(usize, usize)]) -> Result<Self> {
        let mut cells = vec![false; Self::cell_count(rows, columns)?];
        for &(x, y) in coords {
            if x >= columns || y >= rows {
                bail!("Cell ({}, {}) is outside of the {}x{} grid", x, y, rows, columns);
            }
            cells[x + y * columns] = true;
        }
        Self::from_cells(rows, columns, cells)
    }

    /// Create a field with every cell alive with probability 1/2, drawing from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Self> {
        let n = Self::cell_count(rows, columns)?;
        let cells = (0..n).map(|_| rng.gen_bool(Self::FILL_RATE)).collect();
        Self::from_cells(rows, columns, cells)
    }

    /// Create a field with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, columns: usize, seed: Option<u64>) -> Result<Self> {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let grid = Self::from_rng(rows, columns, &mut rng)?;
        debug!(
            "Random {}x{} grid (seed {:?}), population {}",
            rows,
            columns,
            seed,
            grid.population()
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.alive.iter().filter(|&&cell| cell).count()
    }

    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        assert!(x < self.columns && y < self.rows);
        self.alive[x + y * self.columns]
    }

    /// Row-major snapshot of the current generation.
    pub fn get_cells(&self) -> Vec<bool> {
        self.alive.clone()
    }

    /// `(x, y, alive)` for every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        self.alive
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i % columns, i / columns, alive))
    }

    /// Number of alive cells among the (up to 8) neighbors of `(x, y)`.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        Self::live_neighbors(&self.alive, self.rows, self.columns, x, y)
    }

    fn live_neighbors(alive: &[bool], rows: usize, columns: usize, x: usize, y: usize) -> usize {
        assert!(
            x < columns && y < rows,
            "({}, {}) is outside of the {}x{} grid",
            x,
            y,
            rows,
            columns
        );
        // neighborhood clipped by the field bounds
        let (x1, x2) = (x.saturating_sub(1), (x + 1).min(columns - 1));
        let (y1, y2) = (y.saturating_sub(1), (y + 1).min(rows - 1));
        let block = (y1..=y2)
            .map(|ny| {
                alive[x1 + ny * columns..=x2 + ny * columns]
                    .iter()
                    .filter(|&&cell| cell)
                    .count()
            })
            .sum::<usize>();
        block - alive[x + y * columns] as usize
    }

    fn compute_row(alive: &[bool], rows: usize, columns: usize, y: usize, dst: &mut [bool]) {
        for (x, next) in dst.iter_mut().enumerate() {
            let neighbors = Self::live_neighbors(alive, rows, columns, x, y);
            *next = rule::next_state(alive[x + y * columns], neighbors);
        }
    }

    fn compute_next(&mut self) {
        let (rows, columns, alive) = (self.rows, self.columns, &self.alive);
        for (y, row) in self.alive_next.chunks_exact_mut(columns).enumerate() {
            Self::compute_row(alive, rows, columns, y, row);
        }
    }

    fn compute_next_parallel(&mut self) {
        let (rows, columns, alive) = (self.rows, self.columns, &self.alive);
        self.alive_next
            .par_chunks_exact_mut(columns)
            .enumerate()
            .for_each(|(y, row)| Self::compute_row(alive, rows, columns, y, row));
    }

    /// Makes the computed generation current.
    fn commit(&mut self) {
        std::mem::swap(&mut self.alive, &mut self.alive_next);
        self.generation += 1;
        trace!("Committed generation {}", self.generation);
    }

    /// Compute the next generation and replace the current one with it.
    pub fn advance(&mut self) {
        self.compute_next();
        self.commit();
    }

    /// Same as [`Grid::advance`], with rows distributed between rayon workers.
    pub fn advance_parallel(&mut self) {
        self.compute_next_parallel();
        self.commit();
    }

    /// Update the field `generations` times.
    pub fn update(&mut self, generations: u64, traversal: Traversal) {
        for _ in 0..generations {
            match traversal {
                Traversal::Sequential => self.advance(),
                Traversal::Parallel => self.advance_parallel(),
            }
        }
    }

    /// Returns multiline string reporting field stats.
    pub fn statistics(&self) -> String {
        format!(
            "Size: {} x {}\nGeneration: {}\nPopulation: {}",
            self.rows,
            self.columns,
            NiceInt::from(self.generation),
            NiceInt::from_usize(self.population()),
        )
    }

    /// Computes the next generation visiting cells in the given order of row-major indices.
    #[cfg(test)]
    pub(super) fn advance_in_order(&mut self, order: &[usize]) {
        for &i in order {
            let (x, y) = (i % self.columns, i / self.columns);
            let neighbors = self.count_live_neighbors(x, y);
            self.alive_next[i] = rule::next_state(self.alive[i], neighbors);
        }
        self.commit();
    }
}

/// Grids are equal when they have the same size and the same alive cells.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.alive == other.alive
    }
}

impl Eq for Grid {}

/// One line per row, `#` for alive and `.` for dead cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.alive.chunks_exact(self.columns) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
