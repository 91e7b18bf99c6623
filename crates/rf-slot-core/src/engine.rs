//! Spin engine — weighted draws without replacement per reel

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::error::ConfigError;
use crate::paytable::PayoutTable;

/// Spin result grid, column-major (`columns[reel][row]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<Vec<u32>>,
}

impl Grid {
    /// Wrap prebuilt columns. All columns must have the same height.
    pub fn from_columns(columns: Vec<Vec<u32>>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { columns }
    }

    pub fn reels(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn symbol_at(&self, reel: usize, row: usize) -> Option<u32> {
        self.columns.get(reel).and_then(|c| c.get(row)).copied()
    }

    /// Symbols across one row, left to right
    pub fn row(&self, row: usize) -> Vec<u32> {
        self.columns
            .iter()
            .filter_map(|c| c.get(row).copied())
            .collect()
    }

    pub fn columns(&self) -> &[Vec<u32>] {
        &self.columns
    }
}

/// Draws fresh grids from the weighted pool
pub struct SpinEngine {
    /// Read-only pool, copied per column
    pool: Vec<u32>,
    grid: GridSpec,
    rng: ChaCha8Rng,
}

impl SpinEngine {
    /// Create an engine. `seed` makes draws reproducible.
    pub fn new(paytable: &PayoutTable, grid: GridSpec, seed: Option<u64>) -> Result<Self, ConfigError> {
        let pool = paytable.weighted_pool().to_vec();
        if grid.reels == 0 || grid.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                reels: grid.reels,
                rows: grid.rows,
            });
        }
        if grid.rows as usize > pool.len() {
            return Err(ConfigError::RowsExceedPool {
                rows: grid.rows,
                pool_size: pool.len(),
            });
        }

        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };

        Ok(Self { pool, grid, rng })
    }

    /// Reseed for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn grid_spec(&self) -> GridSpec {
        self.grid
    }

    /// Draw a full grid; every column starts from a full pool
    pub fn draw(&mut self) -> Grid {
        let columns = (0..self.grid.reels).map(|_| self.draw_column()).collect();
        Grid::from_columns(columns)
    }

    /// Draw `rows` symbols for one column without replacement
    pub fn draw_column(&mut self) -> Vec<u32> {
        let mut remaining = self.pool.clone();
        let mut column = Vec::with_capacity(self.grid.rows as usize);

        for _ in 0..self.grid.rows {
            let idx = self.rng.random_range(0..remaining.len());
            column.push(remaining.swap_remove(idx));
        }

        column
    }
}
