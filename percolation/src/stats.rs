use rand::Rng;

use crate::{Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold: runs independent
/// trials, each opening uniformly random cells of a fresh grid until the
/// system percolates, and aggregates the opened fractions.
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` experiments on an N-by-N grid with the thread-local
    /// random generator.
    pub fn new(size: usize, trials: usize) -> Result<Self> {
        Self::with_rng(size, trials, &mut rand::thread_rng())
    }

    /// Same as [`new`](Self::new) with a caller-supplied random source, so
    /// a seeded generator makes the whole run deterministic.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `size` or `trials` is zero.
    pub fn with_rng<R: Rng>(size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if size == 0 || trials == 0 {
            return Err(Error::InvalidArgument);
        }

        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            thresholds.push(run_trial(size, rng)?);
        }

        Ok(Self { thresholds })
    }

    /// Per-trial opened fractions, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the recorded fractions; NaN for a
    /// single trial, where it is undefined.
    pub fn stddev(&self) -> f64 {
        if self.thresholds.len() == 1 {
            return f64::NAN;
        }
        stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_interval()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_interval()
    }

    fn half_interval(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }
}

/// Opens random cells of a fresh grid until it percolates and returns the
/// fraction of cells that ended up open.
fn run_trial<R: Rng>(size: usize, rng: &mut R) -> Result<f64> {
    // a 1x1 grid percolates exactly when its single cell opens, so the
    // fraction is known without running the experiment
    if size == 1 {
        return Ok(1.0);
    }

    let mut grid = Percolation::new(size)?;
    while !grid.percolates() {
        let row = rng.gen_range(1..=size);
        let col = rng.gen_range(1..=size);
        if !grid.is_open(row, col)? {
            grid.open(row, col)?;
        }
    }

    Ok(grid.open_sites() as f64 / (size * size) as f64)
}

////////////////////////////////////////////////////////////////////////////////

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation of `values`, with the N - 1 divisor.
pub fn stddev(values: &[f64]) -> f64 {
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

////////////////////////////////////////////////////////////////////////////////
