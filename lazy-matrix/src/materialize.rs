use super::*;
use log::trace;
use par_iter::*;

/// Number of elements from which materialization is spread over worker threads.
const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 64;

/// Controls how an expression is materialized.
///
/// Rows of the result are disjoint and every element is computed independently, so rows are
/// handed out to worker threads once the result has at least `threshold` elements. Smaller
/// results are filled on the calling thread.
#[derive(Clone, Debug)]
pub struct Parallelism {
    threshold: usize,
    threads: Option<usize>,
    chunk_rows: Option<usize>,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PARALLEL_THRESHOLD,
            threads: None,
            chunk_rows: None,
        }
    }
}

impl Parallelism {
    /// Never leaves the calling thread.
    pub fn sequential() -> Self {
        Self::default().with_threshold(usize::MAX)
    }

    /// Sets the minimum number of result elements for a parallel fill.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of worker threads, defaults to the available parallelism.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    /// Sets how many rows a worker claims at once, defaults to an even split between workers.
    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = Some(chunk_rows.max(1));
        self
    }

    /// Minimum number of rows for which the fill is dispatched to workers.
    fn min_rows(&self, cols: usize) -> usize {
        self.threshold.div_ceil(cols)
    }
}

impl<T: Element> Matrix<T> {
    /// Evaluates every element of an expression into a new matrix.
    ///
    /// The expression is validated first, so a shape mismatch anywhere in the graph is reported
    /// before anything is allocated.
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: Expr<Elem = T>,
    {
        Self::from_expr_with(expr, &Parallelism::default())
    }

    /// Same as [`Matrix::from_expr`] with explicit control over parallel evaluation.
    pub fn from_expr_with<E>(expr: E, parallelism: &Parallelism) -> Result<Self>
    where
        E: Expr<Elem = T>,
    {
        expr.validate()?;

        let (rows, cols) = (expr.rows(), expr.cols());
        let mut data = vec![T::zero(); Self::checked_size(rows, cols)?];

        let fill_row = |(i, row): (usize, &mut [T])| {
            for (j, value) in row.iter_mut().enumerate() {
                *value = expr.at(i, j);
            }
        };

        let min_rows = parallelism.min_rows(cols);
        if rows < min_rows {
            trace!("materializing {rows}x{cols} expression on calling thread");
            data.chunks_mut(cols).enumerate().for_each(fill_row);
        } else {
            trace!("materializing {rows}x{cols} expression on worker threads");
            let mut iter = data.par_chunks_mut(cols).with_min_len(min_rows);
            if let Some(threads) = parallelism.threads {
                iter = iter.with_threads(threads);
            }
            if let Some(chunk_rows) = parallelism.chunk_rows {
                iter = iter.with_chunk_size(chunk_rows);
            }
            iter.enumerate().for_each(fill_row);
        }

        Ok(Self { data, rows, cols })
    }

    /// Replaces this matrix with the evaluated expression. The matrix is left untouched when the
    /// expression is invalid.
    ///
    /// The expression cannot borrow `self`, so `m.assign_expr(&m + &m)` is rejected at compile
    /// time; evaluate into a new matrix instead.
    pub fn assign_expr<E>(&mut self, expr: E) -> Result<()>
    where
        E: Expr<Elem = T>,
    {
        *self = Self::from_expr(expr)?;
        Ok(())
    }
}
