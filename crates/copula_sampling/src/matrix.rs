//! Row-major sample storage.

use copula_models::CopulaError;

/// `n × d` matrix of samples, one observation per row.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Vec<f64>,
    dimension: usize,
}

impl SampleMatrix {
    /// Wrap row-major `data` with `dimension` columns.
    ///
    /// # Errors
    ///
    /// [`CopulaError::InvalidInput`] if `dimension` is zero or does not
    /// divide `data.len()`.
    pub fn new(data: Vec<f64>, dimension: usize) -> Result<Self, CopulaError> {
        if dimension == 0 || data.len() % dimension != 0 {
            return Err(CopulaError::invalid_input(format!(
                "{} values cannot be split into rows of {dimension}",
                data.len()
            )));
        }
        Ok(Self { data, dimension })
    }

    pub(crate) fn zeros(n_rows: usize, dimension: usize) -> Self {
        Self {
            data: vec![0.0; n_rows * dimension],
            dimension,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.dimension
    }

    /// Row `i`, if it exists.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dimension)?;
        self.data.get(start..start + self.dimension)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dimension)
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.dimension).then(|| self.rows().map(|row| row[j]).collect())
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume into the flat row-major vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
