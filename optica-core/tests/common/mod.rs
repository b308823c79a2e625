use optica_core::{DataSource, DataSourceError};

/// One-dimensional points compared by absolute difference.
#[derive(Clone)]
pub struct Line {
    data: Vec<f64>,
}

impl Line {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl DataSource for Line {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn name(&self) -> &str {
        "line"
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
        let a = self
            .data
            .get(i)
            .ok_or(DataSourceError::OutOfBounds { index: i })?;
        let b = self
            .data
            .get(j)
            .ok_or(DataSourceError::OutOfBounds { index: j })?;
        Ok((a - b).abs())
    }
}

/// Source whose distance always fails once `fail_at` is touched.
pub struct Faulty {
    pub len: usize,
    pub fail_at: usize,
}

impl DataSource for Faulty {
    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &str {
        "faulty"
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
        if i == self.fail_at || j == self.fail_at {
            return Err(DataSourceError::OutOfBounds {
                index: self.fail_at,
            });
        }
        Ok(1.0)
    }
}
