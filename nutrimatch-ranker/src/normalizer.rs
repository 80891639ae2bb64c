//! Z-score normalisation of nutrient feature vectors.
//!
//! [`FeatureNormalizer::fit`] learns per-column location and scale over the
//! catalog once; the resulting [`FeatureSpace`] maps any raw vector, whether
//! a catalog row or a synthetic target, into the same normalised space.

use nutrimatch_core::NUTRIENT_COUNT;

use crate::RankerError;

/// Raw or normalised feature vector in [`Nutrient::ALL`](nutrimatch_core::Nutrient::ALL) order.
pub type FeatureVector = [f64; NUTRIENT_COUNT];

/// Standard deviations at or below this are treated as zero variance.
pub const VARIANCE_EPSILON: f64 = 1e-12;

/// Scale substituted for zero-variance columns.
///
/// Such columns are centred but not rescaled.
pub const ZERO_VARIANCE_SCALE: f64 = 1.0;

/// Fits [`FeatureSpace`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureNormalizer;

impl FeatureNormalizer {
    /// Compute per-column mean and population standard deviation over
    /// `rows` and normalise every row.
    ///
    /// Fitting is pure: the same rows always produce the same space.
    ///
    /// # Errors
    /// Returns [`RankerError::EmptyCatalog`] when `rows` is empty.
    ///
    /// # Examples
    /// ```
    /// use nutrimatch_ranker::FeatureNormalizer;
    ///
    /// let rows = [[1.0; 8], [3.0; 8]];
    /// let space = FeatureNormalizer::fit(&rows).unwrap();
    /// assert_eq!(space.means(), &[2.0; 8]);
    /// assert_eq!(FeatureNormalizer::transform(&[3.0; 8], &space), [1.0; 8]);
    /// ```
    pub fn fit(rows: &[FeatureVector]) -> Result<FeatureSpace, RankerError> {
        if rows.is_empty() {
            return Err(RankerError::EmptyCatalog);
        }
        let means = column_means(rows);
        let scales = column_scales(rows, &means);
        let mut space = FeatureSpace {
            means,
            scales,
            rows: Vec::with_capacity(rows.len()),
        };
        space.rows = rows.iter().map(|row| space.transform(row)).collect();
        Ok(space)
    }

    /// Map `vector` into `space`.
    #[must_use]
    pub fn transform(vector: &FeatureVector, space: &FeatureSpace) -> FeatureVector {
        space.transform(vector)
    }
}

/// Fitted normalisation parameters and the normalised catalog matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpace {
    means: FeatureVector,
    scales: FeatureVector,
    rows: Vec<FeatureVector>,
}

impl FeatureSpace {
    /// Per-column means.
    #[must_use]
    pub const fn means(&self) -> &FeatureVector {
        &self.means
    }

    /// Per-column scales (standard deviations, guarded against zero).
    #[must_use]
    pub const fn scales(&self) -> &FeatureVector {
        &self.scales
    }

    /// Normalised catalog rows, in catalog order.
    #[must_use]
    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    /// Apply `(x - mean) / scale` to each column.
    #[expect(clippy::float_arithmetic, reason = "z-score normalisation")]
    #[must_use]
    pub fn transform(&self, vector: &FeatureVector) -> FeatureVector {
        let mut normalised = *vector;
        for ((value, mean), scale) in normalised
            .iter_mut()
            .zip(&self.means)
            .zip(&self.scales)
        {
            *value = (*value - mean) / scale;
        }
        normalised
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "column means divide sums by the row count"
)]
fn column_means(rows: &[FeatureVector]) -> FeatureVector {
    let count = rows.len() as f64;
    let mut sums = [0.0_f64; NUTRIENT_COUNT];
    for row in rows {
        for (sum, value) in sums.iter_mut().zip(row) {
            *sum += value;
        }
    }
    sums.map(|sum| sum / count)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "population variance averages squared deviations"
)]
fn column_scales(rows: &[FeatureVector], means: &FeatureVector) -> FeatureVector {
    let count = rows.len() as f64;
    let mut squares = [0.0_f64; NUTRIENT_COUNT];
    for row in rows {
        for ((square, value), mean) in squares.iter_mut().zip(row).zip(means) {
            let deviation = value - mean;
            *square += deviation * deviation;
        }
    }
    squares.map(|square| {
        let deviation = (square / count).sqrt();
        if deviation > VARIANCE_EPSILON {
            deviation
        } else {
            ZERO_VARIANCE_SCALE
        }
    })
}
