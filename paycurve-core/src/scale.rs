//! Value-axis mapping and hover lookup for renderers.

use serde::{Deserialize, Serialize};

use crate::sampling::DensitySample;

/// Linear mapping between salary values and a unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span of the first to the last sample. None for an empty curve.
    pub fn from_samples(samples: &[DensitySample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        Some(Self::new(first.value, last.value))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` in [0, 1] (unclamped outside the range).
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        (value - self.min) / span
    }

    pub fn value_at(&self, fraction: f64) -> f64 {
        self.min + fraction * self.span()
    }

    /// Cell index (0..cells) that `value` falls into, or None outside.
    pub fn cell_of(&self, value: f64, cells: u16) -> Option<u16> {
        if cells == 0 {
            return None;
        }
        let frac = self.fraction(value);
        if !(0.0..=1.0).contains(&frac) {
            return None;
        }
        let cell = (frac * f64::from(cells - 1)).round() as u16;
        Some(cell.min(cells - 1))
    }

    /// Value at the center of cell `cell` out of `cells`.
    pub fn value_at_cell(&self, cell: u16, cells: u16) -> f64 {
        if cells <= 1 {
            return self.min;
        }
        self.value_at(f64::from(cell) / f64::from(cells - 1))
    }
}

/// Sample with minimal |sample.value - value|. Ties go to the earlier sample.
pub fn nearest_sample(samples: &[DensitySample], value: f64) -> Option<&DensitySample> {
    samples.iter().reduce(|best, s| {
        if (s.value - value).abs() < (best.value - value).abs() {
            s
        } else {
            best
        }
    })
}
