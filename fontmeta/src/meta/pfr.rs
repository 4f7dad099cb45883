//! Portable Font Resource metrics.

use crate::{engine::Engine, error::Error, error::Result, Face, Fixed};

/// A two dimensional vector in font units.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

/// Outline and metrics resolutions of a PFR font.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct PfrMetrics {
    pub outline_resolution: u32,
    pub metrics_resolution: u32,
    pub metrics_x_scale: Fixed,
    pub metrics_y_scale: Fixed,
}

/// Failure to read PFR metrics.
///
/// The engine still reports usable metrics for non PFR faces (the units per
/// em and the scale of the active size), carried in `fallback`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("{error}")]
pub struct PfrMetricsError {
    pub error: Error,
    pub fallback: PfrMetrics,
}

impl From<PfrMetricsError> for Error {
    fn from(err: PfrMetricsError) -> Self {
        err.error
    }
}

impl<E: Engine> Face<E> {
    /// Returns the metrics of a PFR font.
    pub fn pfr_metrics(&self) -> core::result::Result<PfrMetrics, PfrMetricsError> {
        let face = self.handle().map_err(|error| PfrMetricsError {
            error,
            fallback: PfrMetrics::default(),
        })?;
        let (metrics, result) = self.engine().pfr_metrics(face);
        match result {
            Ok(()) => Ok(metrics),
            Err(error) => Err(PfrMetricsError {
                error,
                fallback: metrics,
            }),
        }
    }

    /// Returns the kerning adjustment of a glyph pair, in metrics resolution
    /// units.
    pub fn pfr_kerning(&self, left: u32, right: u32) -> Result<Vector> {
        let face = self.handle()?;
        self.engine().pfr_kerning(face, left, right)
    }

    /// Returns the advance of a glyph, in metrics resolution units.
    pub fn pfr_advance(&self, glyph_index: u32) -> Result<i64> {
        let face = self.handle()?;
        self.engine().pfr_advance(face, glyph_index)
    }
}
