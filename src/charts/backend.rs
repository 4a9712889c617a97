//! Chart Backend Module
//! Seam for the charting capability: anything that can turn a binding and
//! a dataset into a live chart instance.

use thiserror::Error;

use super::config::{ChartBinding, ChartKind, ChartOptions};
use crate::data::ChartData;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart '{container}': {message}")]
    Draw { container: String, message: String },
    #[error("Failed to encode chart '{container}': {source}")]
    Encode {
        container: String,
        #[source]
        source: image::ImageError,
    },
}

/// The charting capability consumed by [`crate::bootstrap::init_charts`].
///
/// `data` is `None` when the payload did not carry the bound dataset;
/// backends own their empty-state rendering in that case.
pub trait ChartBackend {
    /// Opaque handle to one instantiated chart. Never explicitly
    /// destroyed; it lives as long as the caller keeps it.
    type Instance;

    fn create(
        &mut self,
        binding: &ChartBinding,
        data: Option<&ChartData>,
    ) -> Result<Self::Instance, RenderError>;
}

/// One chart instantiation as seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedChart {
    pub container_id: String,
    pub kind: ChartKind,
    pub options: ChartOptions,
    pub data: Option<ChartData>,
}

/// Headless backend that records every instantiation instead of drawing.
/// Used by the test suites and for dry runs without a rendering stack.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    created: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of charts created through this backend.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl ChartBackend for RecordingBackend {
    type Instance = RecordedChart;

    fn create(
        &mut self,
        binding: &ChartBinding,
        data: Option<&ChartData>,
    ) -> Result<RecordedChart, RenderError> {
        self.created += 1;
        Ok(RecordedChart {
            container_id: binding.container_id.to_string(),
            kind: binding.kind,
            options: binding.options.clone(),
            data: data.cloned(),
        })
    }
}
