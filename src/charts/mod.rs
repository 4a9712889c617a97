//! Charts module - Chart configuration, backend seam, and static rendering

mod backend;
mod config;
mod renderer;

pub use backend::{ChartBackend, RecordedChart, RecordingBackend, RenderError};
pub use config::{
    dashboard_bindings, AxisOptions, ChartBinding, ChartKind, ChartOptions, LegendPosition,
};
pub use renderer::{RenderedChart, StaticChartRenderer};
