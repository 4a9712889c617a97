//! Data module - Embedded chart payload schema and parsing

mod bundle;

pub use bundle::{
    parse_bundle, parse_bundle_or_empty, BundleError, ChartData, ChartDataBundle, ColorSpec,
    Dataset, DatasetKey,
};
