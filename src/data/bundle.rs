//! Chart Payload Module
//! Schema for the JSON bundle the server embeds in the page, and its
//! fallible parse. The shape mirrors the charting capability's dataset
//! contract (labels plus one or more series, optional per-series styling);
//! styling is carried through untouched for the backend to interpret.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Malformed chart payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// A styling color entry: either one color applied to the whole series or
/// one color per data point, as the wire schema allows both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    PerPoint(Vec<String>),
}

impl ColorSpec {
    /// Color for data point `index`; a single color applies to every index.
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self {
            ColorSpec::One(color) => Some(color),
            ColorSpec::PerPoint(colors) => colors.get(index).map(String::as_str),
        }
    }
}

/// One series of a chart: numeric values plus optional styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// Labels plus one or more series, the charting capability's data shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// The five named datasets the dashboard page embeds.
///
/// Absent keys are not an error; the chart bound to a missing key receives
/// no data and the backend renders its own empty state. Unknown keys in the
/// payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartDataBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pie: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glucose: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<ChartData>,
}

/// Keys of [`ChartDataBundle`], in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Pie,
    Age,
    Bmi,
    Glucose,
    Smoking,
}

impl DatasetKey {
    /// Key name as it appears in the JSON payload.
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKey::Pie => "pie",
            DatasetKey::Age => "age",
            DatasetKey::Bmi => "bmi",
            DatasetKey::Glucose => "glucose",
            DatasetKey::Smoking => "smoking",
        }
    }
}

impl ChartDataBundle {
    /// Dataset for `key`, if the payload carried one.
    pub fn get(&self, key: DatasetKey) -> Option<&ChartData> {
        match key {
            DatasetKey::Pie => self.pie.as_ref(),
            DatasetKey::Age => self.age.as_ref(),
            DatasetKey::Bmi => self.bmi.as_ref(),
            DatasetKey::Glucose => self.glucose.as_ref(),
            DatasetKey::Smoking => self.smoking.as_ref(),
        }
    }

    /// True when the payload carried no dataset at all.
    pub fn is_empty(&self) -> bool {
        self.pie.is_none()
            && self.age.is_none()
            && self.bmi.is_none()
            && self.glucose.is_none()
            && self.smoking.is_none()
    }
}

/// Strict parse of the embedded payload text.
pub fn parse_bundle(text: &str) -> Result<ChartDataBundle, BundleError> {
    Ok(serde_json::from_str(text)?)
}

/// Hardened parse: empty input reads as `{}`, and malformed input logs a
/// warning and yields the empty bundle instead of failing the page.
pub fn parse_bundle_or_empty(text: &str) -> ChartDataBundle {
    let text = if text.trim().is_empty() { "{}" } else { text };
    match parse_bundle(text) {
        Ok(bundle) => bundle,
        Err(err) => {
            tracing::warn!("chart payload unparsable, rendering without data: {err}");
            ChartDataBundle::default()
        }
    }
}
