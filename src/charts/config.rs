//! Chart Configuration Module
//! The fixed set of dashboard charts: which container each chart binds to,
//! which payload dataset feeds it, and its kind/legend/axis options.

use crate::data::DatasetKey;

/// Chart widget kind understood by the backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Line,
    Bar,
}

/// Where the legend sits, if shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    Bottom,
    #[default]
    Hidden,
}

/// Value-axis options, mirroring the charting capability's scale schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisOptions {
    /// Soft lower bound: the axis starts at or below this value.
    pub suggested_min: Option<f64>,
    /// Force the axis to include zero.
    pub begin_at_zero: bool,
    /// Axis title, shown when set.
    pub title: Option<&'static str>,
}

/// Per-chart options: responsiveness, legend placement, value-axis setup.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Charts resize with their container.
    pub responsive: bool,
    pub legend: LegendPosition,
    /// `None` for charts without a value axis (pie).
    pub y_axis: Option<AxisOptions>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            legend: LegendPosition::Hidden,
            y_axis: None,
        }
    }
}

/// One row of the dashboard: container element, dataset key, kind, options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBinding {
    pub container_id: &'static str,
    pub dataset_key: DatasetKey,
    pub kind: ChartKind,
    pub options: ChartOptions,
}

/// Rate axis shared by the age, BMI and smoking charts.
fn rate_axis() -> AxisOptions {
    AxisOptions {
        suggested_min: Some(0.0),
        begin_at_zero: false,
        title: Some("Rate (%)"),
    }
}

/// The five dashboard charts, in page order.
pub fn dashboard_bindings() -> [ChartBinding; 5] {
    [
        ChartBinding {
            container_id: "chartPie",
            dataset_key: DatasetKey::Pie,
            kind: ChartKind::Pie,
            options: ChartOptions {
                legend: LegendPosition::Bottom,
                y_axis: None,
                ..ChartOptions::default()
            },
        },
        ChartBinding {
            container_id: "chartAge",
            dataset_key: DatasetKey::Age,
            kind: ChartKind::Line,
            options: ChartOptions {
                legend: LegendPosition::Hidden,
                y_axis: Some(rate_axis()),
                ..ChartOptions::default()
            },
        },
        ChartBinding {
            container_id: "chartBMI",
            dataset_key: DatasetKey::Bmi,
            kind: ChartKind::Line,
            options: ChartOptions {
                legend: LegendPosition::Hidden,
                y_axis: Some(rate_axis()),
                ..ChartOptions::default()
            },
        },
        ChartBinding {
            container_id: "chartGlu",
            dataset_key: DatasetKey::Glucose,
            kind: ChartKind::Bar,
            options: ChartOptions {
                legend: LegendPosition::Bottom,
                y_axis: Some(AxisOptions {
                    suggested_min: None,
                    begin_at_zero: true,
                    title: Some("Count"),
                }),
                ..ChartOptions::default()
            },
        },
        ChartBinding {
            container_id: "chartSmoke",
            dataset_key: DatasetKey::Smoking,
            kind: ChartKind::Bar,
            options: ChartOptions {
                legend: LegendPosition::Hidden,
                y_axis: Some(rate_axis()),
                ..ChartOptions::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_binds_five_containers_in_page_order() {
        let bindings = dashboard_bindings();
        let ids: Vec<&str> = bindings.iter().map(|b| b.container_id).collect();
        assert_eq!(
            ids,
            vec!["chartPie", "chartAge", "chartBMI", "chartGlu", "chartSmoke"]
        );
        let keys: Vec<&str> = bindings.iter().map(|b| b.dataset_key.as_str()).collect();
        assert_eq!(keys, vec!["pie", "age", "bmi", "glucose", "smoking"]);
    }

    #[test]
    fn kinds_and_legends_match_the_dashboard() {
        let bindings = dashboard_bindings();
        assert_eq!(bindings[0].kind, ChartKind::Pie);
        assert_eq!(bindings[0].options.legend, LegendPosition::Bottom);
        assert_eq!(bindings[1].kind, ChartKind::Line);
        assert_eq!(bindings[1].options.legend, LegendPosition::Hidden);
        assert_eq!(bindings[2].kind, ChartKind::Line);
        assert_eq!(bindings[3].kind, ChartKind::Bar);
        assert_eq!(bindings[3].options.legend, LegendPosition::Bottom);
        assert_eq!(bindings[4].kind, ChartKind::Bar);
        assert_eq!(bindings[4].options.legend, LegendPosition::Hidden);
        assert!(bindings.iter().all(|b| b.options.responsive));
    }

    #[test]
    fn axis_options_match_the_dashboard() {
        let bindings = dashboard_bindings();
        assert!(bindings[0].options.y_axis.is_none());

        for rate_chart in [&bindings[1], &bindings[2], &bindings[4]] {
            let axis = rate_chart.options.y_axis.as_ref().unwrap();
            assert_eq!(axis.suggested_min, Some(0.0));
            assert!(!axis.begin_at_zero);
            assert_eq!(axis.title, Some("Rate (%)"));
        }

        let glucose = bindings[3].options.y_axis.as_ref().unwrap();
        assert!(glucose.begin_at_zero);
        assert_eq!(glucose.suggested_min, None);
        assert_eq!(glucose.title, Some("Count"));
    }
}
