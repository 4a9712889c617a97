//! End-to-end coverage of page-load chart setup and flash dismissal.

use std::time::Duration;

use chartboard::charts::{dashboard_bindings, ChartKind, RecordingBackend};
use chartboard::dom::{Document, Element};
use chartboard::flash::{FlashDismisser, ManualClock};
use chartboard::{init_charts, init_flash_dismisser};

const CONTAINER_IDS: [&str; 5] = ["chartPie", "chartAge", "chartBMI", "chartGlu", "chartSmoke"];

const FULL_PAYLOAD: &str = r#"{
    "pie": {"labels": ["No stroke", "Stroke"], "datasets": [{"data": [950, 50]}]},
    "age": {"labels": ["<20", "20-29", "30-39"], "datasets": [{"label": "Rate", "data": [0.4, 1.1, 2.3]}]},
    "bmi": {"labels": ["Under", "Normal", "Over"], "datasets": [{"label": "Rate", "data": [2.0, 3.1, 4.8]}]},
    "glucose": {"labels": ["<80", "80-99", "100-124"], "datasets": [{"label": "Count", "data": [120, 260, 190]}]},
    "smoking": {"labels": ["never", "formerly", "smokes"], "datasets": [{"label": "Rate", "data": [3.2, 5.5, 6.1]}]}
}"#;

/// A page shaped like the server renders it: the payload element plus the
/// five chart containers.
fn dashboard_page(payload: &str) -> Document {
    let mut document = Document::new();
    document.push(
        Element::new()
            .with_id("charts-data")
            .with_data_attr("json", payload),
    );
    for id in CONTAINER_IDS {
        document.push(Element::new().with_id(id));
    }
    document
}

#[test]
fn full_bundle_creates_exactly_five_charts() {
    let document = dashboard_page(FULL_PAYLOAD);
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    assert_eq!(backend.created(), 5);
    for (instance, binding) in instances.iter().zip(dashboard_bindings()) {
        assert_eq!(instance.container_id, binding.container_id);
        assert_eq!(instance.kind, binding.kind);
        assert_eq!(instance.options, binding.options);
        assert!(instance.data.is_some(), "{} got no data", binding.container_id);
    }
}

#[test]
fn absent_data_element_is_a_silent_noop() {
    let mut document = Document::new();
    for id in CONTAINER_IDS {
        document.push(Element::new().with_id(id));
    }
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert!(instances.is_empty());
    assert_eq!(backend.created(), 0);
}

#[test]
fn empty_attribute_reads_as_empty_bundle() {
    let document = dashboard_page("");
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    assert!(instances.iter().all(|i| i.data.is_none()));
}

#[test]
fn missing_attribute_reads_as_empty_bundle() {
    let mut document = Document::new();
    document.push(Element::new().with_id("charts-data"));
    for id in CONTAINER_IDS {
        document.push(Element::new().with_id(id));
    }
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    assert!(instances.iter().all(|i| i.data.is_none()));
}

#[test]
fn malformed_payload_degrades_to_empty_bundle() {
    let document = dashboard_page("{definitely not json");
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    assert!(instances.iter().all(|i| i.data.is_none()));
}

#[test]
fn pie_only_payload_feeds_the_pie_chart_only() {
    let document =
        dashboard_page(r#"{"pie":{"labels":["A","B"],"datasets":[{"data":[1,2]}]}}"#);
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    let pie = &instances[0];
    assert_eq!(pie.kind, ChartKind::Pie);
    let data = pie.data.as_ref().unwrap();
    assert_eq!(data.labels, vec!["A", "B"]);
    assert_eq!(data.datasets[0].data, vec![1.0, 2.0]);
    assert!(instances[1..].iter().all(|i| i.data.is_none()));
}

#[test]
fn missing_container_is_skipped_with_the_rest_rendered() {
    let mut document = Document::new();
    document.push(
        Element::new()
            .with_id("charts-data")
            .with_data_attr("json", FULL_PAYLOAD),
    );
    for id in CONTAINER_IDS {
        if id != "chartBMI" {
            document.push(Element::new().with_id(id));
        }
    }
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 4);
    assert!(instances.iter().all(|i| i.container_id != "chartBMI"));
}

#[test]
fn charts_initialize_from_real_markup() {
    let html = format!(
        r#"<html><body>
             <div id="charts-data" data-json='{FULL_PAYLOAD}'></div>
             <canvas id="chartPie"></canvas>
             <canvas id="chartAge"></canvas>
             <canvas id="chartBMI"></canvas>
             <canvas id="chartGlu"></canvas>
             <canvas id="chartSmoke"></canvas>
             <div class="flash">Profile saved.</div>
           </body></html>"#
    );
    let document = Document::from_html(&html);
    let mut backend = RecordingBackend::new();

    let instances = init_charts(&document, &mut backend);

    assert_eq!(instances.len(), 5);
    assert!(instances[0].data.is_some());
}

#[test]
fn flash_banners_are_gone_after_the_default_delay() {
    let mut document = dashboard_page(FULL_PAYLOAD);
    for _ in 0..3 {
        document.push(Element::new().with_class("flash"));
    }
    let mut clock = ManualClock::new();

    let pending = init_flash_dismisser(&document, &clock).unwrap();
    assert_eq!(document.elements_by_class("flash").len(), 3);

    clock.advance(Duration::from_millis(3500));
    assert!(pending.fire_if_due(&mut document, &clock));
    assert!(document.elements_by_class("flash").is_empty());
    // The rest of the page is untouched.
    assert!(document.element_by_id("charts-data").is_some());
}

#[test]
fn no_flash_banners_means_nothing_scheduled() {
    let document = dashboard_page(FULL_PAYLOAD);
    let clock = ManualClock::new();
    assert!(init_flash_dismisser(&document, &clock).is_none());
}

#[test]
fn chart_setup_and_flash_dismissal_are_independent() {
    let mut document = Document::new();
    document.push(Element::new().with_class("flash"));
    let mut backend = RecordingBackend::new();
    let mut clock = ManualClock::new();

    // No charts-data element: charts are a no-op, the dismisser still runs.
    assert!(init_charts(&document, &mut backend).is_empty());
    let pending = init_flash_dismisser(&document, &clock).unwrap();
    clock.advance(FlashDismisser::new().delay());
    assert!(pending.fire_if_due(&mut document, &clock));
    assert!(document.is_empty());
}
