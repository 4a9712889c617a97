//! Bootstrap Module
//! Page-load entry points: chart instantiation from the embedded payload,
//! and flash banner dismissal scheduling.

use tracing::{debug, warn};

use crate::charts::{dashboard_bindings, ChartBackend};
use crate::data::parse_bundle_or_empty;
use crate::dom::Document;
use crate::flash::{Clock, FlashDismisser, PendingDismissal};

/// Id of the element carrying the embedded chart payload.
pub const CHARTS_DATA_ID: &str = "charts-data";

/// Data attribute holding the JSON text (`data-json` in markup).
pub const JSON_DATA_ATTR: &str = "json";

/// Instantiate the five dashboard charts from the page's embedded payload.
///
/// Degrades rather than fails: an absent `charts-data` element is a silent
/// no-op, a malformed payload falls back to an empty bundle, and a missing
/// chart container is logged and skipped. Datasets absent from the bundle
/// reach the backend as `None`; the backend owns its empty state.
///
/// Call once per page load. Re-invocation creates duplicate instances bound
/// to the same containers.
pub fn init_charts<B: ChartBackend>(document: &Document, backend: &mut B) -> Vec<B::Instance> {
    let Some(data_element) = document.element_by_id(CHARTS_DATA_ID) else {
        debug!("no #{CHARTS_DATA_ID} element, skipping chart setup");
        return Vec::new();
    };
    let text = match document.data_attr(data_element, JSON_DATA_ATTR) {
        Some(text) if !text.is_empty() => text,
        _ => "{}",
    };
    let bundle = parse_bundle_or_empty(text);

    let mut instances = Vec::new();
    for binding in dashboard_bindings() {
        if document.element_by_id(binding.container_id).is_none() {
            warn!(
                "chart container '{}' missing, skipping {:?} chart",
                binding.container_id, binding.kind
            );
            continue;
        }
        match backend.create(&binding, bundle.get(binding.dataset_key)) {
            Ok(instance) => instances.push(instance),
            Err(err) => warn!("chart '{}' not rendered: {err}", binding.container_id),
        }
    }
    instances
}

/// Schedule removal of the page's flash banners after the default delay.
///
/// Returns `None` when no banner is present (nothing is scheduled). The
/// returned [`PendingDismissal`] is driven by the caller's event loop via
/// [`PendingDismissal::fire_if_due`].
pub fn init_flash_dismisser(
    document: &Document,
    clock: &impl Clock,
) -> Option<PendingDismissal> {
    FlashDismisser::new().arm(document, clock)
}
