//! Chartboard - Dashboard Chart Bootstrap & Flash Notice Auto-Dismissal
//!
//! Reimplements the page-load behavior of a server-rendered health dashboard:
//! five chart widgets instantiated from a JSON payload embedded in the page,
//! and flash notification banners removed after a short visible delay.
//!
//! Both behaviors are explicit entry points taking an injected [`Document`]
//! (and, for the dismisser, a [`flash::Clock`]), so they can be driven by the
//! demo binary against a real page or by tests against a fake one.

pub mod bootstrap;
pub mod charts;
pub mod data;
pub mod dom;
pub mod flash;

pub use bootstrap::{init_charts, init_flash_dismisser, CHARTS_DATA_ID, JSON_DATA_ATTR};
pub use charts::{ChartBackend, ChartBinding, ChartKind, ChartOptions, RecordingBackend};
pub use data::{ChartData, ChartDataBundle, Dataset, DatasetKey};
pub use dom::{Document, Element, ElementId};
pub use flash::{Clock, FlashDismisser, ManualClock, PendingDismissal, SystemClock};
