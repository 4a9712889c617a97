//! Chartboard - Dashboard Chart Bootstrap & Flash Notice Auto-Dismissal
//!
//! Demo binary: loads a server-rendered dashboard page, renders its five
//! charts to PNG files, and runs the flash banner dismissal on the wall
//! clock.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chartboard::charts::StaticChartRenderer;
use chartboard::flash::{FlashDismisser, SystemClock};
use chartboard::{init_charts, Document};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let Some(page) = args.next() else {
        bail!("usage: chartboard <page.html> [out-dir]");
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "charts".to_string()));

    let html = fs::read_to_string(&page).with_context(|| format!("failed to read {page}"))?;
    let mut document = Document::from_html(&html);

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut renderer = StaticChartRenderer::new();
    let rendered = init_charts(&document, &mut renderer);
    if rendered.is_empty() {
        println!("no charts rendered (does the page have a #charts-data element?)");
    }
    for chart in &rendered {
        let path = out_dir.join(format!("{}.png", chart.container_id));
        chart.save_png(&path)?;
        println!("rendered {}", path.display());
    }

    // Same timing as the page script: banners disappear after 3.5 s.
    let clock = SystemClock;
    let dismisser = FlashDismisser::new();
    if let Some(pending) = dismisser.arm(&document, &clock) {
        println!(
            "dismissing {} flash banner(s) in {:?}",
            pending.target_count(),
            dismisser.delay()
        );
        pending.run(&mut document, &clock);
        println!("flash banners dismissed");
    }

    Ok(())
}
