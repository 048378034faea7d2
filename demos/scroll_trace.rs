//! Drives a controller through a scroll sweep with debug tracing enabled.
//!
//! `RUST_LOG` is not consulted; the subscriber logs everything at DEBUG and above.

use landkit::{
    ControllerConfig, MemoryThemeStore, PageController, PageLayout, PinnedRegion, RevealTarget,
    Rect, Viewport,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let layout = PageLayout {
        sections: [("intro".to_string(), 900.0), ("products".to_string(), 3200.0)]
            .into_iter()
            .collect(),
        pinned: PinnedRegion::new(900.0, 2400.0)?,
        reveal: (0..3)
            .map(|i| RevealTarget {
                id: format!("card-{i}"),
                rect: Rect::new(
                    100.0 + 320.0 * f64::from(i),
                    3400.0,
                    400.0 + 320.0 * f64::from(i),
                    3800.0,
                ),
                delay_ms: 150 * i,
            })
            .collect(),
        counters: Vec::new(),
    };

    let mut ctrl = PageController::new(
        layout,
        ControllerConfig::default(),
        Viewport::new(0.0, 1440.0, 900.0)?,
        Box::new(MemoryThemeStore::default()),
        None,
    )?;

    for step in 0..=40 {
        ctrl.on_scroll(f64::from(step) * 100.0)?;
    }
    if let Some(y) = ctrl.on_anchor_click("#products") {
        ctrl.on_scroll(y)?;
    }

    println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
    Ok(())
}
