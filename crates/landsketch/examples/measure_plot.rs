//! Sketch a plot headlessly and print the measured area.
//!
//! Usage:
//!   cargo run -p landsketch --example measure_plot
//!
//! Drives a `PlotWidget` over a `RecordingSurface` with four corner clicks
//! plus a closing click near the start, then prints the annotation label and
//! the raw square meters.

use landsketch::api::{
    FixedPosition, LatLng, PlotWidget, RecordingSurface, SketchPhase,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut widget = PlotWidget::new(RecordingSurface::new());
    widget.init(&mut FixedPosition(LatLng::new(13.7563, 100.5018)));

    // A ~220 m × ~220 m plot near the center.
    let corners = [
        LatLng::new(13.7550, 100.5000),
        LatLng::new(13.7550, 100.5020),
        LatLng::new(13.7570, 100.5020),
        LatLng::new(13.7570, 100.5000),
    ];
    for p in corners {
        widget.handle_click(p);
    }
    // Click back on the start to close the ring.
    widget.handle_click(LatLng::new(13.7550, 100.5000));
    assert_eq!(widget.phase(), SketchPhase::Closed);

    let surface = widget.surface();
    let (_, _, label) = &surface.annotations[0];
    println!("{label}");
    println!("({:.1} m² raw)", widget.area_square_meters());
}
