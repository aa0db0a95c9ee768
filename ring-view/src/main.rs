//! Application entry point for the ring diagram viewer.
//!
//! This binary installs a `tracing` subscriber, sets up eframe/egui and
//! delegates all interactive logic and rendering to [`Viewer`] from the
//! `viewer` module.

mod viewer;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Ring Diagram",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
