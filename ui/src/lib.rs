//! Assignment Board UI - student dashboard rendered with egui

pub mod app;
pub mod config;
pub mod core;
pub mod features;

pub use app::AssignmentBoardApp;
pub use config::AppConfig;

use tracing_subscriber::EnvFilter;

/// Set up tracing. An explicit filter wins over `RUST_LOG`; the fallback is `info`.
pub fn init_logging(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn run(config: AppConfig, log_filter: Option<&str>) -> anyhow::Result<()> {
    use eframe::NativeOptions;

    init_logging(log_filter);
    tracing::info!(course = %config.course_title, "Starting assignment board");

    let (width, height) = config.window.initial_size;
    let (min_width, min_height) = config.window.min_size;
    let title = config.window.title.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([width, height])
            .with_min_inner_size([min_width, min_height])
            .with_icon(get_icon()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(AssignmentBoardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}

fn get_icon() -> egui::IconData {
    // A sheet of paper with a folded corner
    let size = 32usize;
    let mut pixels = vec![0u8; size * size * 4];
    let (left, right, top, bottom, fold) = (6, 26, 3, 29, 7);

    for y in top..bottom {
        for x in left..right {
            let idx = (y * size + x) * 4;
            let in_fold = x >= right - fold && y < top + fold;
            let on_fold_edge = in_fold && (x - (right - fold)) == (y - top);
            if in_fold && !on_fold_edge && (x - (right - fold)) > (y - top) {
                continue;
            }

            let ruled = y > top + 9 && y % 4 == 0 && x > left + 2 && x < right - 3;
            let shade = if on_fold_edge || ruled { 120 } else { 245 };
            pixels[idx] = shade;
            pixels[idx + 1] = shade;
            pixels[idx + 2] = shade.saturating_add(10);
            pixels[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba: pixels,
        width: size as u32,
        height: size as u32,
    }
}
