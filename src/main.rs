//! Bookmarker: interactive console bookmark manager.
//!
//! Settings come from `$BOOKMARKER_CONFIG` or the platform config directory;
//! bookmarks are stored under `$BOOKMARKER_DATA_DIR` or the platform data directory.

use bookmarker::app::App;
use bookmarker::{telemetry, ui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config_path = std::env::var("BOOKMARKER_CONFIG").ok();
    let mut app = App::new(config_path)?;

    println!("Bookmarker v{}", env!("CARGO_PKG_VERSION"));
    ui::console::run(&mut app)
}
