//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting colorgrid demo");

    let palette = match std::env::args().nth(1) {
        Some(path) => colorgrid_app::PaletteConfig::load(&path),
        None => Ok(colorgrid_app::PaletteConfig::default()),
    }
    .and_then(|config| config.validate());

    let palette = match palette {
        Ok(palette) => palette,
        Err(e) => {
            log::error!("Invalid palette config: {}", e);
            std::process::exit(2);
        }
    };

    let app = colorgrid_app::App::new(colorgrid_app::AppConfig::default(), palette);
    if let Err(e) = app.run() {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
