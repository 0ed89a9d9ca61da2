/// Wirecube - rotating ASCII wireframe cube
///
/// Renders a rotating cube in the terminal until interrupted (Ctrl-C).
/// Takes no arguments; logging is controlled through RUST_LOG.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wirecube_terminal::App;

fn main() {
    env_logger::init();
    log::info!("wirecube v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        eprintln!("failed to install signal handler: {err}");
        process::exit(1);
    }

    let mut app = match App::new() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to initialize terminal surface: {err}");
            process::exit(1);
        }
    };

    match app.run(&shutdown) {
        Ok(stats) => {
            // Restore the terminal before reporting the final state
            drop(app);
            log::info!(
                "exited after {} frames; terminal {}x{}, center ({}, {})",
                stats.frames,
                stats.width,
                stats.height,
                stats.center.0,
                stats.center.1
            );
        }
        Err(err) => {
            drop(app);
            eprintln!("render loop failed: {err}");
            process::exit(1);
        }
    }
}
