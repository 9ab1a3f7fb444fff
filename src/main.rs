use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use cleanserve::config::{AppState, Config};
use cleanserve::logger;
use cleanserve::rewrite::export;
use cleanserve::server::{create_reusable_listener, start_server_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config file path may be given as the first argument (without extension)
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;

    logger::init(&cfg)?;

    // Build the Tokio runtime, honoring the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(&cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    // Regenerate the shared rewrite artifact for external call sites
    if let Some(ref path) = cfg.site.export_serve_json {
        export::write_serve_json(&state.table, path)?;
        logger::log_serve_json_exported(path, state.table.len());
    }

    logger::log_server_start(&addr, &cfg);

    // Connections are served on spawn_local tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(start_server_loop(listener, state, active_connections))
        .await
}
