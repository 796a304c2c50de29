use aurasim::engine::SystemClock;
use aurasim::{
    api, config::Config, ChatRelay, HttpChatBackend, MarketController, MarketSimulator, Scheduler,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Per-target RUST_LOG directives layer on top of the INFO default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // SIM_SEED replays the same price walk, transactions and blocks.
    let rng = match config.sim_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let sim = MarketSimulator::new(config.market_params(), rng, Arc::new(SystemClock));
    let controller = MarketController::new(sim, config.canvas_width).into_shared();

    let mut scheduler = Scheduler::new(controller.clone(), config.tick_intervals());
    scheduler.start();

    let relay = ChatRelay::new(Arc::new(HttpChatBackend::new(config.chat_api_url.clone())));
    let app = api::create_router(api::AppState::new(controller, relay));

    // Local only: the page and the assistant run on the same machine.
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        scheduler.stop();
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
