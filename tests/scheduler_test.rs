use aurasim::domain::TimeMs;
use aurasim::engine::{FixedClock, MarketParams, MarketSimulator};
use aurasim::orchestration::{MarketController, Scheduler, SharedController, TickIntervals};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::Duration;

fn shared_controller() -> SharedController<ChaCha8Rng> {
    let sim = MarketSimulator::new(
        MarketParams::default(),
        ChaCha8Rng::seed_from_u64(42),
        Arc::new(FixedClock::new(TimeMs::new(0))),
    );
    MarketController::new(sim, 800).into_shared()
}

async fn counts(controller: &SharedController<ChaCha8Rng>) -> (usize, usize, usize) {
    let controller = controller.lock().await;
    let sim = controller.simulator();
    (
        sim.price_history().len(),
        sim.transactions().len(),
        sim.blocks().len(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_timers_fire_on_schedule() {
    let controller = shared_controller();
    let mut scheduler = Scheduler::new(controller.clone(), TickIntervals::default());
    scheduler.start();
    assert!(scheduler.is_running());

    // Price at 0s, 5s, 10s, 15s; transaction at 10s; block at 15s.
    tokio::time::sleep(Duration::from_millis(15_500)).await;
    assert_eq!(counts(&controller).await, (4, 1, 1));

    scheduler.stop();
    assert!(!scheduler.is_running());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(counts(&controller).await, (4, 1, 1));
}

#[tokio::test(start_paused = true)]
async fn test_start_is_idempotent() {
    let controller = shared_controller();
    let mut scheduler = Scheduler::new(controller.clone(), TickIntervals::default());
    scheduler.start();
    scheduler.start();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(counts(&controller).await.0, 1);
}

#[tokio::test(start_paused = true)]
async fn test_history_stays_bounded_over_time() {
    let controller = shared_controller();
    let mut scheduler = Scheduler::new(controller.clone(), TickIntervals::default());
    scheduler.start();

    tokio::time::sleep(Duration::from_secs(5 * 30)).await;
    let (history, _, blocks) = counts(&controller).await;
    assert_eq!(history, 20);
    assert_eq!(blocks, 5);
    scheduler.stop();
}
