/*!
 * Scheduler Demo - Main Entry Point
 *
 * Seeds a fixed set of processes and drives the scheduling loop,
 * logging per-slice progress and printing a final stats snapshot.
 */

use esched::{RecordingObserver, Scheduler, SimulatedExecutor};
use log::info;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    info!("Scheduler demo starting...");

    let observer = Arc::new(RecordingObserver::new());
    let scheduler = Scheduler::new(10)?.with_observer(observer.clone());

    scheduler.add_process(1, 15, 2);
    scheduler.add_process(2, 10, 1);
    scheduler.add_process(3, 20, 3);

    // 50ms per slice keeps the demo watchable without dragging
    let executor = SimulatedExecutor::with_delay(Duration::from_millis(50));
    scheduler.run(&executor);

    for event in observer.events() {
        if event.completed {
            info!("Process {} completed!", event.pid);
        }
    }

    println!("{}", serde_json::to_string_pretty(&scheduler.stats())?);
    Ok(())
}
