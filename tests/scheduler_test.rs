/*!
 * Scheduler Tests
 * End-to-end coverage of the dynamic-quantum scheduling loop
 */

use esched::{NoopExecutor, RecordingObserver, Scheduler, SchedulerError, SliceEvent};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn scheduler_with_observer(base_quantum: i64) -> (Scheduler, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::new());
    let scheduler = Scheduler::new(base_quantum)
        .unwrap()
        .with_observer(observer.clone());
    (scheduler, observer)
}

#[test]
fn test_worked_scenario() {
    let (scheduler, observer) = scheduler_with_observer(10);

    scheduler.add_process(1, 15, 2);
    scheduler.add_process(2, 10, 1);
    scheduler.add_process(3, 20, 3);

    scheduler.run(&NoopExecutor);
    assert!(scheduler.is_empty());

    let events = observer.events();
    assert_eq!(
        events,
        vec![
            SliceEvent { pid: 2, quantum: 8, remaining_after: 2, completed: false },
            SliceEvent { pid: 1, quantum: 6, remaining_after: 9, completed: false },
            SliceEvent { pid: 3, quantum: 4, remaining_after: 16, completed: false },
            SliceEvent { pid: 2, quantum: 2, remaining_after: 0, completed: true },
            SliceEvent { pid: 1, quantum: 6, remaining_after: 3, completed: false },
            SliceEvent { pid: 3, quantum: 4, remaining_after: 12, completed: false },
            SliceEvent { pid: 1, quantum: 3, remaining_after: 0, completed: true },
            SliceEvent { pid: 3, quantum: 4, remaining_after: 8, completed: false },
            SliceEvent { pid: 3, quantum: 4, remaining_after: 4, completed: false },
            SliceEvent { pid: 3, quantum: 4, remaining_after: 0, completed: true },
        ]
    );

    // Per-process quanta sum to the original bursts
    for (pid, burst) in [(1, 15), (2, 10), (3, 20)] {
        let total: i64 = events
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.quantum)
            .sum();
        assert_eq!(total, burst);
    }

    let stats = scheduler.stats();
    assert_eq!(stats.slices, 10);
    assert_eq!(stats.work_executed, 45);
    assert_eq!(stats.processes_added, 3);
    assert_eq!(stats.processes_completed, 3);
    assert_eq!(stats.active_processes, 0);
    assert_eq!(stats.base_quantum, 10);
}

#[test]
fn test_highest_priority_selected_first() {
    let (scheduler, observer) = scheduler_with_observer(10);

    scheduler.add_process(1, 5, 7);
    scheduler.add_process(2, 5, -2);
    scheduler.add_process(3, 5, 3);

    scheduler.run(&NoopExecutor);

    // Smallest priority value runs first
    assert_eq!(observer.events()[0].pid, 2);
}

#[test]
fn test_fifo_among_equal_priorities() {
    let (scheduler, observer) = scheduler_with_observer(5);

    // All finish in one slice, so the event order is the pick order
    scheduler.add_process(1, 5, 0);
    scheduler.add_process(2, 5, 0);
    scheduler.add_process(3, 5, 0);

    scheduler.run(&NoopExecutor);

    let order: Vec<_> = observer.events().iter().map(|e| e.pid).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_requeue_goes_behind_waiting_equals() {
    let (scheduler, observer) = scheduler_with_observer(5);

    scheduler.add_process(1, 8, 0);
    scheduler.add_process(2, 5, 0);

    scheduler.run(&NoopExecutor);

    // P1's leftover slice runs after P2, not immediately again
    let order: Vec<_> = observer.events().iter().map(|e| e.pid).collect();
    assert_eq!(order, vec![1, 2, 1]);
}

#[test]
fn test_degenerate_single_slice() {
    let (scheduler, observer) = scheduler_with_observer(1);

    scheduler.add_process(1, 1, 0);
    scheduler.run(&NoopExecutor);

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].quantum, 1);
    assert!(events[0].completed);
}

#[test]
fn test_low_priority_still_makes_progress() {
    let (scheduler, observer) = scheduler_with_observer(4);

    // base - 2*priority is negative; the clamp keeps slices at 1
    scheduler.add_process(1, 3, 9);
    scheduler.run(&NoopExecutor);

    let events = observer.events();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.quantum == 1));
    assert!(events[2].completed);
}

#[test]
fn test_negative_priority_capped_by_remaining() {
    let (scheduler, observer) = scheduler_with_observer(4);

    // base - 2*(-3) = 10, but only 7 units of work exist
    scheduler.add_process(1, 7, -3);
    scheduler.run(&NoopExecutor);

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].quantum, 7);
    assert!(events[0].completed);
}

#[test]
fn test_nonpositive_burst_retires_after_one_slice() {
    let (scheduler, observer) = scheduler_with_observer(10);

    scheduler.add_process(1, 0, 0);
    scheduler.run(&NoopExecutor);

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].quantum, 1);
    assert_eq!(events[0].remaining_after, -1);
    assert!(events[0].completed);
}

#[test]
fn test_invalid_base_quantum_fails_construction() {
    for bad in [0, -1, -100] {
        match Scheduler::new(bad) {
            Err(SchedulerError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("positive"), "unexpected message: {msg}");
            }
            Ok(_) => panic!("expected InvalidConfiguration for base quantum {bad}"),
        }
    }
}

#[test]
fn test_run_on_empty_queue() {
    let scheduler = Scheduler::new(10).unwrap();
    scheduler.run(&NoopExecutor);

    let stats = scheduler.stats();
    assert_eq!(stats.slices, 0);
    assert_eq!(stats.processes_added, 0);
}

#[test]
fn test_stats_snapshot_is_serializable() {
    let scheduler = Scheduler::new(10).unwrap();
    scheduler.add_process(1, 5, 0);
    scheduler.run(&NoopExecutor);

    let json = serde_json::to_string(&scheduler.stats()).unwrap();
    assert!(json.contains("\"slices\":1"));
}
