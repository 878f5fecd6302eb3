use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

#[tokio::test(start_paused = true)]
async fn scheduled_action_runs_after_delay() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let task = schedule(Duration::from_millis(300), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(299)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    tokio::task::yield_now().await;
    assert!(task.is_finished());
}

#[tokio::test(start_paused = true)]
async fn cancelled_action_never_runs() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let task = schedule(Duration::from_millis(100), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    task.cancel();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn debouncer_fires_only_the_last_call_in_the_window() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut debouncer = Debouncer::new(Duration::from_millis(300));

    for text in ["a", "ab", "abc"] {
        let seen = seen.clone();
        debouncer.schedule(move || seen.lock().unwrap().push(text));
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(debouncer.is_pending());
    assert!(seen.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(*seen.lock().unwrap(), vec!["abc"]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn calls_separated_by_quiet_windows_each_fire() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(Duration::from_millis(50));

    for _ in 0..3 {
        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(80)).await;
    }
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_debouncer_cancels_pending_action() {
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}
