//! Integration tests for the bounded history tracker
//!
//! Covers:
//! - Extrema and ages against a brute-force model
//! - Eviction of the current extremum
//! - Feeding averaged measurements into the tracker from a deferred subscriber

mod common;

use std::cell::RefCell;

use gauge_core::{HistoryTracker, SampleAverager, Subscriber};

use common::{model_extrema, model_window};

#[test]
fn test_duplicate_max_scenario() {
    let mut history: HistoryTracker<u16, 3> = HistoryTracker::new();
    for value in [5, 9, 9, 2] {
        history.insert(value);
    }

    assert_eq!(history.snapshot().as_slice(), &[9, 9, 2]);
    assert_eq!(history.max(), Some(9));
    assert_eq!(history.max_age(), Some(1));
}

#[test]
fn test_sawtooth_matches_model() {
    let mut history: HistoryTracker<u16, 7> = HistoryTracker::new();
    let mut inserted = Vec::new();

    for i in 0..100u16 {
        let value = (i % 11) * 90 + (i % 3);
        history.insert(value);
        inserted.push(value);

        let held = model_window(&inserted, 7);
        let (max, max_age, min, min_age) = model_extrema(held).unwrap();

        assert_eq!(history.snapshot().as_slice(), held);
        assert_eq!(history.max(), Some(max), "max after {i}");
        assert_eq!(history.max_age(), Some(max_age), "max age after {i}");
        assert_eq!(history.min(), Some(min), "min after {i}");
        assert_eq!(history.min_age(), Some(min_age), "min age after {i}");
    }
}

#[test]
fn test_monotonic_input_keeps_extremum_at_ends() {
    let mut rising: HistoryTracker<u16, 4> = HistoryTracker::new();
    let mut falling: HistoryTracker<u16, 4> = HistoryTracker::new();

    for step in 0..20u16 {
        rising.insert(step);
        falling.insert(1000 - step);

        let oldest = rising.len() - 1;
        assert_eq!(rising.max_age(), Some(0));
        assert_eq!(rising.min_age(), Some(oldest));
        assert_eq!(falling.min_age(), Some(0));
        assert_eq!(falling.max_age(), Some(oldest));
    }

    assert_eq!(rising.min(), Some(16));
    assert_eq!(falling.max(), Some(984));
}

#[test]
fn test_constant_input_always_age_zero() {
    let mut history: HistoryTracker<u16, 5> = HistoryTracker::new();

    for _ in 0..12 {
        history.insert(512);
        assert_eq!(history.max_age(), Some(0));
        assert_eq!(history.min_age(), Some(0));
    }
}

#[test]
fn test_signed_values() {
    let mut history: HistoryTracker<i16, 3> = HistoryTracker::new();
    for value in [-5, 10, -20, 3] {
        history.insert(value);
    }

    assert_eq!(history.max(), Some(10));
    assert_eq!(history.max_age(), Some(2));
    assert_eq!(history.min(), Some(-20));
    assert_eq!(history.min_age(), Some(1));
}

/// Deferred subscriber that keeps a history of delivered measurements
struct HistoryFeed<const N: usize> {
    history: RefCell<HistoryTracker<u16, N>>,
}

impl<const N: usize> Subscriber for HistoryFeed<N> {
    fn on_measurement(&self, value: u16) {
        self.history.borrow_mut().insert(value);
    }
}

#[test]
fn test_averager_feeds_history() {
    let feed = HistoryFeed::<4> {
        history: RefCell::new(HistoryTracker::new()),
    };

    let mut averager = SampleAverager::new(2).unwrap();
    averager.subscribe_deferred(&feed);

    for level in [100, 300, 200, 50, 250, 10] {
        averager.add_sample(level);
        averager.add_sample(level);
        averager.poll();
    }

    let history = feed.history.borrow();
    assert_eq!(history.snapshot().as_slice(), &[200, 50, 250, 10]);
    assert_eq!(history.max(), Some(250));
    assert_eq!(history.max_age(), Some(1));
    assert_eq!(history.min(), Some(10));
    assert_eq!(history.latest(), Some(10));
}
