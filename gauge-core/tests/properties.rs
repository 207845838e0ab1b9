//! Property tests for the averager recurrence and the tracker extrema

mod common;

use proptest::prelude::*;

use gauge_core::{HistoryTracker, SampleAverager};

use common::{model_extrema, model_window, model_window_means, Recorder};

proptest! {
    #[test]
    fn averager_matches_recurrence(
        window in 1u16..12,
        samples in prop::collection::vec(any::<u16>(), 0..200),
    ) {
        let immediate = Recorder::new();
        let mut averager = SampleAverager::new(window).unwrap();
        averager.subscribe_immediate(&immediate);

        for &raw in &samples {
            averager.add_sample(raw);
        }

        let expected = model_window_means(window, &samples);
        prop_assert_eq!(immediate.values(), expected.clone());
        prop_assert_eq!(averager.last_value(), expected.last().copied().unwrap_or(0));
        prop_assert_eq!(
            usize::from(averager.pending_samples()),
            samples.len() % usize::from(window)
        );
    }

    #[test]
    fn completed_mean_within_window_bounds(
        samples in prop::collection::vec(0u16..1024, 1..40),
    ) {
        let window = samples.len() as u16;
        let mut averager = SampleAverager::new(window).unwrap();

        for &raw in &samples {
            averager.add_sample(raw);
        }

        let lo = *samples.iter().min().unwrap();
        let hi = *samples.iter().max().unwrap();
        let true_mean = samples.iter().map(|&v| u32::from(v)).sum::<u32>() / u32::from(window);

        prop_assert!(averager.last_value() >= lo);
        prop_assert!(averager.last_value() <= hi);
        // per-step truncation only ever rounds down
        prop_assert!(u32::from(averager.last_value()) <= true_mean);
    }

    #[test]
    fn deferred_delivery_once_per_completion(
        window in 1u16..6,
        batches in prop::collection::vec((0usize..8, 0usize..4), 1..30),
    ) {
        let deferred = Recorder::new();
        let mut averager = SampleAverager::new(window).unwrap();
        averager.subscribe_deferred(&deferred);

        let mut fed = 0usize;
        let mut pending = false;
        let mut expected = 0usize;

        for (samples, polls) in batches {
            for _ in 0..samples {
                averager.add_sample(fed as u16);
                fed += 1;
                if fed % usize::from(window) == 0 {
                    pending = true;
                }
            }

            for _ in 0..polls {
                averager.poll();
            }
            if polls > 0 && pending {
                expected += 1;
                pending = false;
            }

            prop_assert_eq!(averager.has_pending(), pending);
        }

        prop_assert_eq!(deferred.count(), expected);
    }

    #[test]
    fn tracker_matches_brute_force(
        values in prop::collection::vec(any::<u16>(), 1..150),
    ) {
        let mut history: HistoryTracker<u16, 8> = HistoryTracker::new();

        for (i, &value) in values.iter().enumerate() {
            history.insert(value);

            let held = model_window(&values[..=i], 8);
            let (max, max_age, min, min_age) = model_extrema(held).unwrap();

            prop_assert_eq!(history.max(), Some(max));
            prop_assert_eq!(history.min(), Some(min));
            prop_assert_eq!(history.max_age(), Some(max_age));
            prop_assert_eq!(history.min_age(), Some(min_age));
            prop_assert!(max_age < 8 && min_age < 8);
        }
    }

    #[test]
    fn tracker_ties_stay_newest(
        values in prop::collection::vec(0u16..4, 1..100),
    ) {
        let mut history: HistoryTracker<u16, 5> = HistoryTracker::new();
        let mut previous_max: Option<u16> = None;

        for &value in &values {
            history.insert(value);

            if previous_max.is_some_and(|max| value >= max) {
                prop_assert_eq!(history.max_age(), Some(0));
            }
            previous_max = history.max();

            // the designated slot holds the extremum
            let max_age = history.max_age().unwrap();
            let min_age = history.min_age().unwrap();
            prop_assert_eq!(history.get(max_age), history.max());
            prop_assert_eq!(history.get(min_age), history.min());
        }
    }
}
