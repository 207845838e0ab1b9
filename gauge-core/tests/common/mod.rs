//! Common test utilities for integration tests
//!
//! Provides:
//! - Recording subscribers that keep every delivered measurement
//! - Reference models checked against the real implementations
//! - A simulated sampling timer implementing `SamplingDriver`

#![allow(dead_code)]

use std::cell::RefCell;

use gauge_core::{averager::fold_mean, SamplingConfig, SamplingDriver, Subscriber};

/// Subscriber that records every value it is given
#[derive(Default)]
pub struct Recorder {
    values: RefCell<Vec<u16>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, in order
    pub fn values(&self) -> Vec<u16> {
        self.values.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl Subscriber for Recorder {
    fn on_measurement(&self, value: u16) {
        self.values.borrow_mut().push(value);
    }
}

/// Completed window means for a sample stream, by direct recurrence
pub fn model_window_means(window: u16, samples: &[u16]) -> Vec<u16> {
    let mut means = Vec::new();
    let mut mean = 0u16;
    let mut count = 0u16;

    for &raw in samples {
        mean = fold_mean(mean, count, raw);
        count += 1;
        if count == window {
            means.push(mean);
            mean = 0;
            count = 0;
        }
    }

    means
}

/// Extrema of a sliding window, newest of equal values winning
///
/// `held` is oldest first. Returns `(max, max_age, min, min_age)`.
pub fn model_extrema(held: &[u16]) -> Option<(u16, usize, u16, usize)> {
    let max = *held.iter().max()?;
    let min = *held.iter().min()?;
    let newest = held.len() - 1;

    let max_age = newest - held.iter().rposition(|&v| v == max)?;
    let min_age = newest - held.iter().rposition(|&v| v == min)?;

    Some((max, max_age, min, min_age))
}

/// The last `capacity` values of `inserted`, oldest first
pub fn model_window(inserted: &[u16], capacity: usize) -> &[u16] {
    &inserted[inserted.len().saturating_sub(capacity)..]
}

/// Error from the simulated timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    AlreadyRunning,
    NotRunning,
}

/// Sampling timer stand-in that replays a fixed list of ADC readings
pub struct SimulatedAdc {
    readings: Vec<u16>,
    position: usize,
    running: bool,
    config: Option<SamplingConfig>,
}

impl SimulatedAdc {
    pub fn new(readings: Vec<u16>) -> Self {
        Self {
            readings,
            position: 0,
            running: false,
            config: None,
        }
    }

    /// Next reading while running, `None` once stopped or exhausted
    pub fn fire(&mut self) -> Option<u16> {
        if !self.running {
            return None;
        }

        let raw = *self.readings.get(self.position)?;
        self.position += 1;
        Some(raw)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> Option<&SamplingConfig> {
        self.config.as_ref()
    }
}

impl SamplingDriver for SimulatedAdc {
    type Error = SimError;

    fn start(&mut self, config: &SamplingConfig) -> Result<(), Self::Error> {
        if self.running {
            return Err(SimError::AlreadyRunning);
        }

        self.config = Some(*config);
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        if !self.running {
            return Err(SimError::NotRunning);
        }

        self.running = false;
        Ok(())
    }
}
