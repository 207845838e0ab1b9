use core::num::NonZeroU16;

use crate::errors::{ConfigError, ConfigResult};

/// Fold one reading into an integer incremental mean
///
/// Computes `(count × mean + raw) / (count + 1)` in `u32`, truncating.
/// The intermediate never overflows: with every operand at `u16::MAX` the sum
/// is `65535 × 65535 + 65535 = 65536 × 65535 < 2³²`, and the divisor is at
/// most 65536. The result never exceeds the largest input, so it fits `u16`.
#[inline]
pub fn fold_mean(mean: u16, count: u16, raw: u16) -> u16 {
    let count = u32::from(count);
    let sum = count * u32::from(mean) + u32::from(raw);
    (sum / (count + 1)) as u16
}

/// In-progress averaging window
///
/// Owned by the sampling context. Nothing outside the window ever sees a
/// partial mean; [`accumulate`](Self::accumulate) only yields a value when
/// the window completes.
#[derive(Debug, Clone)]
pub struct Window {
    size: NonZeroU16,
    /// Samples in the current window, `< size` between calls
    count: u16,
    /// Incremental mean of the current window
    mean: u16,
}

impl Window {
    /// Create an empty window of `size` samples
    pub fn new(size: u16) -> ConfigResult<Self> {
        let size = NonZeroU16::new(size).ok_or(ConfigError::ZeroWindow)?;

        Ok(Self {
            size,
            count: 0,
            mean: 0,
        })
    }

    /// Add one raw reading, returning the window mean when it completes
    ///
    /// Bounded time, no branches on the data except the completion check.
    #[inline]
    pub fn accumulate(&mut self, raw: u16) -> Option<u16> {
        self.mean = fold_mean(self.mean, self.count, raw);
        // count < size ≤ u16::MAX before the increment
        self.count += 1;

        if self.count == self.size.get() {
            let completed = self.mean;
            self.reset();
            Some(completed)
        } else {
            None
        }
    }

    /// Discard the in-progress window
    pub fn reset(&mut self) {
        self.count = 0;
        self.mean = 0;
    }

    /// Configured samples per window
    pub fn size(&self) -> u16 {
        self.size.get()
    }

    /// Samples accumulated in the current window
    pub fn count(&self) -> u16 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Window::new(0).unwrap_err(), ConfigError::ZeroWindow);
    }

    #[test]
    fn mean_truncates_at_each_step() {
        // 1 → (1 + 2) / 2 = 1 → (2 × 1 + 4) / 3 = 2
        let mut window = Window::new(3).unwrap();
        assert_eq!(window.accumulate(1), None);
        assert_eq!(window.accumulate(2), None);
        assert_eq!(window.accumulate(4), Some(2));
    }

    #[test]
    fn completion_resets_the_window() {
        let mut window = Window::new(2).unwrap();
        assert_eq!(window.accumulate(100), None);
        assert_eq!(window.count(), 1);
        assert_eq!(window.accumulate(200), Some(150));
        assert_eq!(window.count(), 0);

        assert_eq!(window.accumulate(7), None);
        assert_eq!(window.accumulate(9), Some(8));
    }

    #[test]
    fn single_sample_window_passes_values_through() {
        let mut window = Window::new(1).unwrap();
        for raw in [0, 1, 1023, u16::MAX] {
            assert_eq!(window.accumulate(raw), Some(raw));
        }
    }

    #[test]
    fn widest_window_does_not_overflow() {
        let mut window = Window::new(u16::MAX).unwrap();
        for _ in 0..u16::MAX - 1 {
            assert_eq!(window.accumulate(u16::MAX), None);
        }
        assert_eq!(window.accumulate(u16::MAX), Some(u16::MAX));
    }

    #[test]
    fn fold_mean_at_extremes() {
        assert_eq!(fold_mean(u16::MAX, u16::MAX, u16::MAX), u16::MAX);
        assert_eq!(fold_mean(0, u16::MAX, u16::MAX), 0);
        assert_eq!(fold_mean(0, 0, 42), 42);
    }
}
