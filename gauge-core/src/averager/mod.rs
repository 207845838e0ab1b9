//! Interrupt-Driven Sample Averaging
//!
//! ## Overview
//!
//! A timer-triggered ADC produces raw readings at a fixed cadence, each one
//! delivered from an interrupt handler. The averager collapses every
//! `window_size` consecutive readings into one measurement and hands it to two
//! kinds of consumers:
//!
//! ```text
//!  ADC interrupt                                    main loop
//!  ─────────────                                    ─────────
//!  add_sample(raw) ─► Window ─(complete)─► Handoff ◄─ poll()
//!                                 │                     │
//!                                 ▼                     ▼
//!                      immediate subscribers   deferred subscribers
//!                      (same interrupt)        (main-loop context)
//! ```
//!
//! ## Why an Incremental Mean?
//!
//! Summing 16-bit readings overflows a 16-bit accumulator after two samples
//! and a 32-bit one eventually. The recurrence
//! `mean' = (count × mean + raw) / (count + 1)` keeps the stored state at
//! 16 bits and bounds the intermediate at 32 bits for any window size, at the
//! cost of one division per sample. Truncation happens at every step, so the
//! result can sit slightly below the exact mean; see [`fold_mean`].
//!
//! ## Two Contexts, One Shared Word
//!
//! [`SampleAverager::split`] hands out a [`SampleProducer`] for the interrupt
//! and a [`MeasurementConsumer`] for the main loop. The producer owns the
//! window and the immediate registry, the consumer owns the deferred
//! registry. The only state they share is the [`Handoff`] atomic word.
//!
//! For single-context use and tests, `SampleAverager` exposes every
//! operation directly.
//!
//! ## Example
//!
//! ```rust
//! use core::cell::Cell;
//! use gauge_core::SampleAverager;
//!
//! let last_seen = Cell::new(None);
//! let display = |value: u16| last_seen.set(Some(value));
//!
//! let mut averager = SampleAverager::new(4)?;
//! averager.subscribe_deferred(&display);
//!
//! let (mut producer, mut consumer) = averager.split();
//!
//! // interrupt side
//! for raw in [10, 20, 30, 40] {
//!     producer.add_sample(raw);
//! }
//!
//! // main loop side
//! assert_eq!(consumer.poll(), Some(25));
//! assert_eq!(consumer.poll(), None);
//! assert_eq!(last_seen.get(), Some(25));
//! # Ok::<(), gauge_core::ConfigError>(())
//! ```

mod handoff;
mod registry;
mod window;

pub use handoff::{Handoff, HandoffStats};
pub use registry::Registry;
pub use window::{fold_mean, Window};

use crate::{
    constants::{DEFAULT_DEFERRED_SUBSCRIBERS, DEFAULT_IMMEDIATE_SUBSCRIBERS},
    errors::ConfigResult,
    traits::Subscriber,
};

/// Averaging accumulator with immediate and deferred notification
///
/// `I` and `D` are the immediate and deferred registry capacities.
pub struct SampleAverager<
    'a,
    const I: usize = DEFAULT_IMMEDIATE_SUBSCRIBERS,
    const D: usize = DEFAULT_DEFERRED_SUBSCRIBERS,
> {
    window: Window,
    handoff: Handoff,
    immediate: Registry<'a, I>,
    deferred: Registry<'a, D>,
}

impl<'a> SampleAverager<'a> {
    /// Create an averager with the default registry capacities
    ///
    /// Fails with [`ConfigError::ZeroWindow`](crate::ConfigError::ZeroWindow)
    /// when `window_size` is 0.
    pub fn new(window_size: u16) -> ConfigResult<Self> {
        Self::with_capacity(window_size)
    }
}

impl<'a, const I: usize, const D: usize> SampleAverager<'a, I, D> {
    /// Create an averager with `I` immediate and `D` deferred subscriber slots
    pub fn with_capacity(window_size: u16) -> ConfigResult<Self> {
        let window = Window::new(window_size)?;

        log_debug!(
            "averager: window {} samples, {} immediate / {} deferred slots",
            window_size,
            I,
            D
        );

        Ok(Self {
            window,
            handoff: Handoff::new(),
            immediate: Registry::new(),
            deferred: Registry::new(),
        })
    }

    /// Split into the interrupt-context and main-loop halves
    pub fn split(&mut self) -> (SampleProducer<'_, 'a, I>, MeasurementConsumer<'_, 'a, D>) {
        let producer = SampleProducer {
            window: &mut self.window,
            immediate: &mut self.immediate,
            handoff: &self.handoff,
        };
        let consumer = MeasurementConsumer {
            deferred: &mut self.deferred,
            handoff: &self.handoff,
        };

        (producer, consumer)
    }

    /// Feed one raw reading; see [`SampleProducer::add_sample`]
    pub fn add_sample(&mut self, raw: u16) {
        self.split().0.add_sample(raw)
    }

    /// Deliver a pending measurement; see [`MeasurementConsumer::poll`]
    pub fn poll(&mut self) -> Option<u16> {
        self.split().1.poll()
    }

    /// Most recently completed measurement, 0 before the first completion
    pub fn last_value(&self) -> u16 {
        self.handoff.latest()
    }

    /// Discard the in-progress window
    ///
    /// The last completed value, the pending flag and both registries are
    /// untouched.
    pub fn reset(&mut self) {
        self.window.reset();
    }

    /// Register an interrupt-context subscriber; `false` if the registry is full
    pub fn subscribe_immediate(&mut self, handle: &'a dyn Subscriber) -> bool {
        self.immediate.subscribe(handle)
    }

    /// Remove an interrupt-context subscriber; `false` if it was not registered
    pub fn unsubscribe_immediate(&mut self, handle: &dyn Subscriber) -> bool {
        self.immediate.unsubscribe(handle)
    }

    /// Register a main-loop subscriber; `false` if the registry is full
    pub fn subscribe_deferred(&mut self, handle: &'a dyn Subscriber) -> bool {
        self.deferred.subscribe(handle)
    }

    /// Remove a main-loop subscriber; `false` if it was not registered
    pub fn unsubscribe_deferred(&mut self, handle: &dyn Subscriber) -> bool {
        self.deferred.unsubscribe(handle)
    }

    /// Configured samples per measurement
    pub fn window_size(&self) -> u16 {
        self.window.size()
    }

    /// Samples accumulated toward the next measurement
    pub fn pending_samples(&self) -> u16 {
        self.window.count()
    }

    /// Whether a completed measurement awaits `poll()`
    pub fn has_pending(&self) -> bool {
        self.handoff.is_pending()
    }

    /// Handoff between the two contexts
    pub fn handoff(&self) -> &Handoff {
        &self.handoff
    }
}

impl<const I: usize, const D: usize> core::fmt::Debug for SampleAverager<'_, I, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SampleAverager")
            .field("window", &self.window)
            .field("handoff", &self.handoff)
            .field("immediate", &self.immediate.len())
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

/// Interrupt-context half of a split averager
pub struct SampleProducer<'s, 'a, const I: usize> {
    window: &'s mut Window,
    immediate: &'s mut Registry<'a, I>,
    handoff: &'s Handoff,
}

impl<'s, 'a, const I: usize> SampleProducer<'s, 'a, I> {
    /// Feed one raw reading from the sampling driver
    ///
    /// Never blocks and runs in bounded time. When the reading completes a
    /// window, the mean becomes the last value, the window restarts, every
    /// immediate subscriber is called with the mean, and only then is the
    /// value offered to the main loop.
    #[inline]
    pub fn add_sample(&mut self, raw: u16) {
        if let Some(completed) = self.window.accumulate(raw) {
            self.handoff.latch(completed);
            self.immediate.notify(completed);
            self.handoff.raise();
        }
    }

    /// Discard the in-progress window
    pub fn reset(&mut self) {
        self.window.reset();
    }

    /// Most recently completed measurement
    pub fn last_value(&self) -> u16 {
        self.handoff.latest()
    }

    /// Register an interrupt-context subscriber; `false` if the registry is full
    pub fn subscribe_immediate(&mut self, handle: &'a dyn Subscriber) -> bool {
        self.immediate.subscribe(handle)
    }

    /// Remove an interrupt-context subscriber
    pub fn unsubscribe_immediate(&mut self, handle: &dyn Subscriber) -> bool {
        self.immediate.unsubscribe(handle)
    }
}

/// Main-loop half of a split averager
pub struct MeasurementConsumer<'s, 'a, const D: usize> {
    deferred: &'s mut Registry<'a, D>,
    handoff: &'s Handoff,
}

impl<'s, 'a, const D: usize> MeasurementConsumer<'s, 'a, D> {
    /// Deliver the pending measurement to deferred subscribers, if any
    ///
    /// Call once per main-loop iteration. Returns the delivered value, or
    /// `None` when no window completed since the last delivery. Each
    /// completion is delivered at most once, however often this is called.
    pub fn poll(&mut self) -> Option<u16> {
        let value = self.handoff.take().ok()?;

        log_trace!("delivering measurement {} to {} subscribers", value, self.deferred.len());
        self.deferred.notify(value);

        Some(value)
    }

    /// Most recently completed measurement
    pub fn last_value(&self) -> u16 {
        self.handoff.latest()
    }

    /// Register a main-loop subscriber; `false` if the registry is full
    pub fn subscribe_deferred(&mut self, handle: &'a dyn Subscriber) -> bool {
        self.deferred.subscribe(handle)
    }

    /// Remove a main-loop subscriber
    pub fn unsubscribe_deferred(&mut self, handle: &dyn Subscriber) -> bool {
        self.deferred.unsubscribe(handle)
    }
}
