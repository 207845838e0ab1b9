//! Lock-Free Measurement Handoff Between Interrupt and Main Loop
//!
//! ## Overview
//!
//! The sampling interrupt completes a measurement; the main loop consumes it
//! some time later. In between, exactly one thing is shared: the latest
//! completed value and whether it has been delivered yet. This module keeps
//! both in a single atomic word, so neither side ever takes a lock or
//! disables interrupts.
//!
//! ```text
//! Producer (ISR)                         Consumer (main loop)
//!      │                                        │
//!   latch(value) ──► ┌────────┬─────────┐ ◄── take()
//!   raise()      ──► │pending │  value  │     fetch_and(!PENDING)
//!                    │ bit 16 │ 15 .. 0 │
//!                    └────────┴─────────┘
//! ```
//!
//! ## Protocol
//!
//! ### Producer
//! 1. `latch(value)`: swap in the new value with the pending bit clear
//!    (`Release`). The value is now visible through `latest()`, but not yet
//!    offered for deferred delivery.
//! 2. Run immediate subscribers.
//! 3. `raise()`: set the pending bit (`fetch_or`, `Release`).
//!
//! ### Consumer
//! 1. `take()`: clear the pending bit (`fetch_and`, `AcqRel`). The value in
//!    the returned previous word is the value that was pending; no second
//!    load is needed.
//!
//! Because flag and value travel in one word, a completion that races the
//! consumer is delivered exactly once and never torn: either the consumer's
//! `fetch_and` sees the old word (and the new completion stays pending for
//! the next poll) or the new one.
//!
//! ## Overwrite Policy
//!
//! There is one slot. A completion that arrives before the previous one was
//! taken replaces it; only the latest measurement matters. Replacements are
//! counted in [`HandoffStats::overwritten`].

use core::convert::Infallible;
use core::sync::atomic::{AtomicU32, Ordering};

/// Bit set while a latched value awaits deferred delivery
const PENDING: u32 = 1 << 16;

/// Bits holding the latched value
const VALUE_MASK: u32 = 0xFFFF;

/// Single-slot handoff of completed measurements
///
/// ## Example Usage
///
/// ```rust
/// use gauge_core::averager::Handoff;
///
/// static HANDOFF: Handoff = Handoff::new();
///
/// // Producer (interrupt handler)
/// HANDOFF.latch(512);
/// HANDOFF.raise();
///
/// // Consumer (main loop)
/// assert_eq!(HANDOFF.take(), Ok(512));
/// assert!(HANDOFF.take().is_err()); // WouldBlock until the next completion
/// assert_eq!(HANDOFF.latest(), 512);
/// ```
pub struct Handoff {
    /// Pending bit and latest value
    state: AtomicU32,

    /// Handoff statistics
    stats: HandoffStats,
}

/// Handoff statistics
///
/// Counters use `Relaxed` ordering; they never gate delivery.
pub struct HandoffStats {
    /// Completions offered for deferred delivery
    pub published: AtomicU32,
    /// Completions taken by the consumer
    pub delivered: AtomicU32,
    /// Completions replaced before the consumer took them
    pub overwritten: AtomicU32,
}

impl HandoffStats {
    const fn new() -> Self {
        Self {
            published: AtomicU32::new(0),
            delivered: AtomicU32::new(0),
            overwritten: AtomicU32::new(0),
        }
    }
}

impl Handoff {
    /// Create an empty handoff; latest value 0, nothing pending
    ///
    /// Usable in static context.
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(0),
            stats: HandoffStats::new(),
        }
    }

    /// Make `value` the latest completed measurement (producer only)
    ///
    /// Withdraws any undelivered value; it will be replaced by this one once
    /// [`raise`](Self::raise) is called.
    pub fn latch(&self, value: u16) {
        let previous = self.state.swap(u32::from(value), Ordering::Release);

        if previous & PENDING != 0 {
            self.stats.overwritten.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Offer the latched value for deferred delivery (producer only)
    pub fn raise(&self) {
        self.state.fetch_or(PENDING, Ordering::Release);
        self.stats.published.fetch_add(1, Ordering::Relaxed);
    }

    /// Take the pending value, if any (consumer only)
    ///
    /// Returns `WouldBlock` when nothing completed since the last take.
    pub fn take(&self) -> nb::Result<u16, Infallible> {
        let previous = self.state.fetch_and(VALUE_MASK, Ordering::AcqRel);

        if previous & PENDING == 0 {
            return Err(nb::Error::WouldBlock);
        }

        self.stats.delivered.fetch_add(1, Ordering::Relaxed);
        Ok((previous & VALUE_MASK) as u16)
    }

    /// Latest completed value, delivered or not
    pub fn latest(&self) -> u16 {
        (self.state.load(Ordering::Acquire) & VALUE_MASK) as u16
    }

    /// Whether a completed value awaits delivery
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) & PENDING != 0
    }

    /// Get handoff statistics
    pub fn stats(&self) -> &HandoffStats {
        &self.stats
    }
}

impl Default for Handoff {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Handoff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Handoff")
            .field("latest", &self.latest())
            .field("pending", &self.is_pending())
            .finish()
    }
}
