//! Measurement Subscribers
//!
//! A subscriber receives each completed measurement as a plain `u16`. The same
//! trait serves both notification paths; what differs is the context the call
//! arrives in:
//!
//! - **Immediate**: called from `add_sample`, i.e. inside the sampling
//!   interrupt. Must be short, must not block, must not touch state the main
//!   loop mutates without its own atomics.
//! - **Deferred**: called from `poll()` on the main loop. Anything goes.
//!
//! Any `Fn(u16)` is a subscriber, so closures and plain functions register
//! directly.

/// Receiver of completed measurements
///
/// ## Example Implementation
///
/// ```rust
/// use core::sync::atomic::{AtomicBool, Ordering};
/// use gauge_core::Subscriber;
///
/// /// Trips when a measurement crosses a fixed limit
/// struct OverPressureTrip {
///     limit: u16,
///     tripped: AtomicBool,
/// }
///
/// impl Subscriber for OverPressureTrip {
///     fn on_measurement(&self, value: u16) {
///         if value > self.limit {
///             self.tripped.store(true, Ordering::Release);
///         }
///     }
/// }
/// ```
pub trait Subscriber {
    /// Called once per completed measurement window
    fn on_measurement(&self, value: u16);
}

impl<F> Subscriber for F
where
    F: Fn(u16),
{
    fn on_measurement(&self, value: u16) {
        self(value)
    }
}

/// Whether two handles refer to the same subscriber
///
/// Handles are compared by address. Zero-sized subscribers (plain functions,
/// closures that capture nothing) have no address of their own, so for those
/// the vtable is compared as well, which tells distinct functions apart.
pub(crate) fn same_subscriber(a: &dyn Subscriber, b: &dyn Subscriber) -> bool {
    if core::mem::size_of_val(a) == 0 {
        core::ptr::eq(a, b)
    } else {
        core::ptr::addr_eq(a, b)
    }
}
