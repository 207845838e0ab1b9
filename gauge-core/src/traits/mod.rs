//! Extension Points for Gauge Core
//!
//! The core never talks to hardware and never decides what a measurement is
//! used for. Both ends of the acquisition chain are traits:
//!
//! - [`subscriber`] - consumers of completed measurements
//! - [`driver`] - the host-specific timer/ADC wiring that feeds raw samples
//!
//! ## Usage Example
//!
//! ```rust
//! use core::cell::Cell;
//! use gauge_core::{SampleAverager, Subscriber};
//!
//! let latest = Cell::new(0u16);
//! let on_value = |value: u16| latest.set(value);
//!
//! let mut averager = SampleAverager::new(2).unwrap();
//! averager.subscribe_deferred(&on_value);
//!
//! averager.add_sample(10);
//! averager.add_sample(20);
//! averager.poll();
//! assert_eq!(latest.get(), 15);
//! ```

pub mod driver;
pub mod subscriber;

pub use driver::SamplingDriver;
pub use subscriber::Subscriber;
