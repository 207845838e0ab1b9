//! Sampling Driver Abstraction
//!
//! The sampling hardware (a timer in clear-on-compare mode auto-triggering
//! an ADC conversion) is host specific and stays outside this crate. What the
//! core needs from it is a single contract: once started, the driver's
//! conversion-complete interrupt calls `SampleProducer::add_sample` with each
//! raw reading at the configured cadence, one call at a time.
//!
//! ## Platform-Specific Considerations
//!
//! ### Bare Metal
//! - Program the timer compare value from `SamplingConfig::ticks` and the
//!   clock divider from `SamplingConfig::prescaler`
//! - Select the multiplexer input from `SamplingConfig::channel`
//! - Configure interrupts with global interrupts disabled, re-enable after
//!
//! ### Host Simulation
//! - Generate readings from a waveform or a recorded trace and call the
//!   producer directly; see `examples/main_loop.rs`

use crate::config::SamplingConfig;

/// Host wiring that feeds raw readings into a sample producer
///
/// ## Example Implementation
///
/// ```rust
/// use gauge_core::{SamplingConfig, SamplingDriver};
///
/// struct TimerAdc {
///     running: bool,
/// }
///
/// impl SamplingDriver for TimerAdc {
///     type Error = core::convert::Infallible;
///
///     fn start(&mut self, config: &SamplingConfig) -> Result<(), Self::Error> {
///         // write compare registers, select channel, enable conversion interrupt
///         let _ = (config.ticks, config.channel);
///         self.running = true;
///         Ok(())
///     }
///
///     fn stop(&mut self) -> Result<(), Self::Error> {
///         self.running = false;
///         Ok(())
///     }
/// }
/// ```
pub trait SamplingDriver {
    /// Hardware error reported while arming or disarming
    type Error;

    /// Arm the timer and ADC with a validated configuration
    fn start(&mut self, config: &SamplingConfig) -> Result<(), Self::Error>;

    /// Stop triggering conversions
    fn stop(&mut self) -> Result<(), Self::Error>;
}
