//! Simulated Gauge Main Loop
//!
//! This example wires the whole measurement path the way firmware would,
//! with the timer interrupt replaced by a loop over a synthetic waveform.
//!
//! ## What You'll Learn
//!
//! - Splitting an averager into its interrupt and main-loop halves
//! - Immediate versus deferred subscribers
//! - Zeroing the pressure sensor against atmosphere
//! - Tracking recent peak and trough with a bounded history
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example main_loop
//! ```

use std::cell::{Cell, RefCell};

use gauge_core::{
    MeasurementHistory, MonitorConfig, PressureSensor, SampleAverager, SamplingConfig,
    SamplingDriver, Subscriber,
};

/// Timer-triggered ADC replaced by a synthetic pressure trace
struct SyntheticAdc {
    tick: u32,
    running: bool,
}

impl SyntheticAdc {
    fn new() -> Self {
        Self {
            tick: 0,
            running: false,
        }
    }

    /// One conversion: slow pressure swell plus a little ripple
    fn convert(&mut self) -> Option<u16> {
        if !self.running {
            return None;
        }

        self.tick += 1;
        let phase = self.tick as f32 / 400.0;
        let swell = 200.0 * (phase * core::f32::consts::TAU).sin().abs();
        let ripple = ((self.tick * 37) % 9) as f32 - 4.0;

        Some((420.0 + swell + ripple) as u16)
    }
}

impl SamplingDriver for SyntheticAdc {
    type Error = &'static str;

    fn start(&mut self, config: &SamplingConfig) -> Result<(), Self::Error> {
        config.validate().map_err(|_| "invalid sampling config")?;
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.running = false;
        Ok(())
    }
}

/// Main-loop consumer: converts and records each measurement
struct Display {
    sensor: PressureSensor,
    history: RefCell<MeasurementHistory>,
}

impl Subscriber for Display {
    fn on_measurement(&self, value: u16) {
        self.history.borrow_mut().insert(value);
    }
}

fn main() {
    println!("Gauge Main Loop Example");
    println!("=======================\n");

    let config = MonitorConfig::default();
    if let Err(e) = config.validate() {
        println!("Configuration rejected: {}", e);
        return;
    }

    println!("Configuration:");
    println!("  Window: {} samples", config.window_size);
    println!(
        "  Rate: {:.0} samples/s, {:.1} measurements/s at 16 MHz\n",
        config.sampling.sample_rate_hz(16_000_000),
        config.measurement_rate_hz(16_000_000)
    );

    // Zero against atmosphere before the port is connected
    let mut sensor = PressureSensor::new(config.calibration).unwrap_or_default();
    for raw in [204, 205, 205, 206, 205] {
        sensor.calibrate_atmospheric(raw);
    }
    println!(
        "Atmospheric zero: offset {:.4} bar over {} readings\n",
        sensor.calibration_offset(),
        sensor.calibration_samples()
    );

    let display = Display {
        sensor,
        history: RefCell::new(MeasurementHistory::new()),
    };

    // Interrupt-context subscriber: only counts, never blocks
    let completions = Cell::new(0u32);
    let count_completion = |_: u16| completions.set(completions.get() + 1);

    let mut averager = match SampleAverager::new(config.window_size) {
        Ok(averager) => averager,
        Err(e) => {
            println!("Averager rejected: {}", e);
            return;
        }
    };
    let (mut producer, mut consumer) = averager.split();
    producer.subscribe_immediate(&count_completion);
    consumer.subscribe_deferred(&display);

    let mut adc = SyntheticAdc::new();
    if let Err(e) = adc.start(&config.sampling) {
        println!("Driver failed to start: {}", e);
        return;
    }

    // Each iteration: one timer interrupt, then one pass of the main loop
    for iteration in 0..2000u32 {
        if let Some(raw) = adc.convert() {
            producer.add_sample(raw);
        }

        if let Some(measurement) = consumer.poll() {
            if iteration % 160 == 159 {
                let history = display.history.borrow();
                println!(
                    "t={:4}  {:4} counts  {:+6} mbar  peak {:+6} mbar ({} ago)  trough {:+6} mbar",
                    iteration,
                    measurement,
                    display.sensor.convert_to_millibar(measurement),
                    history.max().map_or(0, |v| display.sensor.convert_to_millibar(v)),
                    history.max_age().unwrap_or(0),
                    history.min().map_or(0, |v| display.sensor.convert_to_millibar(v)),
                );
            }
        }
    }

    let _ = adc.stop();

    println!("\nSummary:");
    println!("  Windows completed: {}", completions.get());
    println!("  Held in history:   {}", display.history.borrow().len());
    let peak = display.history.borrow().max();
    if let Some(peak) = peak {
        println!("  Peak pressure:     {:.3} bar", display.sensor.convert_to_bar(peak));
    }
}
