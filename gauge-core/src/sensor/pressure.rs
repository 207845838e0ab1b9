use crate::{
    averager::fold_mean,
    errors::{ConfigError, ConfigResult},
};

use super::SensorCalibration;

/// Pressure transducer with atmospheric zero calibration
#[derive(Debug, Clone)]
pub struct PressureSensor {
    calibration: SensorCalibration,

    /// Running mean of readings taken with the port vented
    atmospheric_mean: u16,

    /// Readings folded into `atmospheric_mean`, saturates at `u16::MAX`
    atmospheric_samples: u16,
}

impl Default for PressureSensor {
    fn default() -> Self {
        Self {
            calibration: SensorCalibration::default(),
            atmospheric_mean: 0,
            atmospheric_samples: 0,
        }
    }
}

impl PressureSensor {
    /// Create a sensor from explicit coefficients
    pub fn new(calibration: SensorCalibration) -> ConfigResult<Self> {
        calibration.validate()?;

        Ok(Self {
            calibration,
            ..Self::default()
        })
    }

    /// Convert a raw ADC reading to gauge pressure in bar
    pub fn convert_to_bar(&self, raw: u16) -> f32 {
        let cal = &self.calibration;
        cal.bar(cal.kpa(cal.volts(raw)))
    }

    /// Convert a raw ADC reading to gauge pressure in whole millibar
    pub fn convert_to_millibar(&self, raw: u16) -> i32 {
        libm::roundf(self.convert_to_bar(raw) * 1000.0) as i32
    }

    /// Fold one vented reading into the atmospheric zero
    ///
    /// Readings are averaged with the integer incremental mean, and the gauge
    /// offset is moved so the current mean converts to exactly 0 bar. Returns
    /// the new offset. Once `u16::MAX` readings have been folded in, each new
    /// reading keeps a weight of 1/65536.
    pub fn calibrate_atmospheric(&mut self, raw: u16) -> f32 {
        self.atmospheric_mean = fold_mean(self.atmospheric_mean, self.atmospheric_samples, raw);
        self.atmospheric_samples = self.atmospheric_samples.saturating_add(1);

        self.calibration.bar_offset = 0.0;
        self.calibration.bar_offset = -self.convert_to_bar(self.atmospheric_mean);

        log_debug!(
            "atmospheric zero: mean {} over {} readings",
            self.atmospheric_mean,
            self.atmospheric_samples
        );

        self.calibration.bar_offset
    }

    /// Current gauge offset in bar
    pub fn calibration_offset(&self) -> f32 {
        self.calibration.bar_offset
    }

    /// Restore a previously determined gauge offset
    pub fn set_calibration_offset(&mut self, offset: f32) -> ConfigResult<()> {
        if !offset.is_finite() {
            return Err(ConfigError::InvalidCalibration {
                reason: "gauge offset is not a finite number",
            });
        }

        self.calibration.bar_offset = offset;
        Ok(())
    }

    /// Forget accumulated vented readings, keeping the current offset
    pub fn reset_calibration(&mut self) {
        self.atmospheric_mean = 0;
        self.atmospheric_samples = 0;
    }

    /// Number of vented readings folded into the current zero
    pub fn calibration_samples(&self) -> u16 {
        self.atmospheric_samples
    }

    /// Active conversion coefficients
    pub fn calibration(&self) -> &SensorCalibration {
        &self.calibration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncalibrated_zero_code_reads_below_atmosphere() {
        let sensor = PressureSensor::default();
        let bar = sensor.convert_to_bar(0);

        assert!((bar - -0.98345).abs() < 1e-4);
        assert_eq!(sensor.convert_to_millibar(0), -983);
    }

    #[test]
    fn conversion_is_monotonic() {
        let sensor = PressureSensor::default();
        let mut previous = sensor.convert_to_bar(0);

        for raw in 1..1024 {
            let bar = sensor.convert_to_bar(raw);
            assert!(bar > previous);
            previous = bar;
        }
    }

    #[test]
    fn calibration_zeroes_the_vented_mean() {
        let mut sensor = PressureSensor::default();

        // incremental means: 200, 201, 202
        for raw in [200, 202, 204] {
            sensor.calibrate_atmospheric(raw);
        }

        assert_eq!(sensor.calibration_samples(), 3);
        assert_eq!(sensor.convert_to_bar(202), 0.0);
        assert!(sensor.convert_to_bar(203) > 0.0);
        assert!(sensor.convert_to_bar(201) < 0.0);
    }

    #[test]
    fn reset_keeps_offset_and_restarts_mean() {
        let mut sensor = PressureSensor::default();
        sensor.calibrate_atmospheric(300);
        let offset = sensor.calibration_offset();

        sensor.reset_calibration();
        assert_eq!(sensor.calibration_samples(), 0);
        assert_eq!(sensor.calibration_offset(), offset);

        sensor.calibrate_atmospheric(100);
        assert_eq!(sensor.convert_to_bar(100), 0.0);
    }

    #[test]
    fn offset_round_trips_and_rejects_nan() {
        let mut sensor = PressureSensor::default();

        assert!(sensor.set_calibration_offset(-0.97).is_ok());
        assert_eq!(sensor.calibration_offset(), -0.97);

        assert!(sensor.set_calibration_offset(f32::NAN).is_err());
        assert_eq!(sensor.calibration_offset(), -0.97);
    }

    #[test]
    fn new_validates_coefficients() {
        let mut cal = SensorCalibration::default();
        cal.kpa_per_volt = f32::INFINITY;

        assert!(PressureSensor::new(cal).is_err());
        assert!(PressureSensor::new(SensorCalibration::default()).is_ok());
    }
}
