//src/config.rs

use crate::error::PsmcError;

/// Number of sites lumped into one bin by `fq2psmcfa` (its `-s` default).
pub const DEFAULT_BIN_SIZE: f64 = 100.0;

/// The external constants needed to put psmc output into real units.
///
/// Built once and passed by reference into the pipeline; never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingConfig {
    mutation_rate: f64,
    generation_time: f64,
    bin_size: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 1.0,
            generation_time: 1.0,
            bin_size: DEFAULT_BIN_SIZE,
        }
    }
}

impl ScalingConfig {
    /// `mutation_rate` is per site per generation, `generation_time` in years.
    pub fn new(mutation_rate: f64, generation_time: f64) -> Result<Self, PsmcError> {
        check_positive("mutation rate", mutation_rate)?;
        check_positive("generation time", generation_time)?;
        Ok(Self {
            mutation_rate,
            generation_time,
            bin_size: DEFAULT_BIN_SIZE,
        })
    }

    /// Override the bin size used when the `.psmcfa` input was prepared.
    pub fn with_bin_size(mut self, bin_size: f64) -> Result<Self, PsmcError> {
        check_positive("bin size", bin_size)?;
        self.bin_size = bin_size;
        Ok(self)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn generation_time(&self) -> f64 {
        self.generation_time
    }

    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// N0 = theta0 / (4 * mu * bin_size).
    ///
    /// theta = 4*N*mu per site, and psmc reports it per bin.
    pub fn reference_size(&self, theta0: f64) -> Result<f64, PsmcError> {
        let denominator = 4.0 * self.mutation_rate * self.bin_size;
        if denominator == 0.0 {
            return Err(PsmcError::Configuration(
                "mutation rate must not be zero".to_string(),
            ));
        }
        Ok(theta0 / denominator)
    }

    /// Years before present for a psmc time t_k (in units of 2*N0 generations).
    pub fn years(&self, time_units: f64, n0: f64) -> f64 {
        time_units * 2.0 * n0 * self.generation_time
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), PsmcError> {
    if value == 0.0 {
        return Err(PsmcError::Configuration(format!("{name} must not be zero")));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(PsmcError::Configuration(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_psmcdata() {
        let config = ScalingConfig::default();
        assert_eq!(config.mutation_rate(), 1.0);
        assert_eq!(config.generation_time(), 1.0);
        assert_eq!(config.bin_size(), 100.0);
    }

    #[test]
    fn test_zero_mutation_rate_is_rejected() {
        let err = ScalingConfig::new(0.0, 25.0).unwrap_err();
        assert!(matches!(err, PsmcError::Configuration(_)));
        assert!(err.to_string().contains("mutation rate"));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(ScalingConfig::new(-1.25e-8, 25.0).is_err());
        assert!(ScalingConfig::new(f64::NAN, 25.0).is_err());
        assert!(ScalingConfig::new(1.25e-8, f64::INFINITY).is_err());
        assert!(ScalingConfig::new(1.25e-8, 0.0).is_err());
        assert!(ScalingConfig::default().with_bin_size(0.0).is_err());
    }

    #[test]
    fn test_reference_size() {
        let config = ScalingConfig::default();
        let n0 = config.reference_size(2.0).unwrap();
        assert!((n0 - 0.005).abs() < 1e-15);

        let config = ScalingConfig::new(2.5e-8, 25.0).unwrap();
        let n0 = config.reference_size(0.04).unwrap();
        assert!((n0 - 4000.0).abs() < 1e-6);
    }

    #[test]
    fn test_doubling_mutation_rate_halves_n0() {
        let single = ScalingConfig::new(1.25e-8, 25.0).unwrap();
        let double = ScalingConfig::new(2.5e-8, 25.0).unwrap();
        let n0 = single.reference_size(0.0123).unwrap();
        let half = double.reference_size(0.0123).unwrap();
        assert!((n0 / 2.0 - half).abs() <= f64::EPSILON * n0);
    }

    #[test]
    fn test_custom_bin_size() {
        let config = ScalingConfig::default().with_bin_size(50.0).unwrap();
        assert!((config.reference_size(2.0).unwrap() - 0.01).abs() < 1e-15);
    }
}
