//! Configuration management for the density cluster analyzer

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, ClusterResult};

/// Thresholds that drive cluster expansion and acceptance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum density a cluster must keep while growing and when finished
    pub density_threshold: f64,

    /// Minimum share of the cluster a candidate must connect to
    pub cp_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            density_threshold: 0.5,
            cp_threshold: 0.5,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(density_threshold: f64, cp_threshold: f64) -> Self {
        Self {
            density_threshold,
            cp_threshold,
        }
    }

    /// Reject thresholds outside `[0, 1]`, including NaN
    pub fn validate(&self) -> ClusterResult<()> {
        check_unit_interval("density_threshold", self.density_threshold)?;
        check_unit_interval("cp_threshold", self.cp_threshold)
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> ClusterResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ClusterError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Config::new(0.0, 1.0).validate().is_ok());
        assert!(Config::new(1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_thresholds() {
        assert_eq!(
            Config::new(1.5, 0.5).validate(),
            Err(ClusterError::InvalidThreshold {
                name: "density_threshold",
                value: 1.5
            })
        );
        assert_eq!(
            Config::new(0.5, -0.1).validate(),
            Err(ClusterError::InvalidThreshold {
                name: "cp_threshold",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_nan_threshold_rejected() {
        assert!(Config::new(f64::NAN, 0.5).validate().is_err());
    }
}
