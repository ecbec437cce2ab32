//! Young's modulus calculation
//!
//! Young's modulus is the ratio of stress to strain in a material, a measure
//! of its stiffness. Units follow the inputs: stress in Pa with a
//! dimensionless strain yields a modulus in Pa.

use thiserror::Error;

/// Modulus calculation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModulusError {
    /// Strain is zero (either sign), the quotient is undefined
    #[error("Strain must be non-zero to compute Young's modulus")]
    ZeroStrain,
}

/// Calculate Young's modulus, defined as stress / strain
///
/// Returns `ModulusError::ZeroStrain` when `strain` is `0.0` or `-0.0`.
/// No other range checks are applied: NaN inputs yield NaN.
#[inline]
pub fn youngs_modulus(stress: f64, strain: f64) -> Result<f64, ModulusError> {
    if strain == 0.0 {
        return Err(ModulusError::ZeroStrain);
    }
    Ok(stress / strain)
}

/// Calculate Young's modulus with plain IEEE-754 division
///
/// Zero strain yields `±inf` (or NaN for `0 / 0`) instead of an error.
#[inline]
pub fn youngs_modulus_ieee(stress: f64, strain: f64) -> f64 {
    stress / strain
}

/// A single measured stress/strain point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StressStrainSample {
    /// Applied stress
    pub stress: f64,
    /// Resulting strain (dimensionless)
    pub strain: f64,
}

impl StressStrainSample {
    pub fn new(stress: f64, strain: f64) -> Self {
        Self { stress, strain }
    }

    /// Young's modulus of this sample
    #[inline]
    pub fn modulus(&self) -> Result<f64, ModulusError> {
        youngs_modulus(self.stress, self.strain)
    }
}

impl From<(f64, f64)> for StressStrainSample {
    fn from((stress, strain): (f64, f64)) -> Self {
        Self::new(stress, strain)
    }
}
