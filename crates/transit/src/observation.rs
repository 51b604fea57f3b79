//! Measured transit observables

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

/// A measured value with its inverse variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub value: f64,
    /// Inverse variance, `1/σ²`
    pub ivar: f64,
}

impl Measurement {
    pub fn new(value: f64, ivar: f64) -> Self {
        Self { value, ivar }
    }

    /// Builds a measurement from a value and its one-sigma uncertainty
    ///
    /// `sigma` must be positive and finite.
    pub fn with_uncertainty(value: f64, sigma: f64) -> Result<Self> {
        if sigma.is_nan() || sigma <= 0.0 || sigma.is_infinite() {
            return Err(TransitError::invalid(
                "sigma",
                sigma,
                "must be positive and finite",
            ));
        }
        Ok(Self::new(value, 1.0 / (sigma * sigma)))
    }

    /// Gaussian log-likelihood of a model prediction, `−½·(x − μ)²·ivar`
    pub fn ln_likelihood(&self, model: f64) -> f64 {
        let residual = self.value - model;
        -0.5 * residual * residual * self.ivar
    }
}

/// Observed transit of one candidate
///
/// Durations and periods are in hours; the depth is a fractional flux
/// decrement scaled by the star's flux.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitObservation {
    pub duration: Measurement,
    pub depth: Measurement,
    pub period: Measurement,
}
