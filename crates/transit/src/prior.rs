//! Parameter priors
//!
//! Every prior exposes the same two capabilities: an (unnormalized) log
//! density and, where it makes sense, i.i.d. sampling.

use rand::Rng;
use rand_chacha::ChaChaRng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

/// A prior distribution over a single scalar model parameter
///
/// `ln_prob` returns `f64::NEG_INFINITY` for values with zero prior support.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use transit::{InclinationPrior, Prior};
///
/// let prior = InclinationPrior::new(0.01).unwrap();
/// assert!(prior.ln_prob(0.0) > prior.ln_prob(0.1));
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let draws = prior.sample(&mut rng, 5).unwrap();
/// assert_eq!(draws.len(), 5);
/// ```
pub trait Prior: Send + Sync {
    /// Log prior density at `x`
    fn ln_prob(&self, x: f64) -> f64;

    /// Draws `size` independent values
    fn sample(&self, rng: &mut ChaChaRng, size: usize) -> Result<Vec<f64>>;
}

/// Zero-mean Gaussian prior on the inclination offset
///
/// `ln p(i) = −½·i²/σ² − ln σ`. The `−½·ln 2π` term is dropped; it is a
/// constant and does not move the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InclinationPriorParams", into = "InclinationPriorParams")]
pub struct InclinationPrior {
    variance: f64,
    ivar: f64,
    std: f64,
}

/// Serialized form of [`InclinationPrior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclinationPriorParams {
    pub variance: f64,
}

impl InclinationPrior {
    pub fn new(variance: f64) -> Result<Self> {
        if variance.is_nan() || variance <= 0.0 || variance.is_infinite() {
            return Err(TransitError::invalid(
                "variance",
                variance,
                "must be positive and finite",
            ));
        }

        Ok(Self {
            variance,
            ivar: 1.0 / variance,
            std: variance.sqrt(),
        })
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.std
    }
}

impl TryFrom<InclinationPriorParams> for InclinationPrior {
    type Error = TransitError;

    fn try_from(params: InclinationPriorParams) -> Result<Self> {
        Self::new(params.variance)
    }
}

impl From<InclinationPrior> for InclinationPriorParams {
    fn from(prior: InclinationPrior) -> Self {
        Self {
            variance: prior.variance,
        }
    }
}

impl Prior for InclinationPrior {
    fn ln_prob(&self, i: f64) -> f64 {
        -0.5 * i * i * self.ivar - self.std.ln()
    }

    fn sample(&self, rng: &mut ChaChaRng, size: usize) -> Result<Vec<f64>> {
        Ok((0..size)
            .map(|_| self.std * rng.sample::<f64, _>(StandardNormal))
            .collect())
    }
}

/// Bounded power-law prior, `p(x) ∝ x^α` on `[min, max]` with `min > 0`
///
/// Values outside the bounds have zero support and a log density of −∞.
/// Sampling is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PowerLawParams", into = "PowerLawParams")]
pub struct PowerLawPrior {
    min: f64,
    max: f64,
    alpha: f64,
}

/// Serialized form of [`PowerLawPrior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLawParams {
    pub min: f64,
    pub max: f64,
    pub alpha: f64,
}

impl PowerLawPrior {
    pub fn new(min: f64, max: f64, alpha: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min >= max {
            return Err(TransitError::invalid("min", min, "must be below max"));
        }
        if min <= 0.0 {
            return Err(TransitError::invalid("min", min, "support must be positive"));
        }
        if alpha.is_nan() {
            return Err(TransitError::invalid("alpha", alpha, "must be a number"));
        }

        Ok(Self { min, max, alpha })
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

impl TryFrom<PowerLawParams> for PowerLawPrior {
    type Error = TransitError;

    fn try_from(params: PowerLawParams) -> Result<Self> {
        Self::new(params.min, params.max, params.alpha)
    }
}

impl From<PowerLawPrior> for PowerLawParams {
    fn from(prior: PowerLawPrior) -> Self {
        Self {
            min: prior.min,
            max: prior.max,
            alpha: prior.alpha,
        }
    }
}

impl Prior for PowerLawPrior {
    fn ln_prob(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NEG_INFINITY;
        }
        self.alpha * x.ln()
    }

    fn sample(&self, _rng: &mut ChaChaRng, _size: usize) -> Result<Vec<f64>> {
        Err(TransitError::Unsupported {
            operation: "power-law prior sampling",
        })
    }
}
