//! Transit detection model for exoplanet candidates.
//!
//! Computes the period, duration and depth of a planet's transit across its
//! host star, and scores candidate planet parameters against observed
//! transits with a log-posterior built from a Gaussian likelihood, a
//! detection-efficiency model and parameter priors.

pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod limb_darkening;
pub mod observation;
pub mod prior;
pub mod selection;
pub mod star;

#[cfg(test)]
mod fit_test;

pub use config::TransitFitConfig;
pub use error::{Result, TransitError};
pub use fit::{FitParameters, TransitFit, TransitPrediction};
pub use limb_darkening::{LimbDarkening, QuadraticLaw, QuadraticLimbDarkening, UniformDisk};
pub use observation::{Measurement, TransitObservation};
pub use prior::{InclinationPrior, PowerLawPrior, Prior};
pub use selection::SelectionFunction;
pub use star::{flux_from_magnitude, Planet, Star, StarParams};
