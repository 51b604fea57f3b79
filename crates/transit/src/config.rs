//! Fit configuration

use serde::{Deserialize, Serialize};

use crate::limb_darkening::QuadraticLaw;
use crate::prior::PowerLawParams;
use crate::selection::SelectionParams;

/// Hyperparameters for a [`crate::TransitFit`]
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
///
/// # Examples
///
/// ```
/// use transit::TransitFitConfig;
///
/// let config = TransitFitConfig::default();
/// assert_eq!(config.limb_darkening.bins, 10);
/// assert!(config.radius_prior.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitFitConfig {
    #[serde(default = "default_selection")]
    pub selection: SelectionParams,
    /// Power law on the semi-major axis in solar radii
    #[serde(default = "default_semi_major_axis_prior")]
    pub semi_major_axis_prior: PowerLawParams,
    /// Variance of the inclination-offset prior (rad²)
    #[serde(default = "default_inclination_variance")]
    pub inclination_variance: f64,
    /// Optional power law on the planet radius in solar radii
    #[serde(default)]
    pub radius_prior: Option<PowerLawParams>,
    #[serde(default)]
    pub limb_darkening: QuadraticLaw,
}

fn default_selection() -> SelectionParams {
    SelectionParams {
        t0: 1.0,
        tw: 0.5,
        f0: 1.0e-4,
        fw: 5.0e-5,
    }
}

fn default_semi_major_axis_prior() -> PowerLawParams {
    PowerLawParams {
        min: 2.0,
        max: 1.0e4,
        alpha: -1.0,
    }
}

fn default_inclination_variance() -> f64 {
    1.0e-4
}

impl Default for TransitFitConfig {
    fn default() -> Self {
        Self {
            selection: default_selection(),
            semi_major_axis_prior: default_semi_major_axis_prior(),
            inclination_variance: default_inclination_variance(),
            radius_prior: None,
            limb_darkening: QuadraticLaw::default(),
        }
    }
}
