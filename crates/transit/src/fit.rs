//! Log-posterior for a single transit candidate
//!
//! The fit vector is `[ln r, ln a, di]`. Working in log radius and log
//! semi-major axis keeps both positive for an unconstrained optimizer.
//! Priors are evaluated on the physical values; no Jacobian term is added.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use units::{Length, Time};

use crate::config::TransitFitConfig;
use crate::error::Result;
use crate::geometry;
use crate::limb_darkening::{LimbDarkening, QuadraticLimbDarkening};
use crate::observation::TransitObservation;
use crate::prior::{InclinationPrior, PowerLawPrior, Prior};
use crate::selection::SelectionFunction;
use crate::star::{Planet, Star};

/// Model observables for one star–planet pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitPrediction {
    pub period: Time,
    pub duration: Time,
    /// Flux decrement scaled by the star's flux
    pub depth: f64,
}

/// Point in fit space, `[ln r, ln a, di]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitParameters {
    pub ln_radius: f64,
    pub ln_semi_major_axis: f64,
    pub inclination_offset: f64,
}

impl FitParameters {
    pub fn from_array(p: &[f64; 3]) -> Self {
        Self {
            ln_radius: p[0],
            ln_semi_major_axis: p[1],
            inclination_offset: p[2],
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.ln_radius, self.ln_semi_major_axis, self.inclination_offset]
    }

    pub fn from_planet(planet: &Planet) -> Self {
        Self {
            ln_radius: planet.radius.ln(),
            ln_semi_major_axis: planet.semi_major_axis.ln(),
            inclination_offset: planet.inclination_offset,
        }
    }

    pub fn to_planet(&self) -> Planet {
        Planet::new(
            Length::from_solar_radii(self.ln_radius.exp()),
            Length::from_solar_radii(self.ln_semi_major_axis.exp()),
            self.inclination_offset,
        )
    }
}

/// Unnormalized log-posterior of a candidate's planet parameters
///
/// Combines a Gaussian likelihood on the observed duration and depth, the
/// survey selection efficiency, and priors on the semi-major axis, the
/// inclination offset and (optionally) the planet radius.
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use transit::{
///     InclinationPrior, Measurement, Planet, PowerLawPrior, SelectionFunction, Star,
///     TransitFit, TransitObservation,
/// };
/// use units::{Length, Mass};
///
/// let star = Star::new(1.0, Length::from_solar_radii(1.0), Mass::from_solar_masses(1.0), FRAC_PI_2).unwrap();
/// let observation = TransitObservation {
///     duration: Measurement::with_uncertainty(3.0, 0.1).unwrap(),
///     depth: Measurement::with_uncertainty(0.012, 0.001).unwrap(),
///     period: Measurement::with_uncertainty(88.0, 0.01).unwrap(),
/// };
/// let fit = TransitFit::new(
///     star,
///     observation,
///     SelectionFunction::new(1.0, 0.5, 1e-3, 1e-3).unwrap(),
///     PowerLawPrior::new(2.0, 1.0e4, -1.0).unwrap(),
///     InclinationPrior::new(1e-4).unwrap(),
/// );
///
/// let lnp = fit.log_posterior(&Planet::from_solar_radii(0.1, 10.0, 0.0));
/// assert!(lnp.is_finite());
/// ```
pub struct TransitFit {
    star: Star,
    observation: TransitObservation,
    selection: SelectionFunction,
    semi_major_axis_prior: Box<dyn Prior>,
    inclination_prior: Box<dyn Prior>,
    radius_prior: Option<Box<dyn Prior>>,
    limb_darkening: Box<dyn LimbDarkening>,
}

impl TransitFit {
    /// Creates a fit with quadratic limb darkening and no radius prior.
    pub fn new(
        star: Star,
        observation: TransitObservation,
        selection: SelectionFunction,
        semi_major_axis_prior: impl Prior + 'static,
        inclination_prior: impl Prior + 'static,
    ) -> Self {
        Self {
            star,
            observation,
            selection,
            semi_major_axis_prior: Box::new(semi_major_axis_prior),
            inclination_prior: Box::new(inclination_prior),
            radius_prior: None,
            limb_darkening: Box::new(QuadraticLimbDarkening::default()),
        }
    }

    /// Builds a fit from configuration, validating every component.
    pub fn from_config(
        config: &TransitFitConfig,
        star: Star,
        observation: TransitObservation,
    ) -> Result<Self> {
        let selection = SelectionFunction::try_from(config.selection)?;
        let a_prior = PowerLawPrior::try_from(config.semi_major_axis_prior)?;
        let di_prior = InclinationPrior::new(config.inclination_variance)?;
        let limb_darkening = QuadraticLimbDarkening::try_from(config.limb_darkening)?;

        let mut fit = Self::new(star, observation, selection, a_prior, di_prior)
            .with_limb_darkening(limb_darkening);
        if let Some(params) = config.radius_prior {
            fit = fit.with_radius_prior(PowerLawPrior::try_from(params)?);
        }

        debug!(
            star_radius = star.radius.to_solar_radii(),
            star_mass = star.mass.to_solar_masses(),
            radius_prior = config.radius_prior.is_some(),
            "built transit fit from config"
        );
        Ok(fit)
    }

    pub fn with_radius_prior(mut self, prior: impl Prior + 'static) -> Self {
        self.radius_prior = Some(Box::new(prior));
        self
    }

    pub fn with_limb_darkening(mut self, limb_darkening: impl LimbDarkening + 'static) -> Self {
        self.limb_darkening = Box::new(limb_darkening);
        self
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn observation(&self) -> &TransitObservation {
        &self.observation
    }

    /// Period, duration and flux-scaled depth of `planet` around the fit's star
    pub fn predict(&self, planet: &Planet) -> TransitPrediction {
        TransitPrediction {
            period: geometry::period(&self.star, planet),
            duration: geometry::duration(&self.star, planet),
            depth: geometry::depth(&self.star, planet, self.limb_darkening.as_ref())
                * self.star.flux,
        }
    }

    /// Unnormalized log-posterior density of `planet`
    ///
    /// Returns −∞ when the candidate is undetectable or any prior term is
    /// non-finite.
    pub fn log_posterior(&self, planet: &Planet) -> f64 {
        let prediction = self.predict(planet);
        let dt = prediction.duration.to_hours();
        let df = prediction.depth;

        let s = self.selection.efficiency(dt, df);
        if s == 0.0 {
            trace!(dt, df, "rejected by selection function");
            return f64::NEG_INFINITY;
        }

        let rp = match &self.radius_prior {
            Some(prior) => prior.ln_prob(planet.radius.to_solar_radii()),
            None => 0.0,
        };
        if !rp.is_finite() {
            trace!(r = planet.radius.to_solar_radii(), "rejected by radius prior");
            return f64::NEG_INFINITY;
        }

        let ap = self
            .semi_major_axis_prior
            .ln_prob(planet.semi_major_axis.to_solar_radii());
        if !ap.is_finite() {
            trace!(a = planet.semi_major_axis.to_solar_radii(), "rejected by semi-major axis prior");
            return f64::NEG_INFINITY;
        }

        let ip = self.inclination_prior.ln_prob(planet.inclination_offset);
        if !ip.is_finite() {
            trace!(di = planet.inclination_offset, "rejected by inclination prior");
            return f64::NEG_INFINITY;
        }

        let ln_like =
            self.observation.duration.ln_likelihood(dt) + self.observation.depth.ln_likelihood(df);

        ln_like + s.ln() + rp + ap + ip
    }

    /// Log-posterior at a fit-space point `[ln r, ln a, di]`
    pub fn ln_prob(&self, p: &[f64; 3]) -> f64 {
        self.log_posterior(&FitParameters::from_array(p).to_planet())
    }

    /// Optimizer objective, `−2·ln p`
    pub fn cost(&self, p: &[f64; 3]) -> f64 {
        -2.0 * self.ln_prob(p)
    }

    /// Heuristic starting point from the observed depth, duration and period
    ///
    /// `r0 = R·sqrt(δ/flux)` and `a0 = P·(r0 + R)/(π·T)` assume a central
    /// transit with no limb darkening.
    pub fn initial_guess(&self) -> FitParameters {
        let r_star = self.star.radius.to_solar_radii();
        let r0 = r_star * (self.observation.depth.value / self.star.flux).sqrt();
        let a0 = self.observation.period.value * (r0 + r_star)
            / (PI * self.observation.duration.value);

        FitParameters {
            ln_radius: r0.ln(),
            ln_semi_major_axis: a0.ln(),
            inclination_offset: 0.0,
        }
    }
}
