use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, G_SOLAR};

use crate::config::TransitFitConfig;
use crate::error::{Result, TransitError};
use crate::fit::{FitParameters, TransitFit};
use crate::limb_darkening::UniformDisk;
use crate::observation::{Measurement, TransitObservation};
use crate::prior::{InclinationPrior, PowerLawPrior, Prior};
use crate::selection::SelectionFunction;
use crate::star::{Planet, Star};

fn sun() -> Star {
    Star::new(
        1.0,
        Length::from_solar_radii(1.0),
        Mass::from_solar_masses(1.0),
        FRAC_PI_2,
    )
    .unwrap()
}

fn observation() -> TransitObservation {
    TransitObservation {
        duration: Measurement::with_uncertainty(3.0, 0.1).unwrap(),
        depth: Measurement::with_uncertainty(0.012, 0.001).unwrap(),
        period: Measurement::with_uncertainty(87.9, 0.1).unwrap(),
    }
}

fn fit_with_selection(selection: SelectionFunction) -> TransitFit {
    TransitFit::new(
        sun(),
        observation(),
        selection,
        PowerLawPrior::new(2.0, 1.0e4, -1.0).unwrap(),
        InclinationPrior::new(1.0e-4).unwrap(),
    )
}

fn bracketing_fit() -> TransitFit {
    fit_with_selection(SelectionFunction::new(1.0, 0.5, 1.0e-3, 1.0e-3).unwrap())
}

fn reference_planet() -> Planet {
    Planet::from_solar_radii(0.1, 10.0, 0.0)
}

/// A prior that rejects everything
struct Forbidden;

impl Prior for Forbidden {
    fn ln_prob(&self, _x: f64) -> f64 {
        f64::NEG_INFINITY
    }

    fn sample(&self, _rng: &mut ChaChaRng, _size: usize) -> Result<Vec<f64>> {
        Err(TransitError::Unsupported {
            operation: "sampling a forbidden prior",
        })
    }
}

/// A prior with a fixed log density
struct Constant(f64);

impl Prior for Constant {
    fn ln_prob(&self, _x: f64) -> f64 {
        self.0
    }

    fn sample(&self, _rng: &mut ChaChaRng, _size: usize) -> Result<Vec<f64>> {
        Err(TransitError::Unsupported {
            operation: "sampling a constant prior",
        })
    }
}

#[test]
fn end_to_end_prediction_for_sun_like_star() {
    let fit = bracketing_fit();
    let prediction = fit.predict(&reference_planet());

    let expected_period = 2.0 * PI * (1000.0 / G_SOLAR).sqrt();
    assert_relative_eq!(prediction.period.to_hours(), expected_period, max_relative = 1e-12);

    let duration = prediction.duration.to_hours();
    assert!(duration.is_finite() && duration > 0.0);
    assert!(prediction.depth.is_finite() && prediction.depth > 0.0);
}

#[test]
fn end_to_end_log_posterior_is_finite_with_bracketing_thresholds() {
    let fit = bracketing_fit();
    let lnp = fit.log_posterior(&reference_planet());

    assert!(lnp.is_finite(), "log posterior {} should be finite", lnp);
}

#[test]
fn end_to_end_log_posterior_is_negative_infinity_with_far_thresholds() {
    let fit = fit_with_selection(SelectionFunction::new(1.0e3, 1.0, 0.5, 1.0e-2).unwrap());

    assert_eq!(fit.log_posterior(&reference_planet()), f64::NEG_INFINITY);
}

#[test]
fn log_posterior_sums_likelihood_selection_and_priors() {
    let selection = SelectionFunction::new(1.0, 0.5, 1.0e-3, 1.0e-3).unwrap();
    let a_prior = PowerLawPrior::new(2.0, 1.0e4, -1.0).unwrap();
    let di_prior = InclinationPrior::new(1.0e-4).unwrap();
    let fit = bracketing_fit();

    let planet = Planet::from_solar_radii(0.1, 10.0, 0.002);
    let prediction = fit.predict(&planet);
    let dt = prediction.duration.to_hours();
    let df = prediction.depth;

    let obs = observation();
    let expected = -0.5 * (obs.duration.value - dt).powi(2) * obs.duration.ivar
        - 0.5 * (obs.depth.value - df).powi(2) * obs.depth.ivar
        + selection.efficiency(dt, df).ln()
        + a_prior.ln_prob(10.0)
        + di_prior.ln_prob(0.002);

    assert_relative_eq!(fit.log_posterior(&planet), expected, max_relative = 1e-12);
}

#[test]
fn log_posterior_prefers_the_observed_transit() {
    let fit = bracketing_fit();

    let near = fit.log_posterior(&reference_planet());
    let far = fit.log_posterior(&Planet::from_solar_radii(0.2, 30.0, 0.0));
    assert!(near > far);
}

#[test]
fn non_transiting_geometry_is_rejected() {
    let fit = bracketing_fit();
    // Impact parameter ≈ 3, no transit: duration is NaN
    let planet = Planet::from_solar_radii(0.1, 10.0, -0.3);

    assert!(fit.predict(&planet).duration.to_hours().is_nan());
    assert_eq!(fit.log_posterior(&planet), f64::NEG_INFINITY);
}

#[test]
fn semi_major_axis_outside_prior_is_rejected() {
    let fit = bracketing_fit();
    let planet = Planet::from_solar_radii(0.1, 1.5, 0.0);

    assert_eq!(fit.log_posterior(&planet), f64::NEG_INFINITY);
}

#[test]
fn radius_prior_rejects_small_planets() {
    let fit = bracketing_fit().with_radius_prior(PowerLawPrior::new(0.2, 1.0, 0.0).unwrap());

    assert_eq!(fit.log_posterior(&reference_planet()), f64::NEG_INFINITY);

    let accepting = bracketing_fit().with_radius_prior(PowerLawPrior::new(0.05, 1.0, 0.0).unwrap());
    assert!(accepting.log_posterior(&reference_planet()).is_finite());
}

#[test]
fn inclination_prior_rejection_short_circuits() {
    let fit = TransitFit::new(
        sun(),
        observation(),
        SelectionFunction::new(1.0, 0.5, 1.0e-3, 1.0e-3).unwrap(),
        PowerLawPrior::new(2.0, 1.0e4, -1.0).unwrap(),
        Forbidden,
    );

    assert_eq!(fit.log_posterior(&reference_planet()), f64::NEG_INFINITY);
}

#[test]
fn fit_parameters_live_in_log_space() {
    let planet = Planet::from_solar_radii(0.1, 10.0, 0.01);
    let params = FitParameters::from_planet(&planet);

    assert_relative_eq!(params.ln_radius, 0.1f64.ln());
    assert_relative_eq!(params.ln_semi_major_axis, 10f64.ln());

    let restored = FitParameters::from_array(&params.to_array()).to_planet();
    assert_relative_eq!(restored.radius.to_solar_radii(), 0.1, max_relative = 1e-12);
    assert_relative_eq!(restored.semi_major_axis.to_solar_radii(), 10.0, max_relative = 1e-12);
    assert_relative_eq!(restored.inclination_offset, 0.01);
}

#[test]
fn ln_prob_and_cost_agree_with_log_posterior() {
    let fit = bracketing_fit();
    let planet = Planet::from_solar_radii(0.1, 10.0, 0.003);
    let p = FitParameters::from_planet(&planet).to_array();

    let lnp = fit.log_posterior(&planet);
    assert_relative_eq!(fit.ln_prob(&p), lnp, max_relative = 1e-9);
    assert_relative_eq!(fit.cost(&p), -2.0 * lnp, max_relative = 1e-9);
}

#[test]
fn initial_guess_recovers_central_transit() {
    let star = sun();
    let planet = reference_planet();
    let probe = bracketing_fit().with_limb_darkening(UniformDisk);
    let prediction = probe.predict(&planet);

    // Observe the model exactly; the heuristic ignores limb darkening
    let observed = TransitObservation {
        duration: Measurement::with_uncertainty(prediction.duration.to_hours(), 0.1).unwrap(),
        depth: Measurement::with_uncertainty(prediction.depth, 1e-4).unwrap(),
        period: Measurement::with_uncertainty(prediction.period.to_hours(), 0.01).unwrap(),
    };
    let fit = TransitFit::from_config(&TransitFitConfig::default(), star, observed).unwrap();

    let guess = fit.initial_guess().to_planet();
    assert_relative_eq!(guess.radius.to_solar_radii(), 0.1, max_relative = 1e-9);
    assert_relative_eq!(guess.semi_major_axis.to_solar_radii(), 10.0, max_relative = 0.01);
    assert_eq!(guess.inclination_offset, 0.0);
    assert!(fit.ln_prob(&fit.initial_guess().to_array()).is_finite());
}

#[test]
fn non_finite_prior_terms_are_rejected() {
    let tiny_planet = [-800.0, 10f64.ln(), 0.0];

    for value in [f64::INFINITY, f64::NAN] {
        let fit = bracketing_fit().with_radius_prior(Constant(value));
        assert_eq!(
            fit.ln_prob(&tiny_planet),
            f64::NEG_INFINITY,
            "radius prior term {} should reject",
            value
        );
        assert_eq!(fit.cost(&tiny_planet), f64::INFINITY);

        let fit = TransitFit::new(
            sun(),
            observation(),
            SelectionFunction::new(1.0, 0.5, 1.0e-3, 1.0e-3).unwrap(),
            Constant(value),
            InclinationPrior::new(1.0e-4).unwrap(),
        );
        assert_eq!(fit.log_posterior(&reference_planet()), f64::NEG_INFINITY);
    }
}

#[test]
fn radius_prior_must_have_positive_support() {
    assert!(matches!(
        PowerLawPrior::new(0.0, 1.0, -1.0),
        Err(TransitError::InvalidParameter { name: "min", .. })
    ));

    let mut config = TransitFitConfig::default();
    config.radius_prior = Some(crate::prior::PowerLawParams {
        min: 0.0,
        max: 1.0,
        alpha: -1.0,
    });
    assert!(TransitFit::from_config(&config, sun(), observation()).is_err());
}

#[test]
fn fit_exposes_star_and_observation() {
    let fit = bracketing_fit();

    assert_eq!(*fit.star(), sun());
    assert_eq!(*fit.observation(), observation());
}
