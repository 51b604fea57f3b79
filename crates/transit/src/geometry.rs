//! Closed-form transit geometry
//!
//! Free functions over `(Star, Planet)` records: orbital period from
//! Kepler's third law, impact parameter, transit duration and depth.
//!
//! Non-transiting geometry is not trapped. When the impact parameter
//! exceeds `1 + r/R` (or the chord is longer than the orbit allows) the
//! duration is NaN, exactly as the underlying `sqrt`/`asin` report it.
//! Use [`is_transiting`] to test the geometry up front.

use std::f64::consts::PI;

use units::{Time, G_SOLAR};

use crate::limb_darkening::LimbDarkening;
use crate::star::{Planet, Star};

/// Orbital period, `P = 2π·sqrt(a³ / (G·M))`
///
/// # Examples
///
/// ```
/// use transit::{geometry::period, Planet, Star};
/// use units::{Length, Mass};
///
/// let star = Star::new(1.0, Length::from_solar_radii(1.0), Mass::from_solar_masses(1.0), 1.5).unwrap();
/// let planet = Planet::from_solar_radii(0.1, 10.0, 0.0);
///
/// // About 3.7 days
/// assert!((period(&star, &planet).to_hours() - 87.9).abs() < 0.1);
/// ```
pub fn period(star: &Star, planet: &Planet) -> Time {
    let a3 = planet.semi_major_axis.powi(3);
    let gm = G_SOLAR * star.mass.to_solar_masses();
    Time::from_hours(2.0 * PI * (a3 / gm).sqrt())
}

/// Absolute inclination of the planet's orbit, `|i + di|`
pub fn inclination(star: &Star, planet: &Planet) -> f64 {
    (star.inclination + planet.inclination_offset).abs()
}

/// Impact parameter in stellar radii, `b = (a/R) / tan(i)`
///
/// Signed: orbits tilted past edge-on give negative values.
pub fn impact_parameter(star: &Star, planet: &Planet) -> f64 {
    (planet.semi_major_axis / star.radius) / inclination(star, planet).tan()
}

/// Planet-to-star radius ratio `k = r/R`
pub fn radius_ratio(star: &Star, planet: &Planet) -> f64 {
    planet.radius / star.radius
}

/// True when the planet's disk crosses the stellar disk, `|b| <= 1 + r/R`
pub fn is_transiting(star: &Star, planet: &Planet) -> bool {
    impact_parameter(star, planet).abs() <= 1.0 + radius_ratio(star, planet)
}

/// Total transit duration (first to fourth contact)
///
/// `T = P·asin((R/a)·sqrt((1 + r/R)² − b²)) / π`
///
/// NaN for non-transiting geometry.
pub fn duration(star: &Star, planet: &Planet) -> Time {
    let b = impact_parameter(star, planet);
    let one_plus_k = 1.0 + radius_ratio(star, planet);
    let chord = (one_plus_k * one_plus_k - b * b).sqrt();
    let arg = (star.radius / planet.semi_major_axis) * chord;

    period(star, planet) * (arg.asin() / PI)
}

/// Fractional transit depth for the given limb-darkening law
///
/// Zero when the disks do not overlap.
pub fn depth(star: &Star, planet: &Planet, limb_darkening: &dyn LimbDarkening) -> f64 {
    let b = impact_parameter(star, planet).abs();
    limb_darkening.depth(radius_ratio(star, planet), b)
}
