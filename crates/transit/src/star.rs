//! Host star and candidate planet records

use serde::{Deserialize, Serialize};
use units::{mass_from_surface_gravity, Length, Mass};

use crate::error::{Result, TransitError};

/// Host star of a transit candidate.
///
/// An immutable record built from catalog fields. `flux` is the brightness
/// relative to a zero-magnitude star and scales every observed flux
/// decrement.
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use transit::Star;
/// use units::{Length, Mass};
///
/// let sun = Star::new(
///     1.0,
///     Length::from_solar_radii(1.0),
///     Mass::from_solar_masses(1.0),
///     FRAC_PI_2,
/// )
/// .unwrap();
/// assert_eq!(sun.radius.to_solar_radii(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StarParams", into = "StarParams")]
pub struct Star {
    /// Relative brightness
    pub flux: f64,
    pub radius: Length,
    pub mass: Mass,
    /// Reference inclination of the system's orbital plane (radians)
    pub inclination: f64,
}

impl Star {
    /// Creates a star, rejecting non-positive flux or radius.
    pub fn new(flux: f64, radius: Length, mass: Mass, inclination: f64) -> Result<Self> {
        if flux.is_nan() || flux <= 0.0 {
            return Err(TransitError::invalid("flux", flux, "must be positive"));
        }
        let r = radius.to_solar_radii();
        if r.is_nan() || r <= 0.0 {
            return Err(TransitError::invalid("radius", r, "must be positive"));
        }

        Ok(Self {
            flux,
            radius,
            mass,
            inclination,
        })
    }

    /// Creates a star whose mass is derived from catalog `log g` (cgs).
    pub fn from_surface_gravity(
        flux: f64,
        radius: Length,
        log_g: f64,
        inclination: f64,
    ) -> Result<Self> {
        Self::new(flux, radius, mass_from_surface_gravity(log_g, radius), inclination)
    }

    /// Creates a star from a Kepler-band magnitude, `flux = 10^(-0.4 Kp)`.
    pub fn from_kepler_magnitude(
        kepmag: f64,
        radius: Length,
        log_g: f64,
        inclination: f64,
    ) -> Result<Self> {
        Self::from_surface_gravity(flux_from_magnitude(kepmag), radius, log_g, inclination)
    }
}

/// Serialized form of [`Star`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarParams {
    pub flux: f64,
    pub radius: Length,
    pub mass: Mass,
    pub inclination: f64,
}

impl TryFrom<StarParams> for Star {
    type Error = TransitError;

    fn try_from(params: StarParams) -> Result<Self> {
        Self::new(params.flux, params.radius, params.mass, params.inclination)
    }
}

impl From<Star> for StarParams {
    fn from(star: Star) -> Self {
        Self {
            flux: star.flux,
            radius: star.radius,
            mass: star.mass,
            inclination: star.inclination,
        }
    }
}

/// Relative flux of a source with the given apparent magnitude
pub fn flux_from_magnitude(magnitude: f64) -> f64 {
    10f64.powf(-0.4 * magnitude)
}

/// Candidate transiting planet.
///
/// Planets carry no reference to their host; every evaluation takes the
/// star explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub radius: Length,
    pub semi_major_axis: Length,
    /// Deviation from the star's reference inclination (radians)
    pub inclination_offset: f64,
}

impl Planet {
    pub fn new(radius: Length, semi_major_axis: Length, inclination_offset: f64) -> Self {
        Self {
            radius,
            semi_major_axis,
            inclination_offset,
        }
    }

    /// Convenience constructor with lengths in solar radii
    pub fn from_solar_radii(radius: f64, semi_major_axis: f64, inclination_offset: f64) -> Self {
        Self::new(
            Length::from_solar_radii(radius),
            Length::from_solar_radii(semi_major_axis),
            inclination_offset,
        )
    }
}
