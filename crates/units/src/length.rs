use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Solar radius in meters (IAU 2015 nominal value)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Astronomical unit in meters
pub const AU_TO_M: f64 = 1.495_978_707e11;

/// AU in solar radii: 1 AU ≈ 215.03 R☉
pub const AU_TO_SOLAR_RADIUS: f64 = AU_TO_M / SOLAR_RADIUS_M;

/// A physical length quantity using f64 precision.
///
/// `Length` uses solar radii as the base unit. Stellar radii, planet radii
/// and the semi-major axes of short-period transiting planets all live
/// comfortably in that scale.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let sun = Length::from_solar_radii(1.0);
/// let earth_orbit = Length::from_au(1.0);
///
/// // Roughly 215 solar radii to an AU
/// let ratio = earth_orbit / sun;
/// assert!((ratio - 215.03).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: solar radii

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_SOLAR_RADIUS)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / SOLAR_RADIUS_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self::from_meters(value * 1000.0)
    }

    /// Returns the length in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_SOLAR_RADIUS
    }

    /// Converts the length to meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * SOLAR_RADIUS_M
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.to_meters() / 1000.0
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Natural logarithm of the value in solar radii
    pub fn ln(&self) -> f64 {
        self.0.ln()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
