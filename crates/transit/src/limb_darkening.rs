//! Limb-darkened transit depths
//!
//! The stellar disk is split into `bins` concentric annuli of equal width,
//! each with a constant intensity taken from the limb-darkening law at the
//! annulus midpoint. The flux blocked by the planet is the intensity-weighted
//! area of overlap between the planet's disk and each annulus.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransitError};

/// A source of fractional flux decrements for an occulting disk
///
/// Implementors map a radius ratio `k = r/R` and an impact parameter `b`
/// (both in stellar radii) to the fraction of stellar flux blocked.
pub trait LimbDarkening: Send + Sync {
    /// Fractional flux decrement in `[0, 1]`
    fn depth(&self, radius_ratio: f64, impact_parameter: f64) -> f64;
}

/// Area of overlap between a disk of radius `r` at the origin and a disk of
/// radius `p` whose center lies at distance `b`
pub fn overlap_area(r: f64, p: f64, b: f64) -> f64 {
    if r <= 0.0 || p <= 0.0 || b >= r + p {
        return 0.0;
    }
    if b <= (r - p).abs() {
        let smaller = r.min(p);
        return PI * smaller * smaller;
    }

    let r2 = r * r;
    let p2 = p * p;
    let b2 = b * b;
    let alpha = ((b2 + r2 - p2) / (2.0 * b * r)).clamp(-1.0, 1.0).acos();
    let beta = ((b2 + p2 - r2) / (2.0 * b * p)).clamp(-1.0, 1.0).acos();
    let kite = ((-b + r + p) * (b + r - p) * (b - r + p) * (b + r + p)).max(0.0);

    r2 * alpha + p2 * beta - 0.5 * kite.sqrt()
}

/// Stellar disk with constant surface brightness
///
/// The depth is the exact overlap fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UniformDisk;

impl LimbDarkening for UniformDisk {
    fn depth(&self, radius_ratio: f64, impact_parameter: f64) -> f64 {
        overlap_area(1.0, radius_ratio, impact_parameter) / PI
    }
}

/// Quadratic law coefficients, the serialized form of [`QuadraticLimbDarkening`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadraticLaw {
    #[serde(default = "default_bins")]
    pub bins: usize,
    #[serde(default = "default_u1")]
    pub u1: f64,
    #[serde(default = "default_u2")]
    pub u2: f64,
}

fn default_bins() -> usize {
    10
}

fn default_u1() -> f64 {
    0.39
}

fn default_u2() -> f64 {
    0.1
}

impl Default for QuadraticLaw {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            u1: default_u1(),
            u2: default_u2(),
        }
    }
}

/// Quadratic limb darkening, `I(μ) = 1 − u1(1 − μ) − u2(1 − μ)²`
///
/// The binned intensity profile is tabulated once at construction.
///
/// # Examples
///
/// ```
/// use transit::{LimbDarkening, QuadraticLimbDarkening};
///
/// let ld = QuadraticLimbDarkening::default();
///
/// // A central transit is deeper than k² because the center is brighter
/// let depth = ld.depth(0.1, 0.0);
/// assert!(depth > 0.01);
///
/// // No overlap, no depth
/// assert_eq!(ld.depth(0.1, 2.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuadraticLaw", into = "QuadraticLaw")]
pub struct QuadraticLimbDarkening {
    law: QuadraticLaw,
    /// Outer radius of each annulus
    radii: Vec<f64>,
    /// Surface brightness of each annulus
    intensity: Vec<f64>,
    /// Total flux of the unocculted disk
    norm: f64,
}

impl QuadraticLimbDarkening {
    /// Tabulates the quadratic law over `bins` annuli.
    ///
    /// Coefficients that make any annulus darker than zero are rejected.
    pub fn new(bins: usize, u1: f64, u2: f64) -> Result<Self> {
        if bins == 0 {
            return Err(TransitError::invalid(
                "bins",
                bins as f64,
                "need at least one annulus",
            ));
        }
        for (name, u) in [("u1", u1), ("u2", u2)] {
            if !u.is_finite() {
                return Err(TransitError::invalid(name, u, "must be finite"));
            }
        }

        let ld = Self::tabulate(QuadraticLaw { bins, u1, u2 });
        if ld.intensity.iter().any(|&i| i < 0.0) || ld.norm <= 0.0 {
            return Err(TransitError::invalid(
                "u1",
                u1,
                "coefficients give negative surface brightness",
            ));
        }
        Ok(ld)
    }

    fn tabulate(law: QuadraticLaw) -> Self {
        let width = 1.0 / law.bins as f64;
        let radii: Vec<f64> = (1..=law.bins).map(|j| j as f64 * width).collect();
        let intensity: Vec<f64> = radii
            .iter()
            .map(|&r| {
                let mid = r - 0.5 * width;
                let one_minus_mu = 1.0 - (1.0 - mid * mid).sqrt();
                1.0 - law.u1 * one_minus_mu - law.u2 * one_minus_mu * one_minus_mu
            })
            .collect();

        let norm = std::iter::once(0.0)
            .chain(radii.iter().copied())
            .zip(&radii)
            .zip(&intensity)
            .map(|((inner, outer), i)| i * PI * (outer * outer - inner * inner))
            .sum();

        Self {
            law,
            radii,
            intensity,
            norm,
        }
    }

    pub fn law(&self) -> QuadraticLaw {
        self.law
    }

    /// Outer radii and intensities of the tabulated annuli
    pub fn profile(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radii.iter().copied().zip(self.intensity.iter().copied())
    }
}

impl Default for QuadraticLimbDarkening {
    fn default() -> Self {
        Self::tabulate(QuadraticLaw::default())
    }
}

impl TryFrom<QuadraticLaw> for QuadraticLimbDarkening {
    type Error = TransitError;

    fn try_from(law: QuadraticLaw) -> Result<Self> {
        Self::new(law.bins, law.u1, law.u2)
    }
}

impl From<QuadraticLimbDarkening> for QuadraticLaw {
    fn from(ld: QuadraticLimbDarkening) -> Self {
        ld.law
    }
}

impl LimbDarkening for QuadraticLimbDarkening {
    fn depth(&self, radius_ratio: f64, impact_parameter: f64) -> f64 {
        let p = radius_ratio;
        let b = impact_parameter.abs();

        let mut blocked = 0.0;
        let mut inner_area = 0.0;
        for (&outer, intensity) in self.radii.iter().zip(&self.intensity) {
            let outer_area = overlap_area(outer, p, b);
            blocked += intensity * (outer_area - inner_area);
            inner_area = outer_area;
        }

        blocked / self.norm
    }
}
