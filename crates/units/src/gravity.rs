//! Gravitational constants and surface-gravity conversions

use crate::length::{Length, SOLAR_RADIUS_M};
use crate::mass::{Mass, SOLAR_MASS_KG};
use crate::time::SECONDS_PER_HOUR;

/// Solar standard gravitational parameter GM☉ in m³ s⁻² (IAU 2015)
pub const GM_SUN_SI: f64 = 1.327_124_400_18e20;

/// Newtonian constant of gravitation in m³ kg⁻¹ s⁻²
pub const G_SI: f64 = GM_SUN_SI / SOLAR_MASS_KG;

/// Gravitational constant in R☉³ M☉⁻¹ h⁻²
///
/// G ≈ 5.108 in these units, so a 1 M☉ star has a circular orbit at
/// 10 R☉ with a period of 2π·sqrt(1000 / G) ≈ 87.9 hours.
pub const G_SOLAR: f64 =
    GM_SUN_SI * SECONDS_PER_HOUR * SECONDS_PER_HOUR / (SOLAR_RADIUS_M * SOLAR_RADIUS_M * SOLAR_RADIUS_M);

/// Stellar mass from log surface gravity and radius
///
/// Catalogs quote `log g` in cgs (cm s⁻²). The mass follows from
/// `g = G M / r²`.
///
/// # Arguments
/// * `log_g` - log₁₀ of the surface gravity in cm s⁻²
/// * `radius` - Stellar radius
///
/// # Examples
/// ```
/// use units::{gravity::mass_from_surface_gravity, Length};
///
/// // The Sun: log g ≈ 4.438
/// let mass = mass_from_surface_gravity(4.438, Length::from_solar_radii(1.0));
/// assert!((mass.to_solar_masses() - 1.0).abs() < 0.01);
/// ```
pub fn mass_from_surface_gravity(log_g: f64, radius: Length) -> Mass {
    let g = 10f64.powf(log_g - 2.0); // cm s⁻² to m s⁻²
    let r = radius.to_meters();
    Mass::from_kg(g * r * r / G_SI)
}

/// Surface gravity `log g` (cgs) for a given mass and radius
pub fn surface_gravity(mass: Mass, radius: Length) -> f64 {
    let r = radius.to_meters();
    let g = G_SI * mass.to_kg() / (r * r);
    g.log10() + 2.0
}
