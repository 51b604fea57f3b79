pub mod gravity;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod time_test;

pub use gravity::{mass_from_surface_gravity, G_SOLAR};
pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_KG};
pub use time::Time;
