//! Survey detection efficiency

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TransitError};

/// Smooth step, `0.5 + 0.5·tanh((x − x0)/w)`
pub fn tanh_step(x: f64, x0: f64, width: f64) -> f64 {
    0.5 + 0.5 * ((x - x0) / width).tanh()
}

/// Detection efficiency as a function of transit duration and depth
///
/// The product of two independent turn-on curves, one in duration and one
/// in depth. Non-finite inputs (non-transiting geometry) are undetectable
/// and map to exactly zero.
///
/// # Examples
///
/// ```
/// use transit::SelectionFunction;
///
/// let selection = SelectionFunction::new(2.0, 0.5, 1e-4, 5e-5).unwrap();
///
/// assert_eq!(selection.efficiency(2.0, 1e-4), 0.25);
/// assert_eq!(selection.efficiency(f64::NAN, 1e-4), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SelectionParams", into = "SelectionParams")]
pub struct SelectionFunction {
    t0: f64,
    tw: f64,
    f0: f64,
    fw: f64,
}

/// Serialized form of [`SelectionFunction`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionParams {
    /// Duration threshold (hours)
    pub t0: f64,
    /// Duration turn-on width (hours)
    pub tw: f64,
    /// Depth threshold (fractional flux)
    pub f0: f64,
    /// Depth turn-on width
    pub fw: f64,
}

impl SelectionFunction {
    /// Creates a selection function; both widths must be nonzero.
    pub fn new(t0: f64, tw: f64, f0: f64, fw: f64) -> Result<Self> {
        for (name, width) in [("tw", tw), ("fw", fw)] {
            if width == 0.0 || !width.is_finite() {
                return Err(TransitError::invalid(name, width, "width must be nonzero and finite"));
            }
        }
        for (name, threshold) in [("t0", t0), ("f0", f0)] {
            if threshold.is_nan() {
                return Err(TransitError::invalid(name, threshold, "must be a number"));
            }
        }

        Ok(Self { t0, tw, f0, fw })
    }

    /// Probability that a transit of duration `dt` (hours) and depth `df` is detected
    pub fn efficiency(&self, dt: f64, df: f64) -> f64 {
        if !dt.is_finite() || !df.is_finite() {
            debug!(dt, df, "non-finite transit observables are undetectable");
            return 0.0;
        }
        tanh_step(dt, self.t0, self.tw) * tanh_step(df, self.f0, self.fw)
    }

    pub fn duration_threshold(&self) -> f64 {
        self.t0
    }

    pub fn depth_threshold(&self) -> f64 {
        self.f0
    }
}

impl TryFrom<SelectionParams> for SelectionFunction {
    type Error = TransitError;

    fn try_from(params: SelectionParams) -> Result<Self> {
        Self::new(params.t0, params.tw, params.f0, params.fw)
    }
}

impl From<SelectionFunction> for SelectionParams {
    fn from(selection: SelectionFunction) -> Self {
        Self {
            t0: selection.t0,
            tw: selection.tw,
            f0: selection.f0,
            fw: selection.fw,
        }
    }
}
