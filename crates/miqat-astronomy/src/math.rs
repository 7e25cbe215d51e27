//! Degree-based trigonometry and range reduction.

/// Reduces an angle to [0, 360) degrees.
pub fn fix_angle(angle: f64) -> f64 {
    fix(angle, 360.0)
}

/// Reduces a fractional-hour value to [0, 24).
pub fn fix_hour(hours: f64) -> f64 {
    fix(hours, 24.0)
}

fn fix(value: f64, period: f64) -> f64 {
    let reduced = value - period * (value / period).floor();
    if reduced < 0.0 { reduced + period } else { reduced }
}

pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

pub(crate) fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

pub(crate) fn arcsin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

pub(crate) fn arccos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// arccot via atan(1/x), keeping the reference branch for negative x.
pub(crate) fn arccot_deg(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

pub(crate) fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}
