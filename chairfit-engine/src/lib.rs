pub mod archetype;
pub mod bmi;
pub mod plan;
pub mod pricing;
pub mod summary;
pub mod testimonial;
pub mod trajectory;

/// Rounds to one decimal place, half away from zero.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
