//! Gaussian Similarity
//!
//! Smooth radial-basis score for how far a measured value sits from an ideal.
//! The spread is `sigma = tolerance / 1.5`, so a value at the edge of the
//! tolerance band scores exp(-1.125) ≈ 0.32.

/// Divisor applied to the tolerance to obtain sigma
pub const SIGMA_DIVISOR: f64 = 1.5;

/// `exp(-(measured - ideal)^2 / (2 sigma^2))` with `sigma = tolerance / 1.5`
///
/// Returns exactly 1.0 at `measured == ideal`, is symmetric around `ideal`
/// and decays towards (but never reaches) 0.
///
/// `tolerance` must be > 0; zero yields NaN. Catalog entries are validated
/// at construction (`KnowledgeBase::new`) so this is not checked per call.
#[inline]
pub fn gaussian_score(measured: f64, ideal: f64, tolerance: f64) -> f64 {
    let sigma = tolerance / SIGMA_DIVISOR;
    let deviation = measured - ideal;
    (-(deviation * deviation) / (2.0 * sigma * sigma)).exp()
}
