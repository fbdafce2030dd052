//! Factor modules for site scoring
//!
//! Each factor is an independent pure function of one species' requirements
//! and the measured site data, returning a score in [0, 1].

pub mod gaussian;
pub mod ph;
pub mod texture;
pub mod climate;

// Re-export factor functions
pub use gaussian::gaussian_score;
pub use ph::ph_score;
pub use texture::texture_score;
pub use climate::{climate_score, water_score};
