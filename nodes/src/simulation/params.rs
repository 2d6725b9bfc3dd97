//! Shock wave tuning
//!
//! `Parameters` holds the constants of the shock wave model:
//! - charge-up rate and the radius ratios used while growing / at release,
//! - the low-pass divisors and targets used while decaying,
//! - alpha fade ratio and cut-off,
//! - the minimum distance guarding the `1 / d` impulse law

use super::states::Rgba;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub growth_rate: f64,         // magnitude gained per second of hold
    pub growing_inner_ratio: f64, // inner radius = magnitude / ratio while growing
    pub release_inner_ratio: f64, // inner radius = magnitude / ratio at release
    pub release_outer_ratio: f64, // outer radius = magnitude / ratio at release
    pub inner_target_ratio: f64,  // decaying inner radius relaxes to magnitude / ratio
    pub outer_target_ratio: f64,  // decaying outer radius relaxes to magnitude / ratio
    pub inner_smoothing: f64,     // low-pass divisor for the inner radius
    pub outer_smoothing: f64,     // low-pass divisor for the outer radius
    pub alpha_decay: f64,         // fraction of alpha lost per decaying tick
    pub alpha_cutoff: f64,        // alpha below this snaps to 0
    pub min_distance: f64,        // floor of the impulse distance
    pub blast_magnitude: f64,     // magnitude of a keyboard-triggered blast
    pub color: Rgba,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            growth_rate: 800.0,
            growing_inner_ratio: 10.0,
            release_inner_ratio: 40.0,
            release_outer_ratio: 12.0,
            inner_target_ratio: 5.0,
            outer_target_ratio: 3.0,
            inner_smoothing: 5.0,
            outer_smoothing: 8.0,
            alpha_decay: 0.1,
            alpha_cutoff: 0.02,
            min_distance: 10.0,
            blast_magnitude: 400.0,
            color: Rgba::new(255, 255, 255, 0.8),
        }
    }
}
