//! Scoring engine — pure functions from team profiles and a game snapshot to
//! chaos metrics, house-bait bands, and archetype tags.
//!
//! Nothing in here performs I/O, holds state, or returns an error. Malformed
//! numbers (NaN, negative rates) flow through the arithmetic untouched.

pub mod archetype;
pub mod bands;
pub mod scores;
pub mod ticket;

pub use archetype::{note_for, Archetype};
pub use bands::{compute_spread_band, compute_total_band};
pub use scores::{
    compute_chaos_score, compute_collapse_risk, compute_flop_meter, ChaosLevel, CollapseLevel,
    FlopLevel,
};
pub use ticket::compute_house_bait;

/// Clamp a metric to [0, 100].
///
/// `f64::clamp` returns NaN for a NaN input, so a NaN rate surfaces as a NaN
/// score instead of being coerced to a bound.
pub(crate) fn clamp_metric(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_metric_bounds() {
        assert_eq!(clamp_metric(-12.0), 0.0);
        assert_eq!(clamp_metric(140.0), 100.0);
        assert_eq!(clamp_metric(37.5), 37.5);
    }

    #[test]
    fn test_clamp_metric_keeps_nan() {
        assert!(clamp_metric(f64::NAN).is_nan());
    }
}
