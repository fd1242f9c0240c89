//! House-bait ranges around the posted total and spread.

use crate::types::{SpreadBand, TeamProfile, TotalBand};

/// Over/under bands around `house_total`, widened by chaos.
///
/// Bands are fixed offsets from the line; they are not re-sorted.
pub fn compute_total_band(house_total: f64, chaos_score: f64) -> TotalBand {
    let chaos_factor = chaos_score / 10.0;

    TotalBand {
        low: (
            house_total - (8.0 + chaos_factor),
            house_total - (4.0 + chaos_factor),
        ),
        mid: (house_total - 3.0, house_total + 3.0),
        high: (
            house_total + (4.0 + chaos_factor),
            house_total + (10.0 + chaos_factor),
        ),
        insane: (
            house_total + (11.0 + chaos_factor),
            house_total + (22.0 + chaos_factor),
        ),
    }
}

/// Spread range, widened per archetype.
///
/// `min` only moves down and `max` only moves up, so
/// `min <= house_spread <= max` always holds.
pub fn compute_spread_band(house_spread: f64, home: &TeamProfile, away: &TeamProfile) -> SpreadBand {
    let mut min = house_spread;
    let mut max = house_spread;

    if home.is_scrubs {
        max += 6.0;
    }
    if away.is_scrubs {
        min -= 6.0;
    }

    if home.is_stepperz {
        min -= 4.0;
    }
    if away.is_stepperz {
        max += 4.0;
    }

    if home.is_fortified {
        min -= 3.0;
    }
    if away.is_fortified {
        max += 3.0;
    }

    SpreadBand { min, max }
}
