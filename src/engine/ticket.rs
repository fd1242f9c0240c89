//! Full house-bait ticket: every metric, both bands, and the home team's
//! archetype tags with their notes.

use super::archetype::note_for;
use super::bands::{compute_spread_band, compute_total_band};
use super::scores::{compute_chaos_score, compute_collapse_risk, compute_flop_meter, FlopLevel};
use crate::types::{ChaosTicketResponse, Game, TeamProfile, WagerInput};

/// Score a ticket against a game.
///
/// Tags come from the home team only. `wager.pick_side` and
/// `wager.pick_type` do not affect the result.
pub fn compute_house_bait(
    game: &Game,
    home: &TeamProfile,
    away: &TeamProfile,
    wager: &WagerInput,
) -> ChaosTicketResponse {
    let chaos_score = compute_chaos_score(home, away);
    let collapse_risk = compute_collapse_risk(home, away);
    let flop_risk = compute_flop_meter(home, away, game);

    let total_band = compute_total_band(wager.house_total, chaos_score);
    let spread_band = compute_spread_band(wager.house_spread, home, away);

    let tags: Vec<String> = home
        .archetypes()
        .iter()
        .map(|a| a.label().to_string())
        .collect();

    let notes = tags
        .iter()
        .filter_map(|tag| note_for(tag))
        .map(str::to_string)
        .collect();

    ChaosTicketResponse {
        success: true,
        chaos_score,
        collapse_risk,
        flop_risk,
        flop_level: FlopLevel::from_risk(flop_risk),
        total_band,
        spread_band,
        tags,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PickSide, PickType};

    fn neutral() -> TeamProfile {
        TeamProfile::neutral("t", "Team")
    }

    fn game() -> Game {
        Game {
            game_id: 1,
            home_team: "Home".into(),
            away_team: "Away".into(),
            home_score: 50,
            away_score: 48,
            chaos_score: 0.0,
            collapse_risk: 0.0,
            pace: 100.0,
            momentum: 0.0,
            quarter: 3,
            time_remaining: "4:10".into(),
            events: Vec::new(),
            home_profile: None,
            away_profile: None,
        }
    }

    fn wager() -> WagerInput {
        WagerInput {
            house_total: 210.5,
            house_spread: 5.5,
            pick_side: PickSide::Home,
            pick_type: PickType::Spread,
        }
    }

    #[test]
    fn test_neutral_ticket() {
        let resp = compute_house_bait(&game(), &neutral(), &neutral(), &wager());
        assert!(resp.success);
        assert_eq!(resp.chaos_score, 0.0);
        assert_eq!(resp.collapse_risk, 0.0);
        assert_eq!(resp.flop_risk, 0.0);
        assert_eq!(resp.flop_level, FlopLevel::Safe);
        assert!(resp.tags.is_empty());
        assert!(resp.notes.is_empty());
        assert_eq!(resp.spread_band.min, 5.5);
        assert_eq!(resp.spread_band.max, 5.5);
    }

    #[test]
    fn test_stepperz_scrubs_home() {
        let mut h = neutral();
        h.is_scrubs = true;
        h.is_stepperz = true;
        let resp = compute_house_bait(&game(), &h, &neutral(), &wager());
        assert_eq!(resp.chaos_score, 15.0);
        assert_eq!(resp.collapse_risk, 20.0);
        assert_eq!(resp.tags, vec!["Stepperz", "Scrubs"]);
        assert_eq!(
            resp.notes,
            vec![
                "Stepperz team: blowout + over-smash risk",
                "Scrubs team: cannot hold leads, fake safety risk",
            ]
        );
        // chaos 15 → factor 1.5
        assert_eq!(resp.total_band.low, (201.0, 205.0));
    }

    #[test]
    fn test_tags_ignore_away_team() {
        let mut a = neutral();
        a.is_oma = true;
        a.is_headaches = true;
        let resp = compute_house_bait(&game(), &neutral(), &a, &wager());
        assert!(resp.tags.is_empty());
        assert!(resp.chaos_score > 0.0);
    }

    #[test]
    fn test_all_home_tags_in_fixed_order() {
        let h = TeamProfile {
            is_oma: true,
            is_scrubs: true,
            is_stepperz: true,
            is_headaches: true,
            is_bricksquad: true,
            is_hitterz: true,
            is_fortified: true,
            ..neutral()
        };
        let resp = compute_house_bait(&game(), &h, &neutral(), &wager());
        assert_eq!(
            resp.tags,
            vec!["Stepperz", "Scrubs", "Headaches", "Fortified", "OMA", "Bricksquad", "Hitterz-Ballerz"]
        );
        assert_eq!(resp.notes.len(), resp.tags.len());
        for (tag, note) in resp.tags.iter().zip(&resp.notes) {
            assert_eq!(note_for(tag), Some(note.as_str()));
        }
    }

    #[test]
    fn test_pick_fields_are_inert() {
        let mut h = neutral();
        h.is_fortified = true;
        h.turnover_rate = 12.0;
        let base = compute_house_bait(&game(), &h, &neutral(), &wager());
        for side in [PickSide::Home, PickSide::Away] {
            for kind in [PickType::Spread, PickType::Moneyline, PickType::Total] {
                let w = WagerInput { pick_side: side, pick_type: kind, ..wager() };
                assert_eq!(compute_house_bait(&game(), &h, &neutral(), &w), base);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut h = neutral();
        h.is_oma = true;
        h.foul_rate = 17.0;
        let mut g = game();
        g.pace = 88.0;
        let first = compute_house_bait(&g, &h, &neutral(), &wager());
        let second = compute_house_bait(&g, &h, &neutral(), &wager());
        assert_eq!(first, second);
    }
}
