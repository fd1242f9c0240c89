//! End-to-end scoring scenarios through `compute_house_bait`.

use chaos::engine::{compute_house_bait, compute_spread_band, compute_total_band, note_for};
use chaos::types::*;

fn neutral(id: &str) -> TeamProfile {
    TeamProfile::neutral(id, id)
}

fn game(pace: f64, momentum: f64) -> Game {
    Game {
        game_id: 1,
        home_team: "Home".into(),
        away_team: "Away".into(),
        home_score: 0,
        away_score: 0,
        chaos_score: 0.0,
        collapse_risk: 0.0,
        pace,
        momentum,
        quarter: 1,
        time_remaining: "12:00".into(),
        events: Vec::new(),
        home_profile: None,
        away_profile: None,
    }
}

fn wager(total: f64, spread: f64) -> WagerInput {
    WagerInput {
        house_total: total,
        house_spread: spread,
        pick_side: PickSide::Home,
        pick_type: PickType::Spread,
    }
}

#[test]
fn scenario_a_quiet_matchup() {
    let resp = compute_house_bait(&game(100.0, 0.0), &neutral("h"), &neutral("a"), &wager(210.5, 5.5));
    assert_eq!(resp.chaos_score, 0.0);
    assert_eq!(resp.collapse_risk, 0.0);
    assert_eq!(resp.flop_risk, 0.0);
    assert!(resp.tags.is_empty());
    assert!(resp.notes.is_empty());
}

#[test]
fn scenario_b_stepperz_scrubs_home() {
    let home = TeamProfile {
        is_stepperz: true,
        is_scrubs: true,
        ..neutral("h")
    };
    let resp = compute_house_bait(&game(100.0, 0.0), &home, &neutral("a"), &wager(210.5, 5.5));
    assert_eq!(resp.chaos_score, 15.0);
    assert_eq!(resp.collapse_risk, 20.0);
    assert_eq!(resp.tags, vec!["Stepperz", "Scrubs"]);
}

#[test]
fn scenario_c_total_band() {
    let band = compute_total_band(210.5, 20.0);
    assert_eq!(band.low, (200.5, 204.5));
    assert_eq!(band.mid, (207.5, 213.5));
    assert_eq!(band.high, (216.5, 222.5));
    assert_eq!(band.insane, (223.5, 234.5));
}

#[test]
fn scenario_d_spread_band() {
    let home = TeamProfile { is_scrubs: true, ..neutral("h") };
    let away = TeamProfile { is_stepperz: true, ..neutral("a") };
    let band = compute_spread_band(5.5, &home, &away);
    assert_eq!(band.min, 5.5);
    assert_eq!(band.max, 15.5);
}

#[test]
fn scenario_e_nan_propagates() {
    let home = TeamProfile { turnover_rate: f64::NAN, ..neutral("h") };
    let resp = compute_house_bait(&game(100.0, 0.0), &home, &neutral("a"), &wager(210.5, 5.5));
    assert!(resp.chaos_score.is_nan());
    assert!(resp.collapse_risk.is_nan());
    assert!(resp.flop_risk.is_nan());
    // NaN chaos widens every chaos-dependent band edge to NaN
    assert!(resp.total_band.low.0.is_nan());
    assert_eq!(resp.total_band.mid, (207.5, 213.5));

    // serde_json has no NaN literal
    let json = serde_json::to_value(&resp).unwrap();
    assert!(json["chaosScore"].is_null());
}

#[test]
fn notes_pair_with_tags() {
    let home = TeamProfile {
        is_headaches: true,
        is_fortified: true,
        is_hitterz: true,
        ..neutral("h")
    };
    let resp = compute_house_bait(&game(88.0, 50.0), &home, &neutral("a"), &wager(198.0, -2.0));
    assert_eq!(resp.tags, vec!["Headaches", "Fortified", "Hitterz-Ballerz"]);
    assert_eq!(resp.notes.len(), resp.tags.len());
    for (tag, note) in resp.tags.iter().zip(&resp.notes) {
        assert_eq!(note_for(tag), Some(note.as_str()));
    }
    // 10 (pace) + 12 (headaches) + 10 (momentum)
    assert_eq!(resp.flop_risk, 32.0);
}

#[test]
fn response_wire_shape() {
    let resp = compute_house_bait(&game(100.0, 0.0), &neutral("h"), &neutral("a"), &wager(200.0, 1.5));
    let json = serde_json::to_value(&resp).unwrap();
    for key in [
        "success", "chaosScore", "collapseRisk", "flopRisk", "flopLevel", "totalBand", "spreadBand", "tags", "notes",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["totalBand"]["low"], serde_json::json!([192.0, 196.0]));
    assert_eq!(json["spreadBand"]["max"], 1.5);
}
