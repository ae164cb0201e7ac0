use rand::SeedableRng;
use rand::rngs::StdRng;

use matchday_refresh::predictor::{Outcome, Prediction};
use matchday_refresh::render::{format_kickoff, render_free_cards, render_premium_cards};
use matchday_refresh::types::{Fixture, MatchPick};

fn pick(home: &str, away: &str, confidence: u8) -> MatchPick {
    MatchPick {
        fixture: Fixture {
            home: home.to_string(),
            away: away.to_string(),
            kickoff: "2026-03-07T17:30:00".to_string(),
            league: "English Premier League".to_string(),
        },
        prediction: Prediction {
            outcome: Outcome::HomeWin,
            confidence,
            bet: "Over 2.5",
            odds_low: 2.1,
            odds_high: 2.45,
        },
    }
}

fn eight_picks() -> Vec<MatchPick> {
    (0..8)
        .map(|i| pick(&format!("Home {i}"), &format!("Away {i}"), 70))
        .collect()
}

#[test]
fn free_mode_truncates_to_limit_in_input_order() {
    let html = render_free_cards(&eight_picks(), 5);

    assert_eq!(html.matches(r#"<div class="prediction-card">"#).count(), 5);
    assert!(html.contains("Home 0 vs Away 0"));
    assert!(html.contains("Home 4 vs Away 4"));
    assert!(!html.contains("Home 5"));

    let first = html.find("Home 0").expect("first card present");
    let last = html.find("Home 4").expect("last card present");
    assert!(first < last);
}

#[test]
fn free_card_carries_prediction_fields() {
    let html = render_free_cards(&eight_picks()[..1], 5);

    assert!(html.contains("English Premier League • 20:30"));
    assert!(html.contains("Home Win"));
    assert!(html.contains("💡 Bet: Over 2.5"));
    assert!(html.contains("💰 Odds: 2.10 — 2.45"));
}

#[test]
fn confidence_above_eighty_renders_high_tier() {
    let strong = render_free_cards(&[pick("A", "B", 85)], 1);
    assert!(strong.contains(r#"<span class="confidence high">85%</span>"#));

    let modest = render_free_cards(&[pick("A", "B", 80)], 1);
    assert!(modest.contains(r#"<span class="confidence medium">80%</span>"#));
}

#[test]
fn premium_mode_is_capped_at_three_locked_cards() {
    let mut rng = StdRng::seed_from_u64(5);

    let html = render_premium_cards(3, &mut rng);
    assert_eq!(html.matches("prediction-card locked").count(), 3);
    assert!(html.contains("Premium Pick 1"));
    assert!(html.contains("Premium Pick 3"));

    let oversized = render_premium_cards(9, &mut rng);
    assert_eq!(oversized.matches("prediction-card locked").count(), 3);
}

#[test]
fn premium_cards_reveal_only_expected_value() {
    let mut rng = StdRng::seed_from_u64(9);
    let html = render_premium_cards(3, &mut rng);

    assert!(!html.contains("vs"));
    for line in html.lines().filter(|l| l.contains("EV:")) {
        let percent = line
            .split('+')
            .nth(1)
            .and_then(|rest| rest.split('%').next())
            .expect("ev figure present")
            .parse::<f64>()
            .expect("ev parses");
        // One-decimal formatting can round 21.96 up to 22.0.
        assert!((12.0..=22.0).contains(&percent));
    }
}

#[test]
fn kickoff_formats_shift_to_display_offset() {
    // Naive provider timestamps are UTC; display offset is +03:00.
    assert_eq!(format_kickoff("2026-03-07T17:30:00"), "20:30");
    assert_eq!(format_kickoff("2026-03-07 17:30:00"), "20:30");
    assert_eq!(format_kickoff("2026-03-07T17:30:00Z"), "20:30");
    assert_eq!(format_kickoff("2026-03-07T23:00:00+03:00"), "23:00");
}

#[test]
fn bare_date_reads_as_utc_midnight() {
    assert_eq!(format_kickoff("2026-03-07"), "03:00");
}

#[test]
fn unparseable_kickoff_passes_through() {
    assert_eq!(format_kickoff("  TBD "), "TBD");
    assert_eq!(format_kickoff(""), "");
}
