use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rand::Rng;

use crate::types::MatchPick;

/// The site presents kickoff times in Nairobi time (UTC+3, no DST).
const DISPLAY_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Teaser cards never reveal fixtures, so the section is capped regardless
/// of how many picks exist.
const PREMIUM_TEASER_CAP: usize = 3;

/// One visible card per pick, truncated to `limit`, in input order.
pub fn render_free_cards(picks: &[MatchPick], limit: usize) -> String {
    picks
        .iter()
        .take(limit)
        .map(free_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn free_card(pick: &MatchPick) -> String {
    let fixture = &pick.fixture;
    let prediction = &pick.prediction;
    let tier = if prediction.confidence > 80 {
        "high"
    } else {
        "medium"
    };

    format!(
        r#"<div class="prediction-card">
  <div class="match">🏆 {home} vs {away}</div>
  <div class="meta">{league} • {time}</div>
  <div class="prediction">🎯 {outcome} <span class="confidence {tier}">{confidence}%</span></div>
  <div class="bet">💡 Bet: {bet}</div>
  <div class="odds">💰 Odds: {low:.2} — {high:.2}</div>
</div>"#,
        home = fixture.home,
        away = fixture.away,
        league = fixture.league,
        time = format_kickoff(&fixture.kickoff),
        outcome = prediction.outcome.label(),
        tier = tier,
        confidence = prediction.confidence,
        bet = prediction.bet,
        low = prediction.odds_low,
        high = prediction.odds_high,
    )
}

/// Locked teaser cards. Only a synthetic expected-value figure is shown, so
/// the output depends on `limit` and the rng alone.
pub fn render_premium_cards(limit: usize, rng: &mut impl Rng) -> String {
    (0..limit.min(PREMIUM_TEASER_CAP))
        .map(|index| {
            let ev = rng.gen_range(12.0..22.0);
            format!(
                r#"<div class="prediction-card locked">
  <div class="match">🔒 Premium Pick {number}</div>
  <div class="prediction">🎯 Subscribe to unlock elite AI picks</div>
  <div class="ev">💰 EV: <span class="ev-high">+{ev:.1}%</span></div>
</div>"#,
                number = index + 1,
                ev = ev,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Localized hour:minute in the display offset. Naive provider forms are
/// read as UTC; anything unparseable falls through as-is.
pub fn format_kickoff(raw: &str) -> String {
    match parse_kickoff(raw) {
        Some(kickoff) => kickoff.format("%H:%M").to_string(),
        None => raw.trim().to_string(),
    }
}

fn parse_kickoff(raw: &str) -> Option<DateTime<FixedOffset>> {
    let offset = display_offset();
    let trimmed = raw.trim();

    if let Ok(kickoff) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(kickoff.with_timezone(&offset));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive).with_timezone(&offset));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(&offset));
    }
    None
}

pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).expect("valid display offset")
}
