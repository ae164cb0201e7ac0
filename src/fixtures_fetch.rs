use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::http_client;
use crate::types::Fixture;

const SPORTSDB_DAY_URL: &str = "https://www.thesportsdb.com/api/v1/json/3/eventsday.php";

/// Canonical league names plus the short aliases that show up in provider
/// payloads. Matching is case-insensitive substring.
pub const TARGET_LEAGUES: &[&str] = &[
    "English Premier League",
    "Premier League",
    "Spanish La Liga",
    "La Liga",
    "Italian Serie A",
    "Serie A",
    "German Bundesliga",
    "Bundesliga",
];

pub fn fetch_day_fixtures(date: &str) -> Result<Vec<Fixture>> {
    let client = http_client()?;

    let url = format!("{SPORTSDB_DAY_URL}?d={date}");
    let resp = client.get(&url).send().context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }

    parse_day_events_json(&body)
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    // The provider sends an explicit null when the day has no events.
    #[serde(default)]
    events: Option<Vec<SportsDbEvent>>,
}

#[derive(Debug, Deserialize)]
struct SportsDbEvent {
    #[serde(rename = "strHomeTeam")]
    home_team: Option<String>,
    #[serde(rename = "strAwayTeam")]
    away_team: Option<String>,
    #[serde(rename = "strLeague")]
    league: Option<String>,
    #[serde(rename = "strTimestamp")]
    timestamp: Option<String>,
    #[serde(rename = "dateEvent")]
    date_event: Option<String>,
}

pub fn parse_day_events_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let data: EventsResponse = serde_json::from_str(trimmed).context("invalid events json")?;
    Ok(data
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(event_to_fixture)
        .collect())
}

fn event_to_fixture(event: SportsDbEvent) -> Option<Fixture> {
    let home = event.home_team.as_deref().and_then(non_empty)?.to_string();
    let away = event.away_team.as_deref().and_then(non_empty)?.to_string();
    let league = event
        .league
        .as_deref()
        .and_then(non_empty)
        .unwrap_or_default()
        .to_string();
    let kickoff = event
        .timestamp
        .as_deref()
        .and_then(non_empty)
        .or_else(|| event.date_event.as_deref().and_then(non_empty))
        .unwrap_or_default()
        .to_string();

    Some(Fixture {
        home,
        away,
        kickoff,
        league,
    })
}

/// Keeps fixtures whose league matches the allow-list, in input order.
pub fn filter_target_leagues(fixtures: Vec<Fixture>) -> Vec<Fixture> {
    fixtures
        .into_iter()
        .filter(|fixture| is_target_league(&fixture.league))
        .collect()
}

pub fn is_target_league(league: &str) -> bool {
    let lowered = league.to_lowercase();
    TARGET_LEAGUES
        .iter()
        .any(|name| lowered.contains(&name.to_lowercase()))
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
