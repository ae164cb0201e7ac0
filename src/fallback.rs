use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::types::Fixture;

/// Team pool used when the provider yields nothing from the target leagues.
const FALLBACK_TEAMS: &[(&str, &str)] = &[
    ("Arsenal", "English Premier League"),
    ("Liverpool", "English Premier League"),
    ("Chelsea", "English Premier League"),
    ("Man City", "English Premier League"),
    ("Man United", "English Premier League"),
    ("Tottenham", "English Premier League"),
    ("Newcastle", "English Premier League"),
    ("Aston Villa", "English Premier League"),
    ("Real Madrid", "Spanish La Liga"),
    ("Barcelona", "Spanish La Liga"),
    ("Atletico Madrid", "Spanish La Liga"),
    ("Real Sociedad", "Spanish La Liga"),
    ("Villarreal", "Spanish La Liga"),
    ("Juventus", "Italian Serie A"),
    ("AC Milan", "Italian Serie A"),
    ("Inter Milan", "Italian Serie A"),
    ("Napoli", "Italian Serie A"),
    ("Roma", "Italian Serie A"),
    ("Bayern Munich", "German Bundesliga"),
    ("Dortmund", "German Bundesliga"),
    ("Leipzig", "German Bundesliga"),
    ("Leverkusen", "German Bundesliga"),
];

/// Fabricates `count` plausible fixtures from the static pool. Pairings are
/// uniform with a redraw until the away side differs from the home side;
/// kickoff lands within the next 24 hours.
pub fn generate_fixtures(count: usize, rng: &mut impl Rng) -> Vec<Fixture> {
    let now = Utc::now();

    (0..count)
        .map(|_| {
            let (home, league) = FALLBACK_TEAMS[rng.gen_range(0..FALLBACK_TEAMS.len())];
            let mut away = FALLBACK_TEAMS[rng.gen_range(0..FALLBACK_TEAMS.len())].0;
            while away == home {
                away = FALLBACK_TEAMS[rng.gen_range(0..FALLBACK_TEAMS.len())].0;
            }

            let kickoff = (now + Duration::minutes(rng.gen_range(0..24 * 60)))
                .to_rfc3339_opts(SecondsFormat::Secs, true);

            Fixture {
                home: home.to_string(),
                away: away.to_string(),
                kickoff,
                league: league.to_string(),
            }
        })
        .collect()
}

/// True when the team appears in the fallback pool.
pub fn is_fallback_team(name: &str) -> bool {
    FALLBACK_TEAMS.iter().any(|(team, _)| *team == name)
}
