use rand::Rng;

/// Bet recommendations the site rotates through.
pub const BETS: [&str; 5] = [
    "Over 2.5",
    "BTTS",
    "Double Chance",
    "Draw or Away",
    "Handicap -1",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::HomeWin => "Home Win",
            Outcome::Draw => "Draw",
            Outcome::AwayWin => "Away Win",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prediction {
    pub outcome: Outcome,
    /// Percent, 65..=89.
    pub confidence: u8,
    pub bet: &'static str,
    pub odds_low: f64,
    pub odds_high: f64,
}

/// Draws a synthetic prediction. Every draw is uniform and independent of
/// the fixture itself; the rng is injected so tests can seed it.
pub fn predict(rng: &mut impl Rng) -> Prediction {
    let confidence = rng.gen_range(0..25) + 65;
    let outcome = match rng.gen_range(0..3) {
        0 => Outcome::HomeWin,
        1 => Outcome::Draw,
        _ => Outcome::AwayWin,
    };
    let bet = BETS[rng.gen_range(0..BETS.len())];
    let odds_low = round2(rng.gen_range(1.8..3.3));
    // Rounding can pull the spread to zero; low <= high still holds.
    let odds_high = round2(odds_low + rng.gen_range(0.0..0.5));

    Prediction {
        outcome,
        confidence,
        bet,
        odds_low,
        odds_high,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
