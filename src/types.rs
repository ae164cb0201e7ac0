use crate::predictor::Prediction;

/// A scheduled match as delivered by the provider or fabricated by the
/// fallback table. Kickoff stays in the provider's string form until render
/// time (RFC 3339, `T`-separated naive datetime, or a bare date).
#[derive(Debug, Clone)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub kickoff: String,
    pub league: String,
}

/// One fixture with its attached prediction, ready for rendering.
#[derive(Debug, Clone)]
pub struct MatchPick {
    pub fixture: Fixture,
    pub prediction: Prediction,
}
