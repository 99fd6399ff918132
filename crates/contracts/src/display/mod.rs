use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Presentation contracts shared by KPI tiles and tables
// ---------------------------------------------------------------------------

/// Qualitative classification of a KPI helper annotation (drives colour).
///
/// Always supplied by the page composing the tile; thresholds ("churn ≤5% is
/// good") are policy and live with the caller, never in the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// How to format a numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}
