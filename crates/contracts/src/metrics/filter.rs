use serde::{Deserialize, Serialize};

/// Aggregation window a provider must honor when building a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "last_90_days")]
    Last90Days,
    #[serde(rename = "last_12_months")]
    Last12Months,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::Last30Days,
        TimeRange::Last90Days,
        TimeRange::Last12Months,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 90 days",
            TimeRange::Last12Months => "Last 12 months",
        }
    }

    /// Stable key, identical to the wire name. Used for `<select>` values.
    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Last30Days => "last_30_days",
            TimeRange::Last90Days => "last_90_days",
            TimeRange::Last12Months => "last_12_months",
        }
    }

    pub fn from_key(key: &str) -> Option<TimeRange> {
        TimeRange::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// Filter every metrics fetch carries. Part of the cache key, hence `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsFilter {
    pub time_range: TimeRange,
    pub currency: String,
}

impl MetricsFilter {
    pub fn new(time_range: TimeRange, currency: &str) -> Self {
        Self {
            time_range,
            currency: currency.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_wire_names() {
        let json = serde_json::to_string(&TimeRange::Last90Days).unwrap();
        assert_eq!(json, "\"last_90_days\"");
        let parsed: TimeRange = serde_json::from_str("\"last_12_months\"").unwrap();
        assert_eq!(parsed, TimeRange::Last12Months);
    }

    #[test]
    fn test_time_range_key_round_trip() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_key(range.key()), Some(range));
        }
        assert_eq!(TimeRange::from_key("last_7_days"), None);
    }
}
