use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::models::leaderboard::LeaderboardEntry;

/// Body of `POST /leaderboard`
#[derive(Debug, Clone, Deserialize)]
pub struct AddEntryPayload {
    pub name: String,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub score: i64,
}

/// Accepts any JSON number with no fractional part, so `1.0` and `1e2` are
/// scores just like `1` and `100`.
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }

    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    match number.as_f64() {
        Some(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(de::Error::custom(format!(
            "score must be a whole number within range, got {}",
            number
        ))),
    }
}

/// One ranked row as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryResponse {
    pub name: String,
    pub score: i64,
    pub date: String,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            name: entry.name,
            score: entry.score,
            date: format_datetime_iso(entry.created_at),
        }
    }
}

/// Response of `GET /leaderboard`. Always a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub page: u32,
    pub pages: u32,
    pub page_size: usize,
    pub data: Vec<LeaderboardEntryResponse>,
}

impl LeaderboardResponse {
    pub fn single_page(entries: Vec<LeaderboardEntry>) -> Self {
        let data: Vec<LeaderboardEntryResponse> = entries.into_iter().map(Into::into).collect();
        Self {
            page: 0,
            pages: 1,
            page_size: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub link: String,
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-01-15T12:00:00.000Z`
pub fn format_datetime_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
