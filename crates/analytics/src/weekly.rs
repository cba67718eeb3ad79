//! Weekly creation histogram
//!
//! Buckets product creation timestamps into a fixed span of recent weeks so
//! sparse data still renders a full-width chart.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use stockdeck_catalog::ProductSnapshot;

/// Number of weekly buckets the histogram always covers
pub const WEEKS_TRACKED: usize = 12;

/// A single week's bucket in the creation histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// Window start date, formatted `MM/DD`
    pub label: String,
    /// Products created inside this window
    pub count: u64,
}

impl WeeklyBucket {
    /// Create a new bucket
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Count product creations per week over the tracked span
///
/// Produces exactly [`WEEKS_TRACKED`] buckets, oldest first. Each bucket
/// covers the half-open window `[start, start + 7d)`; the newest window
/// starts at the beginning of `now`'s day. Products created outside the
/// span are not counted.
pub fn weekly_product_counts(
    products: &[ProductSnapshot],
    now: DateTime<Utc>,
) -> Vec<WeeklyBucket> {
    let today = start_of_day(now);

    (0..WEEKS_TRACKED)
        .rev()
        .map(|weeks_back| {
            let start = today - Duration::weeks(weeks_back as i64);
            let end = start + Duration::weeks(1);
            let count = products
                .iter()
                .filter(|p| p.created_at >= start && p.created_at < end)
                .count() as u64;
            WeeklyBucket::new(start.format("%m/%d").to_string(), count)
        })
        .collect()
}

fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .unwrap_or(dt)
}
