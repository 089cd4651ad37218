// src/view/filter.rs
use crate::filesystem::Item;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
    LastYear,
}

impl DateFilter {
    /// Oldest `updatedAt` still accepted, or `None` for no bound.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let window = match self {
            DateFilter::All => return None,
            DateFilter::Today => {
                let midnight = now.date_naive().and_hms_opt(0, 0, 0)?;
                return Some(midnight.and_utc());
            }
            DateFilter::Last7Days => Duration::days(7),
            DateFilter::Last30Days => Duration::days(30),
            DateFilter::LastYear => Duration::days(365),
        };
        Some(now - window)
    }

    /// Items with an unreadable date only pass `All`.
    pub fn accepts(self, item: &Item, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            None => true,
            Some(cutoff) => item.updated().is_some_and(|updated| updated >= cutoff),
        }
    }
}
