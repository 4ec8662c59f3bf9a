//! Aggregate analytics over committed ledger records.
//!
//! Pure functions over a chronological slice of records; the HTTP layer
//! feeds them whatever the ledger store returns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::decision::Decision;
use crate::record::LedgerRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionCounts {
    pub allow: usize,
    pub flag_for_review: usize,
    pub block: usize,
}

/// Audit volume and mean delta for one clock hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBucket {
    pub hour: String,
    pub audits: usize,
    pub mean_delta: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerAnalytics {
    pub total_audits: usize,
    pub decision_counts: DecisionCounts,
    pub rolling_mean_delta: f64,
    pub rolling_window: usize,
    pub hourly_trend: Vec<TrendBucket>,
}

/// Summarize a chronological run of ledger records.
///
/// The rolling mean covers the most recent `window` records; the hourly
/// trend buckets every record by UTC hour, in chronological order.
pub fn summarize(records: &[LedgerRecord], window: usize) -> LedgerAnalytics {
    let mut decision_counts = DecisionCounts::default();
    for record in records {
        match record.outcome.decision {
            Decision::Allow => decision_counts.allow += 1,
            Decision::FlagForReview => decision_counts.flag_for_review += 1,
            Decision::Block => decision_counts.block += 1,
        }
    }

    let window = window.max(1);
    let tail = &records[records.len().saturating_sub(window)..];
    let rolling_mean_delta = if tail.is_empty() {
        0.0
    } else {
        tail.iter().map(|r| r.outcome.delta_score).sum::<f64>() / tail.len() as f64
    };

    let mut buckets: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for record in records {
        let hour = record.timestamp.format("%Y-%m-%dT%H:00:00Z").to_string();
        let entry = buckets.entry(hour).or_default();
        entry.0 += 1;
        entry.1 += record.outcome.delta_score;
    }

    let hourly_trend = buckets
        .into_iter()
        .map(|(hour, (audits, delta_sum))| TrendBucket {
            hour,
            audits,
            mean_delta: delta_sum / audits as f64,
        })
        .collect();

    LedgerAnalytics {
        total_audits: records.len(),
        decision_counts,
        rolling_mean_delta,
        rolling_window: window,
        hourly_trend,
    }
}
