//! Report assembly and ranking.
//!
//! Joins per-candidate similarity scores with coverage/summary profiles
//! and sorts into the final report. The sort key is score descending,
//! then coverage descending; exact ties keep input order (the sort is
//! stable). Assembly is a pure function of its inputs — running it twice
//! on the same rows produces an identical report.

use std::cmp::Ordering;

use serde::Serialize;

use crate::summary::MatchProfile;

/// Per-candidate result in the final report.
///
/// Constructed once by the aggregator and immutable thereafter. Holds no
/// reference to file-system state; the name is whatever identifier the
/// caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRecord {
    /// Candidate identifier (typically a filename).
    pub name: String,
    /// Cosine similarity against the reference, in [0, 1], rounded to 4
    /// decimals.
    pub score: f64,
    /// Keyword coverage percentage, in [0, 100], rounded to 1 decimal.
    pub coverage_percent: f64,
    /// Matched top keywords in keyword-list order.
    pub matched_keywords: Vec<String>,
    /// Missing top keywords in keyword-list order.
    pub missing_keywords: Vec<String>,
    /// One-line narrative summary.
    pub summary: String,
}

impl RankingRecord {
    /// Joins a similarity score with a match profile.
    ///
    /// The score is rounded to 4 decimals here, before sorting, so that
    /// ranking and display agree.
    pub(crate) fn new(name: String, score: f64, profile: MatchProfile) -> Self {
        Self {
            name,
            score: round_four_decimals(score),
            coverage_percent: profile.coverage_percent,
            matched_keywords: profile.matched,
            missing_keywords: profile.missing,
            summary: profile.summary,
        }
    }
}

/// The ordered ranking report.
///
/// Contains exactly one record per input candidate — degraded candidates
/// appear as zero-relevance records, never dropped. Never mutated after
/// construction; re-ranking produces a new report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedReport {
    /// Records in rank order.
    records: Vec<RankingRecord>,
}

impl RankedReport {
    /// Returns the records in rank order.
    pub fn records(&self) -> &[RankingRecord] {
        &self.records
    }

    /// Iterates the records in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &RankingRecord> {
        self.records.iter()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the report has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sorts joined records into the final report.
pub(crate) fn assemble_report(mut records: Vec<RankingRecord>) -> RankedReport {
    records.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.coverage_percent
                    .partial_cmp(&a.coverage_percent)
                    .unwrap_or(Ordering::Equal)
            })
    });

    RankedReport { records }
}

/// Rounds to four decimal places.
fn round_four_decimals(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
