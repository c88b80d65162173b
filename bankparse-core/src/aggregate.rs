//! Final normalization: enforce invariants, deduplicate, sort.

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use crate::profile::BankProfile;
use crate::types::{Direction, Transaction};

/// A pre-aggregation record: signed amount, direction already classified.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub date: NaiveDate,
    pub description: String,
    pub signed_amount: f64,
    pub direction: Direction,
}

/// Reference-id extraction (transaction trace numbers) used as the dedupe
/// key. Heuristic; per-bank reliability is covered by the profile fixtures.
#[derive(Debug)]
pub struct RefIdPatterns {
    patterns: Vec<Regex>,
}

impl RefIdPatterns {
    pub fn new() -> Result<Self> {
        let patterns = [
            r"(?i)\btrn:\s*([A-Za-z0-9]+)",
            r"(?i)\btrace#:?\s*(\d+)",
            r"(?i)\bweb\s+id:\s*([A-Za-z0-9]+)",
        ];
        Ok(Self { patterns: patterns.iter().map(|p| Ok(Regex::new(p)?)).collect::<Result<_>>()? })
    }

    pub fn extract(&self, description: &str) -> Option<String> {
        for re in &self.patterns {
            if let Some(caps) = re.captures(description) {
                return Some(caps[1].to_uppercase());
            }
        }
        None
    }
}

/// Coerce amounts positive, drop empty descriptions, deduplicate by
/// `(date, amount, direction, reference id)` when an id exists, and sort by
/// date (stable for same-date records).
pub fn finalize(drafts: Vec<Draft>, profile: &BankProfile, ids: &RefIdPatterns) -> Vec<Transaction> {
    let mut seen: HashSet<(NaiveDate, i64, Direction, String)> = HashSet::new();
    let mut out: Vec<Transaction> = Vec::new();

    for draft in drafts {
        if draft.description.is_empty() {
            continue;
        }
        let amount = draft.signed_amount.abs();
        let lower = draft.description.to_lowercase();
        let exempt = profile.dedupe_exempt.iter().any(|p| lower.contains(p.as_str()));
        if !exempt {
            // Records with no extractable reference id are never
            // deduplicated against each other.
            if let Some(id) = ids.extract(&draft.description) {
                let cents = (amount * 100.0).round() as i64;
                if !seen.insert((draft.date, cents, draft.direction, id)) {
                    continue;
                }
            }
        }
        out.push(Transaction {
            date: draft.date,
            description: draft.description,
            amount,
            direction: draft.direction,
        });
    }

    out.sort_by_key(|t| t.date);
    out
}
