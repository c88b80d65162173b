//! Direction classification: ordered rule evaluation, first match wins.
//!
//! Explicit markers and keyword rules run before the section default
//! because several banks file both inbound and outbound items under one
//! section (fee reversals inside a withdrawals table); the numeric sign is
//! the last resort because many formats always print positive magnitudes.

use anyhow::Result;

use crate::profile::DirectionRule;
use crate::types::{Direction, Section};

/// The shared rule chain every profile inherits. Profile overrides are
/// evaluated first; order within this list is significant (`WT ... CHARGE`
/// must outrank the bare `WT` wire-credit rule).
pub fn shared_rules() -> Result<Vec<DirectionRule>> {
    use Direction::{In, Out};
    let rules = [
        // Explicit unambiguous markers
        (r"(?i)wire\s+type:\s*wire\s+in\b", In),
        (r"(?i)wire\s+type:\s*wire\s+out\b", Out),
        (r"(?i)\bzelle\b.*\bpayment\s+from\b", In),
        (r"(?i)\bzelle\b.*\bpayment\s+to\b", Out),
        (r"(?i)\bach\s+credit\b", In),
        (r"(?i)\bach\s+(?:debit|pull)\b", Out),
        (r"(?i)\bdescr:\s*sender\b", In),
        (r"(?i)\breversal\b", In),
        (r"(?i)\belectronic\s+credit\b", In),
        (r"(?i)\bdebit\s+card\s+credi", In),
        (r"(?i)\bwire\s+(?:trans\s+svc\s+charge|fee)\b", Out),
        (r"(?i)\bwire\s+from\b", In),
        (r"(?i)\bwire\s+to\b", Out),
        (r"(?i)\bwire\s+in\b", In),
        // Keyword sets
        (r"(?i)\bbill\s*(?:paid|pmt)\b", Out),
        (r"(?i)\bdebit\s+memo\b", Out),
        (r"(?i)\bservice\s+charges?\b", Out),
        (r"(?i)\bdbt\s+crd\b", Out),
        (r"(?i)\bpos\s+deb\b", Out),
        (r"(?i)\b(?:debit\s+)?card\s+purch(?:ase)?\b", Out),
        (r"(?i)\bcheckcard\b", Out),
        (r"(?i)\bwt\b.*\b(?:charge|fee)\b", Out),
        (r"(?i)\bwt\b", In),
        (r"(?i)\bpaypal\b.*\bcredit\b", In),
        (r"(?i)\bpaypal\b", Out),
        (r"(?i)\bcheck\b", Out),
        (r"(?i)\bwithdrawal\b", Out),
        (r"(?i)\bfees?\b", Out),
        (r"(?i)\binterest\s+(?:payment|paid|credit)\b", In),
        (r"(?i)\bdeposit\b", In),
        (r"(?i)\bcredit\b", In),
    ];
    rules.iter().map(|(p, d)| DirectionRule::new(p, *d)).collect()
}

/// Classify a cleaned description. Rule chain, then section default, then
/// numeric sign; exactly zero stays `Unknown` for manual review.
pub fn classify(
    description: &str,
    section: Section,
    signed_amount: f64,
    overrides: &[DirectionRule],
    shared: &[DirectionRule],
) -> Direction {
    for rule in overrides.iter().chain(shared.iter()) {
        if rule.pattern.is_match(description) {
            return rule.direction;
        }
    }
    match section {
        Section::Deposits => Direction::In,
        Section::Withdrawals | Section::Fees => Direction::Out,
        Section::None => {
            if signed_amount < 0.0 {
                Direction::Out
            } else if signed_amount > 0.0 {
                Direction::In
            } else {
                Direction::Unknown
            }
        }
    }
}
