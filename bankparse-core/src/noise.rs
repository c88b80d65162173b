//! Noise and section classification for statement lines.
//!
//! Section detection is a per-profile header match returning the `Section`
//! a line opens (or `Section::None` for explicit section-end rows). Noise
//! detection combines the profile's phrase lists with two shared patterns:
//! a line that is nothing but a currency-marked balance, and a line that is
//! nothing but an account number.

use anyhow::Result;
use regex::Regex;

use crate::profile::BankProfile;
use crate::types::Section;

/// Shared noise patterns common to every institution.
#[derive(Debug)]
pub struct NoisePatterns {
    standalone_amount: Regex,
    account_number: Regex,
}

impl NoisePatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // The `$` is deliberate: bare standalone numbers are often the
            // amount row of a multi-line transaction, while `$8,879.37`
            // alone is a summary balance.
            standalone_amount: Regex::new(r"^\s*-?\$[\d,]+\.\d{2}\s*$")?,
            account_number: Regex::new(r"^\s*\d{12,}\s*$")?,
        })
    }
}

/// Does this line open (or end) a section?
pub fn detect_section(line: &str, profile: &BankProfile) -> Option<Section> {
    for rule in &profile.sections {
        if rule.pattern.is_match(line) {
            return Some(rule.section);
        }
    }
    None
}

/// Is this line statement boilerplate that must never start or extend a
/// block?
pub fn is_noise(line: &str, profile: &BankProfile, shared: &NoisePatterns) -> bool {
    let lower = line.trim().to_lowercase();
    if lower.is_empty() {
        return true;
    }
    if profile.min_line_len > 0 && lower.chars().count() < profile.min_line_len {
        return true;
    }
    if profile.noise_prefixes.iter().any(|p| lower.starts_with(p.as_str())) {
        return true;
    }
    if profile.noise_contains.iter().any(|p| lower.contains(p.as_str())) {
        return true;
    }
    if profile.noise_patterns.iter().any(|re| re.is_match(line)) {
        return true;
    }
    shared.standalone_amount.is_match(line) || shared.account_number.is_match(line)
}
