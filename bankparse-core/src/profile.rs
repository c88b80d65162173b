//! Bank profiles: the per-institution configuration fed to the generic
//! engine. Profiles are data, not code — patterns, flags, and tie-break
//! choices. Per-bank deltas live here instead of per-bank parser forks.

use anyhow::Result;
use regex::Regex;

use crate::types::{Direction, Section};

/// Date token forms the recognizer can try, in profile priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `M/D`, `M/D/YY`, `M/D/YYYY` at the start of a line.
    Numeric,
    /// `Month D, YYYY` anywhere in the line (statement headers).
    MonthName,
    /// `Mon D` at the start of a line, year supplied by the document.
    MonthAbbrev,
}

/// Positional rule for picking the transaction amount among surviving
/// candidates. Banks disagree on whether the first or last money token is
/// the amount vs. the running balance, so this stays per-profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    First,
    Last,
    Largest,
}

/// One ordered direction rule: first matching pattern wins.
#[derive(Debug, Clone)]
pub struct DirectionRule {
    pub pattern: Regex,
    pub direction: Direction,
}

impl DirectionRule {
    pub fn new(pattern: &str, direction: Direction) -> Result<Self> {
        Ok(Self { pattern: Regex::new(pattern)?, direction })
    }
}

/// Maps a header line to the section it opens. A rule carrying
/// `Section::None` marks a section end ("Total deposits..." rows).
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub pattern: Regex,
    pub section: Section,
}

impl SectionRule {
    pub fn new(pattern: &str, section: Section) -> Result<Self> {
        Ok(Self { pattern: Regex::new(pattern)?, section })
    }
}

/// Immutable per-bank configuration for the shared pipeline.
#[derive(Debug, Clone)]
pub struct BankProfile {
    pub key: String,
    /// Ordered regexes the router matches against document text.
    pub detect: Vec<Regex>,

    // Noise / section classification
    pub sections: Vec<SectionRule>,
    /// Lowercased prefixes of lines that are never transactions.
    pub noise_prefixes: Vec<String>,
    /// Lowercased substrings marking noise lines.
    pub noise_contains: Vec<String>,
    pub noise_patterns: Vec<Regex>,
    /// Lines shorter than this are noise. 0 disables the check.
    pub min_line_len: usize,
    /// Lowercased prefixes opening a legal-disclaimer span.
    pub legal_start: Vec<String>,
    /// Lowercased prefixes closing it again.
    pub legal_end: Vec<String>,
    /// Lowercased substrings suppressing a single line wherever they occur.
    pub legal_inline: Vec<String>,

    // Token extraction
    pub date_formats: Vec<DateFormat>,
    /// Money tokens must carry a two-decimal fraction.
    pub require_cents: bool,

    // Amount resolution
    pub tie_break: TieBreak,
    /// Currency-marked candidates outrank sign-marked outrank bare numbers.
    pub prefer_currency: bool,
    /// Candidates below this magnitude are rejected as fragments. A profile
    /// must set this to 0.0 for zero-value records to reach direction
    /// classification (and its `unknown` sign fallback) at all.
    pub min_amount: f64,

    // Direction
    /// Evaluated before the shared rule chain.
    pub direction_overrides: Vec<DirectionRule>,

    // Segmentation flags
    /// Noise ends the open block instead of merely being skipped.
    pub noise_closes_block: bool,
    /// A resolved amount freezes the block immediately.
    pub amount_closes_block: bool,
    /// Date lines outside any section never open a block.
    pub require_section: bool,
    /// Pre-split extractor lines that glued several dated rows together.
    pub split_concatenated: bool,
    /// Try table rows before the line pass.
    pub prefer_tables: bool,

    // Aggregation
    /// Lowercased substrings exempting records from deduplication.
    pub dedupe_exempt: Vec<String>,
}

impl BankProfile {
    /// A profile with the defaults most banks share; callers override the
    /// deltas.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            detect: Vec::new(),
            sections: Vec::new(),
            noise_prefixes: Vec::new(),
            noise_contains: Vec::new(),
            noise_patterns: Vec::new(),
            min_line_len: 0,
            legal_start: Vec::new(),
            legal_end: Vec::new(),
            legal_inline: Vec::new(),
            date_formats: vec![DateFormat::Numeric, DateFormat::MonthName, DateFormat::MonthAbbrev],
            require_cents: true,
            tie_break: TieBreak::First,
            prefer_currency: false,
            min_amount: 0.01,
            direction_overrides: Vec::new(),
            noise_closes_block: false,
            amount_closes_block: true,
            require_section: false,
            split_concatenated: false,
            prefer_tables: false,
            dedupe_exempt: Vec::new(),
        }
    }
}

/// Compile a list of regexes, propagating the first failure.
pub fn re_list(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns.iter().map(|p| Ok(Regex::new(p)?)).collect()
}
