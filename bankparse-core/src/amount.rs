//! Amount resolution: pick the one money token in a block that is the
//! transaction amount, rejecting phone numbers, ZIP+4 codes, card-number
//! suffixes, and balance columns. Deterministic and total.

use std::collections::HashMap;

use anyhow::Result;
use regex::Regex;

use crate::profile::{BankProfile, TieBreak};
use crate::tokens::TokenPatterns;
use crate::types::{ExtractedPage, MoneyToken, RawLine};

/// Patterns marking money-like tokens as contextually spurious.
#[derive(Debug)]
pub struct ContextPatterns {
    phone: Regex,
    zip4: Regex,
    /// Matched against the text *before* a candidate: a trailing card label.
    card_label: Regex,
}

impl ContextPatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            phone: Regex::new(r"\d{3}[-.\s]\d{3,4}[-.\s]\d{4}")?,
            zip4: Regex::new(r"\b\d{5}-\d{4}\b")?,
            card_label: Regex::new(r"(?i)\bcard(?:\s+ending\s+in)?\s+$")?,
        })
    }

    /// Is the token part of a phone number, ZIP+4 code, or card suffix?
    pub fn is_spurious(&self, line: &str, start: usize, end: usize) -> bool {
        if self.phone.find_iter(line).any(|m| m.start() < end && start < m.end()) {
            return true;
        }
        if self.zip4.find_iter(line).any(|m| m.start() < end && start < m.end()) {
            return true;
        }
        self.card_label.is_match(&line[..start])
    }
}

/// Per-page amount-column x0 estimate: the median x0 of currency-marked
/// word tokens on the page. Absent when the page has no positioned words.
#[derive(Debug, Default)]
pub struct ColumnHints {
    by_page: HashMap<usize, f64>,
}

impl ColumnHints {
    pub fn from_pages(pages: &[ExtractedPage], money: &Regex) -> Self {
        let mut by_page = HashMap::new();
        for (page_no, page) in pages.iter().enumerate() {
            let mut xs: Vec<f64> = page
                .words
                .iter()
                .filter(|w| w.text.contains('$') && money.is_match(&w.text))
                .map(|w| w.x0)
                .collect();
            if xs.is_empty() {
                continue;
            }
            xs.sort_by(f64::total_cmp);
            let mid = xs.len() / 2;
            let median = if xs.len() % 2 == 0 { (xs[mid - 1] + xs[mid]) / 2.0 } else { xs[mid] };
            by_page.insert(page_no, median);
        }
        Self { by_page }
    }

    pub fn for_page(&self, page: usize) -> Option<f64> {
        self.by_page.get(&page).copied()
    }
}

/// Resolve the transaction amount for a block of lines, or `None` when no
/// candidate survives filtering.
pub fn resolve(
    lines: &[RawLine],
    tokens: &TokenPatterns,
    ctx: &ContextPatterns,
    profile: &BankProfile,
    hints: &ColumnHints,
) -> Option<MoneyToken> {
    let mut candidates: Vec<MoneyToken> = Vec::new();
    for (i, raw) in lines.iter().enumerate() {
        for tok in tokens.find_money(&raw.text, i) {
            if ctx.is_spurious(&raw.text, tok.offset, tok.offset + tok.raw.len()) {
                continue;
            }
            if tok.value < profile.min_amount {
                continue;
            }
            candidates.push(tok);
        }
    }
    if candidates.is_empty() {
        return None;
    }

    // Coordinate pass: when the page has an estimated amount column, take
    // the candidate closest to it.
    if let Some(best) = pick_by_column(&candidates, lines, hints) {
        return Some(best);
    }

    // Currency-marked candidates outrank sign-marked candidates outrank
    // bare numbers; bare numbers next to the real amount are usually the
    // running balance column.
    let tier: Vec<&MoneyToken> = if profile.prefer_currency {
        let currency: Vec<&MoneyToken> = candidates.iter().filter(|t| t.has_currency).collect();
        if !currency.is_empty() {
            currency
        } else {
            let signed: Vec<&MoneyToken> = candidates.iter().filter(|t| t.negative).collect();
            if !signed.is_empty() { signed } else { candidates.iter().collect() }
        }
    } else {
        candidates.iter().collect()
    };

    let picked = match profile.tie_break {
        TieBreak::First => tier.first().copied(),
        TieBreak::Last => tier.last().copied(),
        TieBreak::Largest => tier.iter().copied().max_by(|a, b| a.value.total_cmp(&b.value)),
    };
    picked.cloned()
}

fn pick_by_column(
    candidates: &[MoneyToken],
    lines: &[RawLine],
    hints: &ColumnHints,
) -> Option<MoneyToken> {
    let mut best: Option<(&MoneyToken, f64)> = None;
    for tok in candidates {
        let raw_line = &lines[tok.line];
        let Some(hint) = hints.for_page(raw_line.page) else {
            continue;
        };
        let trimmed = tok.raw.trim_matches(|c| c == '(' || c == ')');
        let Some(word) = raw_line
            .words
            .iter()
            .find(|w| w.text.contains(trimmed) || trimmed.contains(w.text.as_str()))
        else {
            continue;
        };
        let distance = (word.x0 - hint).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((tok, distance));
        }
    }
    best.map(|(tok, _)| tok.clone())
}
