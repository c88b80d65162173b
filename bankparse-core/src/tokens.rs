//! Date and money token recognizers.
//!
//! Shared across all profiles; per-bank variation is limited to the date
//! format priority order and the optional-cents flag.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use crate::profile::DateFormat;
use crate::types::MoneyToken;

/// A recognized date token and the span it occupied in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub start: usize,
    pub end: usize,
}

/// Compiled shared patterns, built once per engine invocation.
#[derive(Debug)]
pub struct TokenPatterns {
    pub money: Regex,
    date_numeric: Regex,
    date_month_name: Regex,
    date_month_abbrev: Regex,
}

impl TokenPatterns {
    pub fn new(require_cents: bool) -> Result<Self> {
        // Amount: optional parens/minus/$, grouped thousands, two-decimal
        // fraction (mandatory unless the profile relaxes it).
        let money = if require_cents {
            Regex::new(r"\(?-?\$?\d{1,3}(?:,\d{3})*\.\d{2}\)?-?")?
        } else {
            Regex::new(r"\(?-?\$?\d{1,3}(?:,\d{3})*(?:\.\d{2})?\)?-?")?
        };
        Ok(Self {
            money,
            date_numeric: Regex::new(r"^\s*(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\b")?,
            date_month_name: Regex::new(r"(?i)\b([A-Za-z]{3,9})\s+(\d{1,2}),\s*(\d{4})\b")?,
            date_month_abbrev: Regex::new(
                r"(?i)^\s*(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec)\s+(\d{1,2})\b",
            )?,
        })
    }

    /// Try the profile's date formats in priority order and return the first
    /// valid match, or `None`. Numeric and abbreviated forms anchor at the
    /// start of the line; the long form may appear anywhere.
    pub fn match_date(
        &self,
        line: &str,
        formats: &[DateFormat],
        fallback_year: i32,
    ) -> Option<DateMatch> {
        for format in formats {
            let found = match format {
                DateFormat::Numeric => self.match_numeric(line, fallback_year),
                DateFormat::MonthName => self.match_month_name(line),
                DateFormat::MonthAbbrev => self.match_month_abbrev(line, fallback_year),
            };
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn match_numeric(&self, line: &str, fallback_year: i32) -> Option<DateMatch> {
        let caps = self.date_numeric.captures(line)?;
        let whole = caps.get(0)?;
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) => {
                let y: i32 = y.as_str().parse().ok()?;
                if y < 100 { 2000 + y } else { y }
            }
            None => fallback_year,
        };
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(DateMatch { date, start: whole.start(), end: whole.end() })
    }

    fn match_month_name(&self, line: &str) -> Option<DateMatch> {
        let caps = self.date_month_name.captures(line)?;
        let whole = caps.get(0)?;
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(DateMatch { date, start: whole.start(), end: whole.end() })
    }

    fn match_month_abbrev(&self, line: &str, fallback_year: i32) -> Option<DateMatch> {
        let caps = self.date_month_abbrev.captures(line)?;
        let whole = caps.get(0)?;
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(fallback_year, month, day)?;
        Some(DateMatch { date, start: whole.start(), end: whole.end() })
    }

    /// All non-overlapping money tokens in a line, with position and sign.
    pub fn find_money(&self, line: &str, line_index: usize) -> Vec<MoneyToken> {
        self.money
            .find_iter(line)
            .filter_map(|m| parse_money(m.as_str(), line_index, m.start()))
            .collect()
    }
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

fn parse_money(raw: &str, line_index: usize, offset: usize) -> Option<MoneyToken> {
    let t = raw.trim();
    let negative = t.starts_with('-') || t.ends_with('-') || t.starts_with('(');
    let has_currency = t.contains('$');
    let digits: String = t.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let value: f64 = digits.parse().ok()?;
    Some(MoneyToken {
        raw: raw.to_string(),
        value,
        negative,
        line: line_index,
        offset,
        has_currency,
    })
}
