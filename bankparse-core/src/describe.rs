//! Description cleaning: strip the anchor date and amount tokens from a
//! block's joined text, drop boilerplate suffixes, normalize whitespace.
//! Pure; may return an empty string, which the aggregator treats as
//! "insufficient evidence".

use anyhow::Result;
use regex::Regex;

use crate::amount::ContextPatterns;
use crate::profile::BankProfile;
use crate::tokens::TokenPatterns;
use crate::types::RawLine;

/// Boilerplate fragments that survive segmentation glued to descriptions.
#[derive(Debug)]
pub struct CleanPatterns {
    boilerplate: Vec<Regex>,
}

impl CleanPatterns {
    pub fn new() -> Result<Self> {
        let patterns = [
            r"(?i)\bcontinued on (?:the )?next page\b",
            r"(?i)\(continued\)",
            r"(?i)\bdaily ending balance\b",
            r"(?i)\bdate\s+description\s+debits\s+credits\s+balance\b",
            r"(?i)\bdate\s+description\s+amount(?:\s+subtracted\s+amount\s+added)?(?:\s+balance)?\b",
            r"(?i)\bfecha\s+descripci[óo]n\s+cantidad(?:\s+saldo)?\b",
            r"(?i)\bdate\s+amount\b",
            r"(?i)\bbeginning balance\b",
            r"(?i)\bending balance\b",
        ];
        Ok(Self { boilerplate: patterns.iter().map(|p| Ok(Regex::new(p)?)).collect::<Result<_>>()? })
    }
}

/// Clean the residual description for a block of lines.
///
/// The anchor date prefix is stripped from each line; interior dates (a
/// card-purchase posting date, say) survive. Money tokens are removed
/// unless they sit in phone/ZIP/card context — those digits are part of
/// the merchant text, not amounts.
pub fn clean(
    lines: &[RawLine],
    tokens: &TokenPatterns,
    ctx: &ContextPatterns,
    profile: &BankProfile,
    year: i32,
    patterns: &CleanPatterns,
) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(lines.len());
    for raw in lines {
        let text = raw.text.as_str();
        match tokens.match_date(text, &profile.date_formats, year) {
            Some(dm) if text[..dm.start].trim().is_empty() => parts.push(text[dm.end..].trim()),
            _ => parts.push(text.trim()),
        }
    }
    let joined = parts.join(" ");

    let mut out = String::with_capacity(joined.len());
    let mut last = 0usize;
    for m in tokens.money.find_iter(&joined) {
        out.push_str(&joined[last..m.start()]);
        if ctx.is_spurious(&joined, m.start(), m.end()) {
            out.push_str(m.as_str());
        } else {
            out.push(' ');
        }
        last = m.end();
    }
    out.push_str(&joined[last..]);

    let mut cleaned = out;
    for re in &patterns.boilerplate {
        cleaned = re.replace_all(&cleaned, " ").into_owned();
    }

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize_first(&collapsed)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_texts(texts: &[&str]) -> String {
        let profile = BankProfile::new("test");
        let tokens = TokenPatterns::new(true).unwrap();
        let ctx = ContextPatterns::new().unwrap();
        let patterns = CleanPatterns::new().unwrap();
        let lines: Vec<RawLine> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| RawLine { text: t.to_string(), page: 0, index: i, words: Vec::new() })
            .collect();
        clean(&lines, &tokens, &ctx, &profile, 2024, &patterns)
    }

    #[test]
    fn test_strips_anchor_date_keeps_interior_date() {
        let desc = clean_texts(&[
            "06/04 Card Purchase 06/03 Latitude On The Riv 866.800.4656 NE Card 3116 1,254.81",
        ]);
        assert!(desc.starts_with("Card Purchase 06/03"), "got: {desc}");
        assert!(desc.contains("Latitude On The Riv"));
        assert!(desc.contains("Card 3116"));
        assert!(!desc.contains("1,254.81"));
        // The phone number is merchant text, not an amount.
        assert!(desc.contains("866.800.4656"), "got: {desc}");
    }

    #[test]
    fn test_removes_amounts_and_joins_lines() {
        let desc = clean_texts(&[
            "11/06 Débito de cámara de compensación automatizada. Wise US inc wise",
            "trnwise web ID: 1453233521",
            "-1,924.67 6,954.70",
        ]);
        assert!(desc.contains("Wise US inc"));
        assert!(desc.contains("trnwise web ID: 1453233521"));
        assert!(!desc.contains("1,924.67"));
        assert!(!desc.contains("6,954.70"));
    }

    #[test]
    fn test_boilerplate_suffixes_removed() {
        let desc = clean_texts(&["06/04 Zelle Payment To Ana 50.00 continued on the next page"]);
        assert_eq!(desc, "Zelle Payment To Ana");
    }

    #[test]
    fn test_capitalizes_first_letter() {
        let desc = clean_texts(&["06/04 wire fee 25.00"]);
        assert_eq!(desc, "Wire fee");
    }

    #[test]
    fn test_empty_when_nothing_survives() {
        assert_eq!(clean_texts(&["06/04 15.00"]), "");
    }
}
