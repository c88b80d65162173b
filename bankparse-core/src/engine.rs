//! Pipeline orchestration: pages in, transactions out.
//!
//! Every pass is deterministic and the whole run is a pure function of the
//! profile and the extracted pages, so re-running a document always yields
//! the same records.

use anyhow::{Result, bail};
use chrono::Datelike;
use log::debug;
use regex::Regex;

use crate::aggregate::{self, Draft, RefIdPatterns};
use crate::amount::{self, ColumnHints, ContextPatterns};
use crate::describe::{self, CleanPatterns};
use crate::direction;
use crate::noise::NoisePatterns;
use crate::normalize;
use crate::observe::{NoopObserver, ParseObserver};
use crate::profile::BankProfile;
use crate::segment;
use crate::tokens::TokenPatterns;
use crate::types::{ExtractedPage, RawLine, Section, Transaction};

/// Extractors that glue a whole table into one line produce rows well past
/// any plausible single-transaction width.
const GLUED_LINE_MIN_LEN: usize = 220;

/// Extract transactions from already-extracted statement pages.
pub fn run(profile: &BankProfile, pages: &[ExtractedPage]) -> Result<Vec<Transaction>> {
    run_with(profile, pages, &NoopObserver)
}

/// [`run`] with an observer receiving segmentation decisions.
pub fn run_with(
    profile: &BankProfile,
    pages: &[ExtractedPage],
    observer: &dyn ParseObserver,
) -> Result<Vec<Transaction>> {
    let tokens = TokenPatterns::new(profile.require_cents)?;
    let ctx = ContextPatterns::new()?;
    let shared_noise = NoisePatterns::new()?;
    let clean_patterns = CleanPatterns::new()?;
    let shared_rules = direction::shared_rules()?;
    let ids = RefIdPatterns::new()?;
    let glue = Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\s")?;
    let year_re = Regex::new(r"\b(20\d{2})\b")?;

    let lines = collect_lines(pages, profile, &glue);
    if lines.iter().all(|l| l.text.is_empty()) {
        bail!("document contains no extractable text");
    }

    let year = detect_year(&lines, &year_re);
    let hints = ColumnHints::from_pages(pages, &tokens.money);

    if profile.prefer_tables {
        let drafts = table_drafts(pages, profile, &tokens, &ctx, &clean_patterns, &shared_rules, year);
        if !drafts.is_empty() {
            debug!("{}: {} records from table rows", profile.key, drafts.len());
            return Ok(aggregate::finalize(drafts, profile, &ids));
        }
    }

    let blocks =
        segment::segment(&lines, profile, &tokens, &shared_noise, &ctx, &hints, year, observer);
    let mut drafts: Vec<Draft> = Vec::new();
    for block in blocks {
        let resolved = block
            .amount
            .clone()
            .or_else(|| amount::resolve(&block.lines, &tokens, &ctx, profile, &hints));
        let Some(tok) = resolved else {
            observer.on_block_dropped(&block, "no amount");
            continue;
        };
        let description =
            describe::clean(&block.lines, &tokens, &ctx, profile, year, &clean_patterns);
        // A residue of digits and punctuation (a daily-balance row, say) is
        // not a transaction.
        if !description.chars().any(char::is_alphabetic) {
            observer.on_block_dropped(&block, "no description text");
            continue;
        }
        let direction = direction::classify(
            &description,
            block.section,
            tok.signed(),
            &profile.direction_overrides,
            &shared_rules,
        );
        drafts.push(Draft {
            date: block.date,
            description,
            signed_amount: tok.signed(),
            direction,
        });
    }

    debug!("{}: {} candidate records, year {}", profile.key, drafts.len(), year);
    Ok(aggregate::finalize(drafts, profile, &ids))
}

/// Normalize page lines into `RawLine`s, attaching the page's positioned
/// words to the lines that contain them. Blank lines are kept; the
/// segmenter uses blank runs as block boundaries.
fn collect_lines(pages: &[ExtractedPage], profile: &BankProfile, glue: &Regex) -> Vec<RawLine> {
    let mut out = Vec::new();
    for (page_no, page) in pages.iter().enumerate() {
        for (index, text) in page.lines.iter().enumerate() {
            let text = normalize::normalize_line(text);
            for piece in split_glued(text, profile, glue) {
                let words = page
                    .words
                    .iter()
                    .filter(|w| !w.text.is_empty() && piece.contains(w.text.as_str()))
                    .cloned()
                    .collect();
                out.push(RawLine { text: piece, page: page_no, index, words });
            }
        }
    }
    out
}

/// Split one over-long extractor line back into its dated rows. Each
/// interior `M/D/YY ` occurrence starts a new piece.
fn split_glued(text: String, profile: &BankProfile, glue: &Regex) -> Vec<String> {
    if !profile.split_concatenated || text.chars().count() <= GLUED_LINE_MIN_LEN {
        return vec![text];
    }
    let starts: Vec<usize> = glue.find_iter(&text).map(|m| m.start()).filter(|s| *s > 0).collect();
    if starts.is_empty() {
        return vec![text];
    }
    let mut pieces = Vec::with_capacity(starts.len() + 1);
    let mut prev = 0usize;
    for s in starts {
        pieces.push(text[prev..s].trim().to_string());
        prev = s;
    }
    pieces.push(text[prev..].trim().to_string());
    pieces.retain(|p| !p.is_empty());
    pieces
}

/// The statement year for date tokens that omit one. First four-digit year
/// in the document wins; current year when the document never states one.
fn detect_year(lines: &[RawLine], re: &Regex) -> i32 {
    lines
        .iter()
        .find_map(|l| re.captures(&l.text).and_then(|c| c[1].parse().ok()))
        .unwrap_or_else(|| chrono::Utc::now().year())
}

/// Structured-table pass: each row is one transaction, first cell the date,
/// remaining cells the description and amount.
fn table_drafts(
    pages: &[ExtractedPage],
    profile: &BankProfile,
    tokens: &TokenPatterns,
    ctx: &ContextPatterns,
    clean_patterns: &CleanPatterns,
    shared_rules: &[crate::profile::DirectionRule],
    year: i32,
) -> Vec<Draft> {
    let mut drafts = Vec::new();
    for page in pages {
        for row in &page.table_rows {
            let Some(first) = row.first() else {
                continue;
            };
            let first = normalize::normalize_line(first);
            let Some(dm) = tokens.match_date(&first, &profile.date_formats, year) else {
                continue;
            };
            let joined = row
                .iter()
                .map(|c| normalize::normalize_line(c))
                .collect::<Vec<_>>()
                .join(" ");
            let line = RawLine { text: joined, page: 0, index: 0, words: Vec::new() };
            let lines = std::slice::from_ref(&line);
            let Some(tok) = amount::resolve(lines, tokens, ctx, profile, &ColumnHints::default())
            else {
                continue;
            };
            let description = describe::clean(lines, tokens, ctx, profile, year, clean_patterns);
            if !description.chars().any(char::is_alphabetic) {
                continue;
            }
            let direction = direction::classify(
                &description,
                Section::None,
                tok.signed(),
                &profile.direction_overrides,
                shared_rules,
            );
            drafts.push(Draft {
                date: dm.date,
                description,
                signed_amount: tok.signed(),
                direction,
            });
        }
    }
    drafts
}
