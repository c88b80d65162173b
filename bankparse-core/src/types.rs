//! Shared types for the statement extraction pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether money enters or leaves the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Running statement sub-section, inferred from headers such as
/// "DEPOSITS AND ADDITIONS". Used as a default direction signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    None,
    Deposits,
    Withdrawals,
    Fees,
}

/// A positioned word from the text extractor, when word-level output exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
    pub top: f64,
}

/// One extracted page: ordered text lines, plus optional table rows (each a
/// list of cell strings) and positioned words when the extractor provides
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    pub lines: Vec<String>,
    #[serde(default)]
    pub table_rows: Vec<Vec<String>>,
    #[serde(default)]
    pub words: Vec<Word>,
}

/// A normalized statement line with its provenance. `words` holds the page
/// words matched to this line, empty when the extractor gave none.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine {
    pub text: String,
    pub page: usize,
    pub index: usize,
    pub words: Vec<Word>,
}

/// A substring matching the currency-amount pattern, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyToken {
    pub raw: String,
    /// Magnitude, always >= 0. Sign lives in `negative`.
    pub value: f64,
    pub negative: bool,
    /// Index of the contributing line within its block.
    pub line: usize,
    /// Byte offset of the match within that line.
    pub offset: usize,
    pub has_currency: bool,
}

impl MoneyToken {
    pub fn signed(&self) -> f64 {
        if self.negative { -self.value } else { self.value }
    }
}

/// A contiguous run of lines believed to describe one transaction, anchored
/// by a recognized date line. Never spans two date anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBlock {
    pub date: NaiveDate,
    /// Section in effect when the block was opened.
    pub section: Section,
    pub lines: Vec<RawLine>,
    /// Filled by the segmenter when the profile closes blocks on a resolved
    /// amount; otherwise resolved at block close.
    pub amount: Option<MoneyToken>,
}

/// Final normalized output unit. `amount` is always >= 0; `direction`
/// carries the sign semantics. Immutable once emitted by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub direction: Direction,
}
