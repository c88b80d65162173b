//! Injectable observability hook. The engine reports segmentation decisions
//! through this trait; correctness never depends on it.

use chrono::NaiveDate;

use crate::types::{RawLine, Section, TransactionBlock};

pub trait ParseObserver {
    fn on_section_change(&self, _line: &RawLine, _section: Section) {}
    fn on_block_opened(&self, _line: &RawLine, _date: NaiveDate) {}
    fn on_block_closed(&self, _block: &TransactionBlock) {}
    fn on_block_dropped(&self, _block: &TransactionBlock, _reason: &str) {}
    fn on_line_skipped(&self, _line: &RawLine, _reason: &str) {}
}

/// The default: observe nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
    fn on_section_change(&self, line: &RawLine, section: Section) {
        log::debug!("section {:?} at page {} line {}: {}", section, line.page, line.index, line.text);
    }

    fn on_block_opened(&self, line: &RawLine, date: NaiveDate) {
        log::debug!("block opened {} at page {} line {}", date, line.page, line.index);
    }

    fn on_block_closed(&self, block: &TransactionBlock) {
        log::debug!("block closed {} ({} lines)", block.date, block.lines.len());
    }

    fn on_block_dropped(&self, block: &TransactionBlock, reason: &str) {
        log::debug!("block dropped {} ({}): {}", block.date, reason, block.lines.first().map(|l| l.text.as_str()).unwrap_or(""));
    }

    fn on_line_skipped(&self, line: &RawLine, reason: &str) {
        log::trace!("skipped ({}) page {} line {}: {}", reason, line.page, line.index, line.text);
    }
}
