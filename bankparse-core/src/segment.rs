//! Block segmentation: the central state machine.
//!
//! Consumes normalized lines and emits `TransactionBlock`s. Two states:
//! searching (no open block) and accumulating (block open). Section and
//! legal-span state live in a per-invocation `SegmenterState`, never shared
//! across documents.

use crate::amount::{self, ColumnHints, ContextPatterns};
use crate::noise::{self, NoisePatterns};
use crate::observe::ParseObserver;
use crate::profile::BankProfile;
use crate::tokens::TokenPatterns;
use crate::types::{RawLine, Section, TransactionBlock};

#[derive(Debug, Default)]
pub struct SegmenterState {
    pub section: Section,
    pub in_legal: bool,
}

impl SegmenterState {
    /// Lines inside a disclaimer span (start phrase through end phrase,
    /// inclusive) are suppressed entirely.
    fn legal_suppressed(&mut self, lower: &str, profile: &BankProfile) -> bool {
        if !self.in_legal {
            if profile.legal_start.iter().any(|p| lower.starts_with(p.as_str())) {
                self.in_legal = true;
                return true;
            }
            return false;
        }
        if profile.legal_end.iter().any(|p| lower.starts_with(p.as_str())) {
            self.in_legal = false;
        }
        true
    }
}

pub fn segment(
    lines: &[RawLine],
    profile: &BankProfile,
    tokens: &TokenPatterns,
    shared_noise: &NoisePatterns,
    ctx: &ContextPatterns,
    hints: &ColumnHints,
    year: i32,
    observer: &dyn ParseObserver,
) -> Vec<TransactionBlock> {
    let mut state = SegmenterState::default();
    let mut blocks: Vec<TransactionBlock> = Vec::new();
    let mut open: Option<TransactionBlock> = None;
    let mut blank_run = 0usize;

    for raw in lines {
        if raw.text.trim().is_empty() {
            blank_run += 1;
            if blank_run >= 2 {
                close(&mut open, &mut blocks, observer);
            }
            continue;
        }
        blank_run = 0;
        let lower = raw.text.to_lowercase();

        if state.legal_suppressed(&lower, profile) {
            observer.on_line_skipped(raw, "legal span");
            continue;
        }
        if profile.legal_inline.iter().any(|m| lower.contains(m.as_str())) {
            observer.on_line_skipped(raw, "legal marker");
            continue;
        }

        if let Some(section) = noise::detect_section(&raw.text, profile) {
            close(&mut open, &mut blocks, observer);
            state.section = section;
            observer.on_section_change(raw, section);
            continue;
        }

        if noise::is_noise(&raw.text, profile, shared_noise) {
            if profile.noise_closes_block {
                close(&mut open, &mut blocks, observer);
            }
            observer.on_line_skipped(raw, "noise");
            continue;
        }

        if let Some(dm) = tokens.match_date(&raw.text, &profile.date_formats, year) {
            // A new date anchor always closes the previous block first.
            close(&mut open, &mut blocks, observer);
            if profile.require_section && state.section == Section::None {
                observer.on_line_skipped(raw, "no section");
                continue;
            }
            observer.on_block_opened(raw, dm.date);
            let block = TransactionBlock {
                date: dm.date,
                section: state.section,
                lines: vec![raw.clone()],
                amount: None,
            };
            open = Some(block);
            maybe_close_on_amount(&mut open, &mut blocks, profile, tokens, ctx, hints, observer);
            continue;
        }

        if let Some(block) = open.as_mut() {
            block.lines.push(raw.clone());
            maybe_close_on_amount(&mut open, &mut blocks, profile, tokens, ctx, hints, observer);
        }
    }

    close(&mut open, &mut blocks, observer);
    blocks
}

fn close(
    open: &mut Option<TransactionBlock>,
    blocks: &mut Vec<TransactionBlock>,
    observer: &dyn ParseObserver,
) {
    if let Some(block) = open.take() {
        observer.on_block_closed(&block);
        blocks.push(block);
    }
}

/// Incremental amount resolution: when the profile marks amounts as
/// block-closing, a satisfied resolver freezes the block so it cannot
/// absorb the next transaction's lines.
fn maybe_close_on_amount(
    open: &mut Option<TransactionBlock>,
    blocks: &mut Vec<TransactionBlock>,
    profile: &BankProfile,
    tokens: &TokenPatterns,
    ctx: &ContextPatterns,
    hints: &ColumnHints,
    observer: &dyn ParseObserver,
) {
    if !profile.amount_closes_block {
        return;
    }
    let Some(block) = open.as_mut() else {
        return;
    };
    if let Some(tok) = amount::resolve(&block.lines, tokens, ctx, profile, hints) {
        block.amount = Some(tok);
        close(open, blocks, observer);
    }
}
