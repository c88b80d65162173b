//! Bank of America Business Advantage Relationship layout: long
//! multi-page tables whose text extraction sometimes glues several
//! `MM/DD/YY` rows into one line, and whose `Total ...` rows end a section.

use anyhow::Result;
use bankparse_core::profile::re_list;
use bankparse_core::{BankProfile, Section, SectionRule, TieBreak};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("bofa_relationship");
    p.detect = re_list(&[
        r"(?i)business\s+advantage\s+relationship\s+banking",
        r"(?i)preferred\s+rewards\s+for\s+bus",
    ])?;

    p.sections = vec![
        SectionRule::new(r"(?i)\bdeposits and other credits\b", Section::Deposits)?,
        SectionRule::new(r"(?i)\bwithdrawals and other debits\b", Section::Withdrawals)?,
        SectionRule::new(r"(?i)^total (?:deposits|withdrawals)", Section::None)?,
    ];

    p.noise_prefixes = vec![
        "daily ledger balances".to_string(),
        "important messages".to_string(),
        "your checking account".to_string(),
    ];
    p.noise_contains = vec!["continued on the next page".to_string()];
    p.noise_patterns = re_list(&[r"(?i)^\s*date\s+description\s+amount\s*$"])?;

    p.tie_break = TieBreak::Last;
    p.amount_closes_block = false;
    p.require_section = true;
    p.split_concatenated = true;
    Ok(p)
}
