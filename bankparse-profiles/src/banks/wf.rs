//! Wells Fargo business checking. Rows put the transaction amount before
//! the running balance (first token wins) and wire lines use the terse `WT`
//! vocabulary handled by the shared direction rules.

use anyhow::Result;
use bankparse_core::BankProfile;
use bankparse_core::profile::re_list;

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("wf");
    p.detect = re_list(&[r"(?i)wells\s+fargo", r"(?i)wellsfargo\.com", r"\bWT\s"])?;

    p.noise_contains = vec![
        "statement period activity summary".to_string(),
        "beginning balance on".to_string(),
        "ending balance on".to_string(),
    ];
    p.noise_patterns = re_list(&[r"(?i)^\s*page\s+\d+\s+of\s+\d+\s*$"])?;
    Ok(p)
}
