//! International Finance Bank. Multi-line rows end at the next date anchor;
//! the amount precedes the balance column.

use anyhow::Result;
use bankparse_core::BankProfile;
use bankparse_core::profile::re_list;

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("ifb");
    p.detect = re_list(&[
        r"(?i)international\s+finance\s+bank",
        r"(?i)\bifb\s+bus\s+checking\b",
        r"(?i)ifbbank\.com",
    ])?;

    // Rows continue across lines until the next date, so an early money
    // token must not freeze the block.
    p.amount_closes_block = false;
    Ok(p)
}
