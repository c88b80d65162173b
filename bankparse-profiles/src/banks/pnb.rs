//! Pacific National Bank. Descriptions span several lines with the amount
//! on its own row, debits marked by a trailing `-` (`63.43-`).

use anyhow::Result;
use bankparse_core::BankProfile;
use bankparse_core::profile::re_list;

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("pnb");
    p.detect = re_list(&[
        r"(?i)pacific\s+national\s+bank",
        r"(?i)p\.o\. box 012620, miami",
        r"\bACCT ENDING\b",
    ])?;

    p.amount_closes_block = false;
    Ok(p)
}
