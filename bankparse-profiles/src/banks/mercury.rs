//! Mercury (Choice Financial Group). Rows anchor on `Mon D` dates with the
//! statement year in the header; the amount precedes the trailing balance.

use anyhow::Result;
use bankparse_core::profile::re_list;
use bankparse_core::{BankProfile, DateFormat};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("mercury");
    p.detect = re_list(&[
        r"(?i)\bmercury\b",
        r"(?i)choice\s+financial\s+group",
        r"(?i)help@mercury\.com",
    ])?;

    p.date_formats = vec![DateFormat::MonthAbbrev, DateFormat::Numeric, DateFormat::MonthName];
    Ok(p)
}
