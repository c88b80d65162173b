//! Valley National Bank. Extraction usually yields clean tables, so the
//! table pass runs first and the line pass is the fallback.

use anyhow::Result;
use bankparse_core::BankProfile;
use bankparse_core::profile::re_list;

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("valley");
    p.detect = re_list(&[
        r"(?i)valley\s+national\s+bank",
        r"(?i)\bvalley\b",
        r"(?i)valley\.com",
    ])?;

    p.prefer_tables = true;
    Ok(p)
}
