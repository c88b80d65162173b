//! Fallback profile for statements from unrecognized institutions: yearless
//! numeric dates, first money token as the amount, no sections.

use anyhow::Result;
use bankparse_core::BankProfile;

pub fn profile() -> Result<BankProfile> {
    Ok(BankProfile::new("generic"))
}
