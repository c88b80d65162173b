//! Truist business checking. Single-line rows under coarse section headers;
//! the withdrawals header vocabulary varies between layouts.

use anyhow::Result;
use bankparse_core::profile::re_list;
use bankparse_core::{BankProfile, Section, SectionRule};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("truist");
    p.detect = re_list(&[r"(?i)\btruist\b"])?;

    p.sections = vec![
        SectionRule::new(r"(?i)deposits.*credits", Section::Deposits)?,
        SectionRule::new(r"(?i)other withdrawals|debits|service charges", Section::Withdrawals)?,
    ];
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankparse_core::{Direction, ExtractedPage};

    fn page(lines: &[&str]) -> ExtractedPage {
        ExtractedPage { lines: lines.iter().map(|s| s.to_string()).collect(), ..Default::default() }
    }

    #[test]
    fn test_sectioned_single_line_rows() {
        let p = profile().unwrap();
        let pages = [page(&[
            "Truist statement 2024",
            "Deposits, credits and interest",
            "02/12 Mobile deposit realtime 1,100.00",
            "Other withdrawals, debits and service charges",
            "02/14 Zelle payment to Landscaping Llc 300.00",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].amount, 1100.00);
        assert_eq!(txs[0].direction, Direction::In);
        assert_eq!(txs[1].amount, 300.00);
        assert_eq!(txs[1].direction, Direction::Out);
    }

    #[test]
    fn test_keyword_fallback_without_section() {
        let p = profile().unwrap();
        let pages = [page(&["2024", "02/15 ACH Corp Bill Pmt vendor portal 89.10"])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].direction, Direction::Out);
    }
}
