//! Bank of America business checking. Amounts print at the end of the row
//! (last token), transaction rows only exist inside a named section, and the
//! statements carry a lot of marketing and summary text, hence the long
//! noise list and the minimum line length.

use anyhow::Result;
use bankparse_core::{BankProfile, Section, SectionRule, TieBreak};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("bofa");
    p.detect = bankparse_core::profile::re_list(&[
        r"(?i)bank\s+of\s+america",
        r"(?i)bankofamerica\.com",
    ])?;

    p.sections = vec![
        SectionRule::new(r"(?i)deposits\s+and\s+other\s+credits", Section::Deposits)?,
        SectionRule::new(r"(?i)withdrawals\s+and\s+other\s+debits", Section::Withdrawals)?,
        SectionRule::new(r"(?i)service\s+fees", Section::Fees)?,
    ];

    p.noise_contains = vec![
        "total deposits".to_string(),
        "total withdrawals".to_string(),
        "total service fees".to_string(),
        "subtotal for card".to_string(),
        "continued on the next page".to_string(),
        "account summary".to_string(),
        "beginning balance".to_string(),
        "ending balance".to_string(),
        "average ledger".to_string(),
        "daily ledger balances".to_string(),
        "important information".to_string(),
        "preferred rewards".to_string(),
        "your checking account".to_string(),
        "bank of america".to_string(),
        "customer service information".to_string(),
        "monthly fee".to_string(),
        "congratulations".to_string(),
    ];
    p.noise_patterns = bankparse_core::profile::re_list(&[r"(?i)\bpage\s+\d+\s+of\s+\d+\b"])?;
    p.min_line_len = 15;

    // The amount is the row's last money token, so blocks must accumulate
    // until the next date or noise boundary.
    p.tie_break = TieBreak::Last;
    p.amount_closes_block = false;
    p.noise_closes_block = true;
    p.require_section = true;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankparse_core::{Direction, ExtractedPage};
    use chrono::NaiveDate;

    fn page(lines: &[&str]) -> ExtractedPage {
        ExtractedPage { lines: lines.iter().map(|s| s.to_string()).collect(), ..Default::default() }
    }

    #[test]
    fn test_sectioned_rows_use_last_token() {
        let p = profile().unwrap();
        let pages = [page(&[
            "Bank of America, N.A. statement for October 2024",
            "Deposits and other credits",
            "10/02/24 Zelle payment from Carlos Conf# abc123def 2,500.00",
            "Withdrawals and other debits",
            "10/04/24 CHECKCARD 1003 Supply House TX 24231684 135.20",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2024, 10, 2).unwrap());
        assert_eq!(txs[0].amount, 2500.00);
        assert_eq!(txs[0].direction, Direction::In);
        assert_eq!(txs[1].amount, 135.20);
        assert_eq!(txs[1].direction, Direction::Out);
    }

    #[test]
    fn test_dated_rows_outside_sections_ignored() {
        let p = profile().unwrap();
        let pages = [page(&[
            "2024",
            "10/02/24 looks like a transaction but no section yet 1,000.00",
            "Service fees",
            "10/31/24 Monthly maintenance charge applied here 16.00",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 16.00);
        assert_eq!(txs[0].direction, Direction::Out);
    }

    #[test]
    fn test_summary_rows_are_noise() {
        let p = profile().unwrap();
        let pages = [page(&[
            "2024",
            "Deposits and other credits",
            "10/02/24 Wire in from Acme Industries Ltd 5,000.00",
            "Total deposits and other credits 5,000.00",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 5000.00);
    }

    #[test]
    fn test_short_lines_never_join_blocks() {
        let p = profile().unwrap();
        let pages = [page(&[
            "2024",
            "Withdrawals and other debits",
            "10/04/24 CHECKCARD Supply House Houston TX",
            "135.20 and ref 24231684001 follows here",
            "short line",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 135.20);
    }
}
