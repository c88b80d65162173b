//! Chase business checking, English and Spanish statement layouts.
//!
//! Chase rows mix posting dates, merchant phone numbers, card suffixes, and
//! a running balance into one line, so this profile leans hardest on the
//! engine's spurious-context filters and the currency/sign candidate tiers.

use anyhow::Result;
use bankparse_core::profile::re_list;
use bankparse_core::{BankProfile, Direction, DirectionRule, Section, SectionRule, TieBreak};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("chase");
    p.detect = re_list(&[r"(?i)jpmorgan\s+chase", r"(?i)\bchase\.com\b"])?;

    p.sections = vec![
        SectionRule::new(r"(?i)^deposits and additions", Section::Deposits)?,
        SectionRule::new(r"(?i)^dep[óo]sitos y adiciones", Section::Deposits)?,
        SectionRule::new(r"(?i)^electronic withdrawals", Section::Withdrawals)?,
        SectionRule::new(r"(?i)^retiros electr[óo]nicos", Section::Withdrawals)?,
        SectionRule::new(r"(?i)^atm\s*&\s*debit card withdrawals", Section::Withdrawals)?,
        SectionRule::new(r"(?i)^checks paid", Section::Withdrawals)?,
        SectionRule::new(r"(?i)^fees\b", Section::Fees)?,
        SectionRule::new(r"(?i)^cargos\b", Section::Fees)?,
        // The daily-balance table ends the transaction listing.
        SectionRule::new(r"(?i)^daily ending balance", Section::None)?,
        SectionRule::new(r"(?i)^saldo final diario", Section::None)?,
    ];

    p.noise_prefixes = vec![
        "jpmorgan chase bank".to_string(),
        "chase.com".to_string(),
        "customer service".to_string(),
        "servicio al cliente".to_string(),
        "account number".to_string(),
        "número de cuenta".to_string(),
    ];
    p.noise_contains = vec![
        "total deposits and additions".to_string(),
        "total electronic withdrawals".to_string(),
        "total fees".to_string(),
        "total de".to_string(),
        "continued on the next page".to_string(),
        "(continued)".to_string(),
    ];
    p.noise_patterns = re_list(&[r"(?i)\bpage\s+\d+\s+of\s+\d+\b"])?;

    p.legal_start = vec![
        "in case of errors".to_string(),
        "en caso de errores".to_string(),
    ];
    p.legal_end = vec![
        "we will correct any error".to_string(),
        "investigaremos su reclamo".to_string(),
    ];
    p.legal_inline = vec![
        "call us at 1-".to_string(),
        "llámenos al".to_string(),
        "member fdic".to_string(),
    ];

    p.tie_break = TieBreak::Largest;
    p.prefer_currency = true;
    // Card-digit and rate fragments fall below a plausible Chase amount.
    p.min_amount = 1.0;

    p.direction_overrides = vec![
        DirectionRule::new(r"(?i)d[ée]bito de c[áa]mara de compensaci[óo]n", Direction::Out)?,
        DirectionRule::new(r"(?i)cr[ée]dito de c[áa]mara de compensaci[óo]n", Direction::In)?,
        DirectionRule::new(r"(?i)\btrnwise\b|\bwise\s+us\s+inc\b", Direction::Out)?,
    ];

    p.dedupe_exempt = vec!["wire transfer fee".to_string()];
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankparse_core::ExtractedPage;
    use chrono::NaiveDate;

    fn page(lines: &[&str]) -> ExtractedPage {
        ExtractedPage { lines: lines.iter().map(|s| s.to_string()).collect(), ..Default::default() }
    }

    #[test]
    fn test_card_purchase_with_phone_and_card_suffix() {
        let p = profile().unwrap();
        let pages = [page(&[
            "May 31, 2024 through June 28, 2024",
            "ATM & DEBIT CARD WITHDRAWALS",
            "06/04 Card Purchase 06/03 Latitude On The Riv 866.800.4656 NE Card 3116 1,254.81",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(txs[0].amount, 1254.81);
        assert_eq!(txs[0].direction, Direction::Out);
        assert!(txs[0].description.contains("866.800.4656"));
    }

    #[test]
    fn test_spanish_wise_debit_signed_beats_balance() {
        let p = profile().unwrap();
        let pages = [page(&[
            "1 de noviembre de 2024 a 29 de noviembre de 2024",
            "Retiros electrónicos",
            "11/06 Débito de cámara de compensación automatizada Wise US inc wise",
            "trnwise web ID: 1453233521",
            "-1,924.67 6,954.70",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 1924.67);
        assert_eq!(txs[0].direction, Direction::Out);
    }

    #[test]
    fn test_ach_deposit_under_deposits_section() {
        let p = profile().unwrap();
        let pages = [page(&[
            "March 1, 2024 through March 29, 2024",
            "DEPOSITS AND ADDITIONS",
            "03/06 Orig CO Name:Sanaa Debs Orig ID:Xxxxxxxxx $3,000.00",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 3000.00);
        assert_eq!(txs[0].direction, Direction::In);
    }

    #[test]
    fn test_daily_ending_balance_table_ignored() {
        let p = profile().unwrap();
        let pages = [page(&[
            "2024 statement",
            "ELECTRONIC WITHDRAWALS",
            "06/04 Zelle Payment To Ana 12345 50.00",
            "DAILY ENDING BALANCE",
            "06/04 11,516.13",
            "06/05 10,261.32",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 50.00);
    }

    #[test]
    fn test_legal_disclaimer_span_suppressed() {
        let p = profile().unwrap();
        let pages = [page(&[
            "2024",
            "DEPOSITS AND ADDITIONS",
            "03/06 Remote Online Deposit 250.00",
            "In case of errors or questions about your electronic funds transfers",
            "03/07 call us at 1-866-564-2262 or write us at the address 99.00",
            "We will correct any error promptly",
        ])];
        let txs = bankparse_core::run(&p, &pages).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 250.00);
    }
}
