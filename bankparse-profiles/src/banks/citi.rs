//! CitiBusiness / Citi personal statements. Activity headers mark account
//! boundaries but carry no direction, amounts live in columns that collapse
//! into row text (dollar-marked values preferred, then the largest), and the
//! statements interleave long disclaimer paragraphs with the listing.

use anyhow::Result;
use bankparse_core::profile::re_list;
use bankparse_core::{BankProfile, Direction, DirectionRule, Section, SectionRule, TieBreak};

pub fn profile() -> Result<BankProfile> {
    let mut p = BankProfile::new("citi");
    p.detect = re_list(&[r"(?i)citibusiness", r"(?i)citibank", r"(?i)\bciti\b"])?;

    // Activity headers reset the running section without implying a
    // direction.
    p.sections = vec![
        SectionRule::new(r"(?i)checking activity", Section::None)?,
        SectionRule::new(r"(?i)account activity", Section::None)?,
    ];

    p.noise_prefixes = vec![
        "citibank".to_string(),
        "citibusiness".to_string(),
        "relationship summary".to_string(),
        "checking summary".to_string(),
        "customer service information".to_string(),
        "page ".to_string(),
        "página".to_string(),
        "statement period".to_string(),
        "service charge summary".to_string(),
        "important notice".to_string(),
        "messages from citi".to_string(),
        "citi priority".to_string(),
        "value of accounts this period".to_string(),
        "earnings summary this year".to_string(),
    ];
    p.noise_contains = vec![
        "date description debits credits balance".to_string(),
        "date description amount subtracted amount added balance".to_string(),
        "beginning balance".to_string(),
        "ending balance".to_string(),
        "balance subject".to_string(),
        "average daily collected balance".to_string(),
        "type of charge".to_string(),
        "charges debited from account".to_string(),
        "total charges for services".to_string(),
        "net service charge".to_string(),
        "daily ending balance".to_string(),
    ];

    p.legal_start = vec![
        "in case of errors".to_string(),
        "important disclosures".to_string(),
        "amendments to the citibusiness client manual".to_string(),
        "billing rights summary".to_string(),
    ];
    p.legal_end = vec![
        "member fdic".to_string(),
        "we will correct any error".to_string(),
    ];
    p.legal_inline = vec![
        "fdic insurance".to_string(),
        "apy and interest rate".to_string(),
    ];

    p.tie_break = TieBreak::Largest;
    p.prefer_currency = true;

    p.direction_overrides = vec![
        DirectionRule::new(r"(?i)\bfunds\s+trn\s+out\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bcbusol\s+transfer\s+debit\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bint(?:'?l|ernational)\s+wire\s+out\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bother/withdrawal\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bincoming\s+wire\s+fee\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bmonthly\s+maintenance\s+fee\b", Direction::Out)?,
        DirectionRule::new(r"(?i)\bfunds\s+transfer\b.*\bfrom\b", Direction::In)?,
        DirectionRule::new(r"(?i)\binterest\s+paid\b", Direction::In)?,
    ];
    Ok(p)
}
