use bankparse_core::{Direction, ExtractedPage, Transaction};
use bankparse_profiles::{build, detect, extract_transactions};
use chrono::NaiveDate;

fn page(lines: &[&str]) -> ExtractedPage {
    ExtractedPage { lines: lines.iter().map(|s| s.to_string()).collect(), ..Default::default() }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_invariants(txs: &[Transaction]) {
    for tx in txs {
        assert!(tx.amount >= 0.0, "amount must be non-negative: {tx:?}");
        assert!(!tx.description.is_empty(), "description must not be empty: {tx:?}");
    }
    for w in txs.windows(2) {
        assert!(w[0].date <= w[1].date, "output must be date-sorted: {w:?}");
    }
}

#[test]
fn test_chase_english_statement() {
    let text = "\
JPMorgan Chase Bank, N.A.
May 31, 2024 through June 28, 2024
DEPOSITS AND ADDITIONS
06/03 Remote Online Deposit 1,500.00
ELECTRONIC WITHDRAWALS
06/04 Card Purchase 06/03 Latitude On The Riv 866.800.4656 NE Card 3116 1,254.81
06/05 Orig CO Name:Fpl Direct Debit Orig ID:3590247775 78.66
FEES
06/28 Monthly Service Fee 15.00";
    let bank = detect(text).unwrap();
    assert_eq!(bank, "chase");

    let pages = [page(&text.lines().collect::<Vec<_>>())];
    let txs = extract_transactions(bank, &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 4);

    assert_eq!(txs[0].date, ymd(2024, 6, 3));
    assert_eq!(txs[0].amount, 1500.00);
    assert_eq!(txs[0].direction, Direction::In);

    // Posting date and merchant phone stay in the description; the phone
    // fragment is never mistaken for the amount.
    assert_eq!(txs[1].date, ymd(2024, 6, 4));
    assert_eq!(txs[1].amount, 1254.81);
    assert_eq!(txs[1].direction, Direction::Out);
    assert!(txs[1].description.contains("06/03"));
    assert!(txs[1].description.contains("866.800.4656"));
    assert!(!txs[1].description.contains("1,254.81"));

    assert_eq!(txs[2].amount, 78.66);
    assert_eq!(txs[2].direction, Direction::Out);

    assert_eq!(txs[3].amount, 15.00);
    assert_eq!(txs[3].direction, Direction::Out);
}

#[test]
fn test_chase_spanish_statement_wise_block() {
    let pages = [page(&[
        "JPMorgan Chase Bank, N.A.",
        "1 de noviembre de 2024 a 29 de noviembre de 2024",
        "Retiros electrónicos",
        "11/06 Débito de cámara de compensación automatizada Wise US inc wise",
        "trnwise web ID: 1453233521",
        "-1,924.67 6,954.70",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].date, ymd(2024, 11, 6));
    assert_eq!(txs[0].amount, 1924.67);
    assert_eq!(txs[0].direction, Direction::Out);
    assert!(txs[0].description.contains("Wise US inc"));
}

#[test]
fn test_mojibake_spanish_lines_repaired_before_matching() {
    // Latin-1-decoded section headers and descriptions must be repaired
    // early enough for the Spanish section and direction patterns to fire.
    let pages = [page(&[
        "JPMorgan Chase Bank, N.A.",
        "2024",
        "Retiros ElectrÃ³nicos",
        "11/06 DÃ©bito de cÃ¡mara de compensaciÃ³n automatizada Wise US inc wise",
        "trnwise web ID: 1453233521",
        "-1,924.67 6,954.70",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].date, ymd(2024, 11, 6));
    assert_eq!(txs[0].amount, 1924.67);
    assert_eq!(txs[0].direction, Direction::Out);
    assert!(txs[0].description.contains("compensación"), "got: {}", txs[0].description);
}

#[test]
fn test_explicit_wire_marker_beats_section() {
    // A returned wire credit filed under the withdrawals table must still
    // come out as a credit.
    let pages = [page(&[
        "JPMorgan Chase 2024",
        "ELECTRONIC WITHDRAWALS",
        "06/10 Fedwire Credit Via: Lead Bk 06/10 wire type: wire in B/O: Acme Corp $4,500.00",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].direction, Direction::In);
    assert_eq!(txs[0].amount, 4500.00);
}

#[test]
fn test_daily_balance_table_produces_nothing() {
    let pages = [page(&[
        "JPMorgan Chase 2024",
        "DAILY ENDING BALANCE",
        "11/06 6,954.70",
        "11/07 5,030.03",
        "11/08 4,911.37",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert!(txs.is_empty());
}

#[test]
fn test_reference_id_dedupe_and_fee_exemption() {
    // The same wire appearing in the listing and a per-day recap carries the
    // same Trn id and must collapse; identical fee rows have no id and are
    // additionally exempted, so both survive.
    let pages = [page(&[
        "JPMorgan Chase 2024",
        "DEPOSITS AND ADDITIONS",
        "12/03 Book Transfer Credit B/O: Celio Services Trn: 3340774338Es $68,795.00",
        "12/03 Book Transfer Credit B/O: Celio Services Trn: 3340774338Es $68,795.00",
        "FEES",
        "12/03 Wire Transfer Fee 25.00",
        "12/03 Wire Transfer Fee 25.00",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 3);
    let wires: Vec<_> = txs.iter().filter(|t| t.amount == 68795.00).collect();
    assert_eq!(wires.len(), 1);
    let fees: Vec<_> = txs.iter().filter(|t| t.amount == 25.00).collect();
    assert_eq!(fees.len(), 2);
}

#[test]
fn test_bofa_relationship_glued_rows() {
    let filler = "Zelle payment from Conf number abcdef123 for invoice settlement \
                  covering September services rendered to the Riverside property";
    let glued = format!("10/02/24 {filler} 1,500.00 10/04/24 {filler} 2,400.00");
    let pages = [page(&[
        "Business Advantage Relationship Banking",
        "for October 1, 2024 to October 31, 2024",
        "Deposits and other credits",
        &glued,
        "Total deposits and other credits $3,900.00",
    ])];
    let txs = extract_transactions("bofa_relationship", &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].date, ymd(2024, 10, 2));
    assert_eq!(txs[0].amount, 1500.00);
    assert_eq!(txs[1].date, ymd(2024, 10, 4));
    assert_eq!(txs[1].amount, 2400.00);
}

#[test]
fn test_output_is_date_sorted_across_sections() {
    let pages = [page(&[
        "JPMorgan Chase 2024",
        "DEPOSITS AND ADDITIONS",
        "03/06 Orig CO Name:Sanaa Debs $3,000.00",
        "03/20 Remote Online Deposit $850.00",
        "ELECTRONIC WITHDRAWALS",
        "03/08 Orig CO Name:Fpl Direct Debit 78.66",
    ])];
    let txs = extract_transactions("chase", &pages).unwrap();
    assert_invariants(&txs);
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].date, ymd(2024, 3, 6));
    assert_eq!(txs[1].date, ymd(2024, 3, 8));
    assert_eq!(txs[2].date, ymd(2024, 3, 20));
}

#[test]
fn test_detect_routes_by_branding() {
    assert_eq!(detect("Wells Fargo Combined Statement of Accounts").unwrap(), "wf");
    assert_eq!(detect("mercury.com support help@mercury.com").unwrap(), "mercury");
    assert_eq!(detect("Totally Unknown Bank").unwrap(), "generic");
    // Citi is last in detection order so its broad patterns cannot shadow
    // more specific institutions.
    assert_eq!(detect("CitiBusiness account at Citibank").unwrap(), "citi");
}

#[test]
fn test_generic_profile_handles_unknown_bank() {
    let pages = [page(&[
        "Totally Unknown Bank 2024",
        "04/22 Discover E-Payment 8148 -15.00 53.70",
    ])];
    let bank = detect("Totally Unknown Bank 2024").unwrap();
    let txs = extract_transactions(bank, &pages).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, 15.00);
    assert_eq!(txs[0].direction, Direction::Out);
}

#[test]
fn test_profile_is_data_not_code() {
    // Every profile feeds the same engine entry point.
    for key in bankparse_profiles::keys() {
        let profile = build(key).unwrap();
        let pages = [page(&["Some header 2024"])];
        // No transactions, but also no panic and no error besides the
        // empty-document rule.
        let txs = bankparse_core::run(&profile, &pages).unwrap();
        assert!(txs.is_empty());
    }
}
