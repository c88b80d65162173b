//! bankparse-profiles: concrete bank profiles and the detection router.
//!
//! Each supported institution is one [`BankProfile`] built in
//! [`banks`]; this crate adds nothing to the pipeline itself. The router
//! matches ordered per-profile detection patterns against the document text,
//! most specific institutions first, and falls back to `generic`.

pub mod banks;

use anyhow::{Result, bail};
use bankparse_core::{BankProfile, ExtractedPage, Transaction};

/// Detection order: institutions with unambiguous markers come first so a
/// generic phrase ("Valley", "Citi") cannot shadow them.
const DETECTION_ORDER: [&str; 10] = [
    "ifb",
    "valley",
    "mercury",
    "pnb",
    "bofa_relationship",
    "bofa",
    "truist",
    "chase",
    "wf",
    "citi",
];

/// Router only scans this much text; statements front-load their branding.
const DETECT_SCAN_LIMIT: usize = 20_000;

/// All known profile keys, detection order first, then `generic`.
pub fn keys() -> Vec<&'static str> {
    let mut all = DETECTION_ORDER.to_vec();
    all.push("generic");
    all
}

/// Build the profile for a key.
pub fn build(key: &str) -> Result<BankProfile> {
    match key {
        "generic" => banks::generic::profile(),
        "chase" => banks::chase::profile(),
        "bofa" => banks::bofa::profile(),
        "bofa_relationship" => banks::bofa_relationship::profile(),
        "citi" => banks::citi::profile(),
        "wf" => banks::wf::profile(),
        "truist" => banks::truist::profile(),
        "mercury" => banks::mercury::profile(),
        "valley" => banks::valley::profile(),
        "ifb" => banks::ifb::profile(),
        "pnb" => banks::pnb::profile(),
        other => bail!("unknown bank profile: {other}"),
    }
}

/// Identify the issuing bank from document text. Unrecognized documents map
/// to `generic` rather than an error.
pub fn detect(text: &str) -> Result<&'static str> {
    let cap = text
        .char_indices()
        .nth(DETECT_SCAN_LIMIT)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cap];
    for key in DETECTION_ORDER {
        let profile = build(key)?;
        if profile.detect.iter().any(|re| re.is_match(head)) {
            return Ok(key);
        }
    }
    Ok("generic")
}

/// Convenience entry point: build the keyed profile and run the engine.
pub fn extract_transactions(key: &str, pages: &[ExtractedPage]) -> Result<Vec<Transaction>> {
    let profile = build(key)?;
    bankparse_core::run(&profile, pages)
}
