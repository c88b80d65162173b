//! bankparse-core: generic bank-statement transaction extraction engine.
//!
//! Takes already-extracted page text (lines, optionally positioned words and
//! table rows) and produces normalized transaction records. Every bank is a
//! [`BankProfile`] — data, not code — feeding the same pipeline:
//! normalize → segment → resolve amount → clean description → classify
//! direction → aggregate.

pub mod aggregate;
pub mod amount;
pub mod describe;
pub mod direction;
pub mod engine;
pub mod noise;
pub mod normalize;
pub mod observe;
pub mod profile;
pub mod segment;
pub mod tokens;
pub mod types;

pub use engine::{run, run_with};
pub use observe::{LogObserver, NoopObserver, ParseObserver};
pub use profile::{BankProfile, DateFormat, DirectionRule, SectionRule, TieBreak};
pub use types::{Direction, ExtractedPage, MoneyToken, RawLine, Section, Transaction, Word};
