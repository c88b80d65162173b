//! One module per supported institution, each exporting `profile()`.

pub mod bofa;
pub mod bofa_relationship;
pub mod chase;
pub mod citi;
pub mod generic;
pub mod ifb;
pub mod mercury;
pub mod pnb;
pub mod truist;
pub mod valley;
pub mod wf;
