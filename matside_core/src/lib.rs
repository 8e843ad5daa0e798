#![forbid(unsafe_code)]

//! Core domain model and matching logic for matside.
//!
//! This crate provides:
//! - Domain types (athletes, skill tiers, matches)
//! - The pairing safety rule
//! - The two-round greedy matcher
//! - Roster loading and report writing
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod safety;
pub mod pool;
pub mod matcher;
pub mod roster;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use safety::{IdentityMode, SafetyRule};
pub use pool::Pool;
pub use matcher::{first_round, pair_roster, second_round, Pairings, RoundOutcome};
pub use roster::{load_roster, read_roster};
pub use report::{render_report, save_report, write_report};
