//! An in-memory election: voter registration, vote casting and results,
//! plus a few standalone helpers for validating voters and counting votes.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::Config;
pub use model::{
    candidate::{Candidate, ResultEntry},
    election::{Election, VoteReceipt},
    region::{count_votes_in_regions, Region},
    tally::{tally_pure, Tally},
    validator::{create_vote_validator, Rules, Validation},
    voter::Voter,
};
