mod election_core;
mod receipt;

pub use election_core::Election;
pub use receipt::VoteReceipt;
