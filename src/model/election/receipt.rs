use serde::{Deserialize, Serialize};

use crate::model::{candidate::CandidateId, voter::VoterId};

/// Proof of an accepted vote, handed to the success handler of
/// [`Election::cast_vote`](super::Election::cast_vote).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

impl VoteReceipt {
    pub fn new(voter_id: impl Into<String>, candidate_id: impl Into<String>) -> Self {
        Self {
            voter_id: voter_id.into(),
            candidate_id: candidate_id.into(),
        }
    }
}
