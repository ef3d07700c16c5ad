use std::collections::HashMap;

use crate::model::candidate::CandidateId;

/// Vote counts by candidate.
pub type Tally = HashMap<CandidateId, u64>;

/// Return a copy of `tally` with one more vote for `candidate_id`.
/// The input is left as it was.
pub fn tally_pure(tally: &Tally, candidate_id: &str) -> Tally {
    let mut next = tally.clone();
    *next.entry(candidate_id.to_string()).or_insert(0) += 1;
    next
}
