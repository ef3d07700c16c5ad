use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};
use serde_json::Value;

use crate::{
    config::Config,
    error::VoteError,
    model::{
        candidate::{Candidate, CandidateId, ResultEntry},
        voter::{Voter, VoterId},
    },
};

use super::VoteReceipt;

/// A single election: the candidates standing, who may vote, who has voted,
/// and the running vote counts.
///
/// All state is private; it changes only through [`Election::register_voter`]
/// and [`Election::cast_vote`]. At all times:
/// - every voter who has voted is registered,
/// - the vote counts sum to the number of voters who have voted,
/// - there is exactly one vote count per candidate.
#[derive(Debug, Clone)]
pub struct Election {
    /// Candidates in the order they were supplied.
    candidates: Vec<Candidate>,
    /// Position of each candidate in `candidates`.
    positions: HashMap<CandidateId, usize>,
    /// Vote count for each candidate, parallel to `candidates`.
    votes: Vec<u64>,
    /// Voters who passed registration.
    registered: HashSet<VoterId>,
    /// Voters who have cast their vote.
    voted: HashSet<VoterId>,
    /// Registration age limit.
    min_voting_age: u32,
}

impl Election {
    /// Create an election with the default configuration.
    pub fn new(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self::with_config(candidates, &Config::default())
    }

    /// Create an election with the given configuration.
    ///
    /// A candidate whose ID repeats an earlier one replaces it, keeping the
    /// earlier position.
    pub fn with_config(candidates: impl IntoIterator<Item = Candidate>, config: &Config) -> Self {
        let mut list: Vec<Candidate> = Vec::new();
        let mut positions = HashMap::new();
        for candidate in candidates {
            match positions.get(&candidate.id) {
                Some(&i) => {
                    warn!("Duplicate candidate ID {}, replacing earlier entry", candidate.id);
                    list[i] = candidate;
                }
                None => {
                    positions.insert(candidate.id.clone(), list.len());
                    list.push(candidate);
                }
            }
        }
        info!("Created election with {} candidates", list.len());

        Self {
            votes: vec![0; list.len()],
            candidates: list,
            positions,
            registered: HashSet::new(),
            voted: HashSet::new(),
            min_voting_age: config.min_voting_age(),
        }
    }

    /// Register a voter as eligible to vote.
    ///
    /// Returns `false`, leaving the election untouched, if the voter's ID or
    /// name is empty, they are under age, or they are already registered.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        if !voter.is_well_formed() {
            warn!("Rejected malformed voter record");
            return false;
        }
        if voter.age < f64::from(self.min_voting_age) {
            warn!(
                "Rejected voter {}: age {} is below {}",
                voter.id, voter.age, self.min_voting_age
            );
            return false;
        }
        if self.registered.contains(&voter.id) {
            warn!("Rejected voter {}: already registered", voter.id);
            return false;
        }

        self.registered.insert(voter.id.clone());
        debug!("Registered voter {}", voter.id);
        true
    }

    /// Register a voter from a loosely-typed record. Records that are not
    /// objects, or lack a valid `id`, `name` or `age`, are rejected.
    pub fn register_voter_record(&mut self, record: &Value) -> bool {
        match Voter::from_record(record) {
            Some(voter) => self.register_voter(&voter),
            None => {
                warn!("Rejected malformed voter record");
                false
            }
        }
    }

    /// Cast a vote, reporting the outcome through `Result`.
    ///
    /// Checks run in order: the voter is registered, the voter has not voted,
    /// the candidate exists. The election only changes if all pass.
    pub fn try_cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, VoteError> {
        if !self.registered.contains(voter_id) {
            return Err(VoteError::NotRegistered);
        }
        if self.voted.contains(voter_id) {
            return Err(VoteError::AlreadyVoted);
        }
        let position = *self
            .positions
            .get(candidate_id)
            .ok_or(VoteError::InvalidCandidate)?;

        self.votes[position] += 1;
        self.voted.insert(voter_id.to_string());
        Ok(VoteReceipt::new(voter_id, candidate_id))
    }

    /// Cast a vote, handing the outcome to one of two handlers.
    ///
    /// `on_success` receives the receipt of an accepted vote, `on_error` the
    /// reason a vote was refused. Whatever the invoked handler returns is
    /// returned to the caller.
    pub fn cast_vote<R>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(VoteReceipt) -> R,
        on_error: impl FnOnce(VoteError) -> R,
    ) -> R {
        match self.try_cast_vote(voter_id, candidate_id) {
            Ok(receipt) => {
                debug!("Voter {voter_id} voted for {candidate_id}");
                on_success(receipt)
            }
            Err(err) => {
                warn!("Refused vote by {voter_id} for {candidate_id}: {err}");
                on_error(err)
            }
        }
    }

    /// Current results, most votes first. Candidates with equal votes keep
    /// their original order.
    pub fn results(&self) -> Vec<ResultEntry> {
        self.results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Current results, ordered by `compare`. The sort is stable.
    pub fn results_by<F>(&self, compare: F) -> Vec<ResultEntry>
    where
        F: FnMut(&ResultEntry, &ResultEntry) -> Ordering,
    {
        let mut results: Vec<ResultEntry> = self
            .candidates
            .iter()
            .zip(&self.votes)
            .map(|(candidate, &votes)| ResultEntry::new(candidate, votes))
            .collect();
        results.sort_by(compare);
        results
    }

    /// The candidate with the most votes, or [`None`] if nobody has voted.
    /// Ties go to whichever candidate was supplied first.
    pub fn winner(&self) -> Option<&Candidate> {
        if self.total_votes() == 0 {
            return None;
        }
        let mut best: Option<(&Candidate, u64)> = None;
        for (candidate, &votes) in self.candidates.iter().zip(&self.votes) {
            if best.map_or(true, |(_, max)| votes > max) {
                best = Some((candidate, votes));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Candidates in the order they were supplied.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Votes cast so far across all candidates.
    pub fn total_votes(&self) -> u64 {
        self.votes.iter().sum()
    }

    /// Votes for one candidate, or [`None`] for an unknown ID.
    pub fn votes_for(&self, candidate_id: &str) -> Option<u64> {
        self.positions.get(candidate_id).map(|&i| self.votes[i])
    }

    /// Whether the voter passed registration.
    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.registered.contains(voter_id)
    }

    /// Whether the voter has cast an accepted vote.
    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voted.contains(voter_id)
    }

    /// Number of registered voters.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of voters who have voted.
    pub fn voted_count(&self) -> usize {
        self.voted.len()
    }
}
