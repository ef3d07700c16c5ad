use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::Config,
    error::Result,
    model::{
        candidate::{Candidate, ResultEntry},
        election::{Election, VoteReceipt},
        region::{count_votes_in_regions, Region},
    },
};

/// A replayable election: who stands, who tries to register, and which
/// ballots are cast, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub candidates: Vec<Candidate>,
    /// Voter records; these are loosely typed so malformed entries can be
    /// replayed and rejected.
    #[serde(default)]
    pub voters: Vec<Value>,
    #[serde(default)]
    pub ballots: Vec<VoteReceipt>,
    /// Optional regional breakdown to total up alongside the election.
    #[serde(default)]
    pub regions: Option<Region>,
}

/// A ballot that was refused, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedBallot {
    pub ballot: VoteReceipt,
    pub reason: String,
}

/// Everything that happened when a scenario was replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    /// Number of voters registered.
    pub registered: usize,
    /// Indices into `Scenario::voters` of the records that were refused.
    pub rejected_voters: Vec<usize>,
    pub accepted_ballots: usize,
    pub rejected_ballots: Vec<RejectedBallot>,
    pub results: Vec<ResultEntry>,
    pub winner: Option<Candidate>,
    /// Sum over the region tree, if one was given.
    pub region_votes: Option<u64>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(file)?)
    }

    /// Replay the scenario against a fresh election.
    pub fn run(&self, config: &Config) -> ScenarioReport {
        let mut election = Election::with_config(self.candidates.iter().cloned(), config);

        let rejected_voters = self
            .voters
            .iter()
            .enumerate()
            .filter(|(_, record)| !election.register_voter_record(record))
            .map(|(i, _)| i)
            .collect();

        let mut accepted_ballots = 0;
        let mut rejected_ballots = Vec::new();
        for ballot in &self.ballots {
            election.cast_vote(
                &ballot.voter_id,
                &ballot.candidate_id,
                |_| accepted_ballots += 1,
                |err| {
                    rejected_ballots.push(RejectedBallot {
                        ballot: ballot.clone(),
                        reason: err.to_string(),
                    })
                },
            );
        }
        info!(
            "Replayed scenario: {accepted_ballots} ballots accepted, {} rejected",
            rejected_ballots.len()
        );

        ScenarioReport {
            registered: election.registered_count(),
            rejected_voters,
            accepted_ballots,
            rejected_ballots,
            results: election.results(),
            winner: election.winner().cloned(),
            region_votes: self.regions.as_ref().map(|r| count_votes_in_regions(Some(r))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn example() -> Scenario {
        serde_json::from_value(json!({
            "candidates": [
                {"id": "C1", "name": "Chris Riches", "party": "Purple"},
                {"id": "C2", "name": "Parry Hotter", "party": "Orange"}
            ],
            "voters": [
                {"id": "V1", "name": "Ada", "age": 25},
                {"id": "V2", "name": "Bob", "age": 40},
                {"id": "V3", "name": "Tim", "age": 12},
                null,
                {"id": "V1", "name": "Ada again", "age": 25}
            ],
            "ballots": [
                {"voterId": "V2", "candidateId": "C2"},
                {"voterId": "V1", "candidateId": "C9"},
                {"voterId": "V1", "candidateId": "C2"},
                {"voterId": "V2", "candidateId": "C1"},
                {"voterId": "V3", "candidateId": "C1"}
            ],
            "regions": {"name": "X", "votes": 5, "subRegions": [{"name": "Y", "votes": 3}]}
        }))
        .unwrap()
    }

    #[test]
    fn replay() {
        let report = example().run(&Config::default());

        assert_eq!(report.registered, 2);
        assert_eq!(report.rejected_voters, vec![2, 3, 4]);
        assert_eq!(report.accepted_ballots, 2);

        let reasons: Vec<_> = report
            .rejected_ballots
            .iter()
            .map(|r| r.reason.as_str())
            .collect();
        assert_eq!(
            reasons,
            vec!["Invalid candidate", "Voter already voted", "Voter not registered"]
        );

        let votes: Vec<_> = report
            .results
            .iter()
            .map(|r| (r.id.as_str(), r.votes))
            .collect();
        assert_eq!(votes, vec![("C2", 2), ("C1", 0)]);
        assert_eq!(report.winner.map(|c| c.id), Some("C2".to_string()));
        assert_eq!(report.region_votes, Some(8));
    }

    #[test]
    fn replay_with_config() {
        let config = Config::default().with_min_voting_age(10);
        let report = example().run(&config);
        assert_eq!(report.registered, 3);
        assert_eq!(report.accepted_ballots, 3);
    }

    #[test]
    fn malformed_regions_still_total() {
        let scenario: Scenario = serde_json::from_value(json!({
            "candidates": [],
            "regions": {"name": "X", "votes": null, "subRegions": [{"name": "Y", "votes": 3}]}
        }))
        .unwrap();
        assert_eq!(scenario.run(&Config::default()).region_votes, Some(3));
    }

    #[test]
    fn minimal() {
        let scenario: Scenario = serde_json::from_value(json!({"candidates": []})).unwrap();
        let report = scenario.run(&Config::default());
        assert_eq!(report.registered, 0);
        assert!(report.results.is_empty());
        assert_eq!(report.winner, None);
        assert_eq!(report.region_votes, None);
    }
}
