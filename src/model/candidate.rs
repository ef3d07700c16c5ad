use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Candidate unique ID.
pub type CandidateId = String;

/// An electable entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// One candidate's line in the election results, built fresh on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl ResultEntry {
    pub(crate) fn new(candidate: &Candidate, votes: u64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes,
        }
    }
}

impl Display for ResultEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} vote{}",
            self.name,
            self.party,
            self.votes,
            if self.votes != 1 { "s" } else { "" }
        )
    }
}
