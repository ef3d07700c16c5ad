use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Voter unique ID.
pub type VoterId = String;

/// A participant in the election. Only the ID is retained after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    pub id: VoterId,
    pub name: String,
    pub age: f64,
}

impl Voter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: impl Into<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
        }
    }

    /// Read a voter out of a loosely-typed record.
    ///
    /// Returns [`None`] unless the record is an object with non-empty string
    /// `id` and `name` fields and a numeric `age`.
    pub fn from_record(record: &Value) -> Option<Self> {
        let fields = record.as_object()?;
        let id = fields.get("id")?.as_str().filter(|s| !s.is_empty())?;
        let name = fields.get("name")?.as_str().filter(|s| !s.is_empty())?;
        let age = fields.get("age")?.as_f64()?;
        Some(Self::new(id, name, age))
    }

    /// Whether the structural fields are filled in.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Voter {
        pub fn example() -> Self {
            Self::new("V1", "Ada", 25)
        }

        pub fn underage_example() -> Self {
            Self::new("V2", "Tim", 17)
        }
    }
}
