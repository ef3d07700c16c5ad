use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A region's own votes plus its nested sub-regions.
///
/// Loading is lenient: a `votes` that is absent, null, false or not a whole
/// non-negative number counts as 0, a `subRegions` that is not an array
/// means no children, and array entries that are not objects are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_votes")]
    pub votes: u64,
    #[serde(default, deserialize_with = "lenient_sub_regions")]
    pub sub_regions: Vec<Region>,
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        _ => String::new(),
    })
}

fn lenient_votes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64().unwrap_or(0))
}

fn lenient_sub_regions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Region>, D::Error> {
    let children = match Value::deserialize(deserializer)? {
        Value::Array(children) => children,
        _ => return Ok(Vec::new()),
    };
    children
        .into_iter()
        .filter(Value::is_object)
        .map(|child| serde_json::from_value(child).map_err(D::Error::custom))
        .collect()
}

impl Region {
    pub fn new(name: impl Into<String>, votes: u64, sub_regions: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions,
        }
    }

    /// Total votes in this region and everything beneath it.
    pub fn total_votes(&self) -> u64 {
        self.votes
            + self
                .sub_regions
                .iter()
                .map(Region::total_votes)
                .sum::<u64>()
    }
}

/// Sum the votes in a region tree. An absent tree counts as zero.
pub fn count_votes_in_regions(region: Option<&Region>) -> u64 {
    region.map_or(0, Region::total_votes)
}
