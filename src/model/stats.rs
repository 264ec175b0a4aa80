//! Aggregate network statistics.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One statistics pass over the whole graph.
///
/// `average_age` is `None` when the pass saw no people; it is written to
/// snapshots as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkStats {
    pub total_connections: usize,
    pub average_age: Option<f64>,
    pub popular_hobbies: HashMap<String, usize>,
    pub popular_cities: HashMap<String, usize>,
}

impl NetworkStats {
    /// Hobbies by descending count, ties broken by label.
    pub fn hobbies_ranked(&self) -> Vec<(&str, usize)> {
        ranked(&self.popular_hobbies)
    }

    /// Cities by descending count, ties broken by label.
    pub fn cities_ranked(&self) -> Vec<(&str, usize)> {
        ranked(&self.popular_cities)
    }
}

fn ranked(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
