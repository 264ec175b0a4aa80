//! Statistics pass over a whole graph.

use hashbrown::HashMap;

use crate::graph::SocialGraph;
use crate::model::NetworkStats;

/// Aggregates ages, connection counts, hobbies and cities.
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Scan every person once and install the result as the graph's cached
    /// statistics.
    ///
    /// The graph lock is held in write mode for the whole scan, so readers
    /// of `statistics()` see either the previous pass or this one, never a
    /// mix. Friend lists are read one at a time under their own read lock.
    /// Edge construction must not run concurrently with a pass.
    pub fn recompute(graph: &SocialGraph) -> NetworkStats {
        let mut slot = graph.statistics_lock().write();
        let stats = Self::aggregate(graph);
        tracing::debug!(
            people = graph.len(),
            connections = stats.total_connections,
            "statistics recomputed"
        );
        *slot = Some(stats.clone());
        stats
    }

    fn aggregate(graph: &SocialGraph) -> NetworkStats {
        let mut total_age: u64 = 0;
        let mut connections = 0usize;
        let mut hobbies: HashMap<String, usize> = HashMap::new();
        let mut cities: HashMap<String, usize> = HashMap::new();

        for person in graph.attributes() {
            total_age += u64::from(person.age);
            connections += graph.friend_count(person.id);
            for hobby in &person.hobbies {
                *hobbies.entry_ref(hobby.as_str()).or_insert(0) += 1;
            }
            *cities.entry_ref(person.city.as_str()).or_insert(0) += 1;
        }

        let average_age = match graph.len() {
            0 => None,
            n => Some(total_age as f64 / n as f64),
        };

        NetworkStats {
            total_connections: connections,
            average_age,
            popular_hobbies: hobbies,
            popular_cities: cities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, PersonId};

    fn sample() -> SocialGraph {
        let people = vec![
            Person::new(PersonId(0), "A").with_age(20).with_city("Kazan").with_hobbies(["Yoga", "Music"]),
            Person::new(PersonId(1), "B").with_age(30).with_city("Kazan").with_hobbies(["Yoga"]),
            Person::new(PersonId(2), "C").with_age(40).with_city("Omsk"),
        ];
        SocialGraph::from_people(people).unwrap()
    }

    #[test]
    fn test_aggregates() {
        let graph = sample();
        let a = graph.person(PersonId(0)).unwrap();
        a.add_friend(graph.person(PersonId(1)).unwrap());
        a.add_friend(graph.person(PersonId(2)).unwrap());
        graph.person(PersonId(2)).unwrap().add_friend(a);

        let stats = StatisticsEngine::recompute(&graph);
        assert_eq!(stats.total_connections, 3);
        assert_eq!(stats.average_age, Some(30.0));
        assert_eq!(stats.popular_hobbies.get("Yoga"), Some(&2));
        assert_eq!(stats.popular_hobbies.get("Music"), Some(&1));
        assert_eq!(stats.popular_cities.get("Kazan"), Some(&2));
        assert_eq!(stats.popular_cities.get("Omsk"), Some(&1));
        assert_eq!(graph.statistics(), Some(stats));
    }

    #[test]
    fn test_empty_graph_has_undefined_average() {
        let graph = SocialGraph::empty();
        let stats = StatisticsEngine::recompute(&graph);
        assert_eq!(stats.average_age, None);
        assert_eq!(stats.total_connections, 0);
        assert!(stats.popular_cities.is_empty());
    }

    #[test]
    fn test_recompute_replaces_previous_pass() {
        let graph = sample();
        let first = StatisticsEngine::recompute(&graph);
        assert_eq!(first.total_connections, 0);

        graph.person(PersonId(1)).unwrap().add_friend(graph.person(PersonId(2)).unwrap());
        let second = StatisticsEngine::recompute(&graph);
        assert_eq!(second.total_connections, 1);
        assert_eq!(graph.statistics().unwrap().total_connections, 1);
    }
}
