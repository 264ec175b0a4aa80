//! Statistics pass over generated and hand-built graphs.

use pretty_assertions::assert_eq;

use social_graph::{
    BuildConfig, GraphBuilder, Person, PersonId, RandomPersonFactory, SocialGraph,
    StatisticsEngine, StatsReport,
};

fn generated(population: usize, seed: u64) -> SocialGraph {
    let config = BuildConfig { population, seed: Some(seed), ..BuildConfig::default() };
    GraphBuilder::new(config, RandomPersonFactory::new(seed)).build().unwrap()
}

#[test]
fn test_total_connections_is_sum_of_degrees() {
    let graph = generated(60, 31);
    let stats = StatisticsEngine::recompute(&graph);
    let degrees: usize = graph.people().map(|p| p.friend_count()).sum();
    assert_eq!(stats.total_connections, degrees);
}

#[test]
fn test_recompute_twice_is_identical() {
    let graph = generated(40, 8);
    let first = graph.recompute_statistics();
    let second = graph.recompute_statistics();
    assert_eq!(first, second);
}

#[test]
fn test_counts_cover_population() {
    let graph = generated(35, 12);
    let stats = graph.recompute_statistics();

    let city_total: usize = stats.popular_cities.values().sum();
    assert_eq!(city_total, 35);

    let hobby_total: usize = stats.popular_hobbies.values().sum();
    let listed: usize = graph.people().map(|p| p.person().hobbies.len()).sum();
    assert_eq!(hobby_total, listed);

    let ages: f64 = graph.people().map(|p| f64::from(p.person().age)).sum();
    assert_eq!(stats.average_age, Some(ages / 35.0));
}

#[test]
fn test_empty_graph_average_is_undefined() {
    let graph = SocialGraph::empty();
    let stats = graph.recompute_statistics();
    assert_eq!(stats.average_age, None);
    assert_eq!(stats.total_connections, 0);

    let report = StatsReport { population: graph.len(), stats: &stats }.to_string();
    assert!(report.contains("Average age: n/a"));
}

#[test]
fn test_stats_are_stale_until_recomputed() {
    let people = vec![
        Person::new(PersonId(0), "A").with_age(20).with_city("Kazan"),
        Person::new(PersonId(1), "B").with_age(40).with_city("Omsk"),
    ];
    let graph = SocialGraph::from_people(people).unwrap();
    let before = graph.recompute_statistics();

    graph.person(PersonId(0)).unwrap().add_friend(graph.person(PersonId(1)).unwrap());
    assert_eq!(graph.statistics(), Some(before));

    assert_eq!(graph.recompute_statistics().total_connections, 1);
}

#[test]
fn test_report_ranks_cities() {
    let people = vec![
        Person::new(PersonId(0), "A").with_city("Omsk"),
        Person::new(PersonId(1), "B").with_city("Kazan"),
        Person::new(PersonId(2), "C").with_city("Kazan"),
    ];
    let graph = SocialGraph::from_people(people).unwrap();
    let stats = graph.recompute_statistics();
    let report = StatsReport { population: 3, stats: &stats }.to_string();

    let kazan = report.find("- Kazan: 2").unwrap();
    let omsk = report.find("- Omsk: 1").unwrap();
    assert!(kazan < omsk);
}
