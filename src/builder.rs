//! # Graph construction
//!
//! One-shot, two-phase protocol:
//!
//! ```text
//! Phase 1  ids 0..N  ──par──▶ PersonFactory::create ──collect──▶ people[]   (barrier)
//! Phase 2  ids 0..N  ──par──▶ k draws in [min, max] ──add_friend──▶ friend table
//! ```
//!
//! Phase 1 tasks write disjoint slots of an indexed collect, so the arena is
//! never shared until every task has joined. Phase 2 runs one task per
//! source person; each task only locks its own source's friend list.
//! A draw that lands on the source itself is dropped, not retried.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::factory::{derive_seed, PersonFactory};
use crate::graph::{PersonRef, SocialGraph};
use crate::model::{Person, PersonId};
use crate::{Error, Result};

const EDGE_STREAM: u64 = 0x4544_4745_5354_524d;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Number of people to generate.
    pub population: usize,
    /// Friend draws per person, inclusive.
    pub friends: RangeInclusive<usize>,
    /// Base seed for edge draws. `None` picks one at random per build.
    pub seed: Option<u64>,
    /// Dedicated worker pool size. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            population: 20,
            friends: 2..=6,
            seed: None,
            threads: None,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<()> {
        if self.friends.start() > self.friends.end() {
            return Err(Error::InvalidConfig(format!(
                "friend range {}..={} is empty",
                self.friends.start(),
                self.friends.end()
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::InvalidConfig("threads must be at least 1".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(Error::InvalidConfig(format!(
                "population {} exceeds the id space",
                self.population
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Edge report
// ============================================================================

/// Outcome counts of an edge phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeReport {
    /// Draws made, including skipped ones.
    pub attempted: usize,
    /// Draws that inserted a new friend.
    pub added: usize,
    /// Draws that selected the source itself.
    pub self_skipped: usize,
    /// Draws that selected an existing friend.
    pub duplicates: usize,
}

impl EdgeReport {
    fn merge(self, other: Self) -> Self {
        Self {
            attempted: self.attempted + other.attempted,
            added: self.added + other.added,
            self_skipped: self.self_skipped + other.self_skipped,
            duplicates: self.duplicates + other.duplicates,
        }
    }
}

/// Offer `candidates` to `source` as friends, skipping the source itself.
///
/// This is the per-person step of phase 2; it is public so a caller can
/// drive edge construction with an explicit candidate sequence.
pub fn offer_friends<'g>(
    source: PersonRef<'g>,
    candidates: impl IntoIterator<Item = PersonRef<'g>>,
) -> EdgeReport {
    let mut report = EdgeReport::default();
    for candidate in candidates {
        report.attempted += 1;
        if candidate.id() == source.id() {
            report.self_skipped += 1;
        } else if source.add_friend(candidate) {
            report.added += 1;
        } else {
            report.duplicates += 1;
        }
    }
    report
}

// ============================================================================
// GraphBuilder
// ============================================================================

/// Builds a `SocialGraph` from a factory and a `BuildConfig`.
pub struct GraphBuilder<F> {
    config: BuildConfig,
    factory: F,
}

impl<F: PersonFactory> GraphBuilder<F> {
    pub fn new(config: BuildConfig, factory: F) -> Self {
        Self { config, factory }
    }

    /// Run both phases and return the populated graph.
    ///
    /// Statistics are not computed; call `recompute_statistics` afterwards.
    pub fn build(&self) -> Result<SocialGraph> {
        self.config.validate()?;
        let seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            population = self.config.population,
            seed,
            threads = ?self.config.threads,
            "building social graph"
        );

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("social-graph-{i}"))
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                pool.install(|| self.run(seed))
            }
            None => self.run(seed),
        }
    }

    fn run(&self, seed: u64) -> Result<SocialGraph> {
        let people = self.generate_people();
        let graph = SocialGraph::from_people(people)?;
        let report = self.connect(&graph, seed);
        tracing::info!(
            people = graph.len(),
            edges = report.added,
            "social graph built"
        );
        Ok(graph)
    }

    /// Phase 1. Returns only after every factory call has finished.
    fn generate_people(&self) -> Vec<Person> {
        let people: Vec<Person> = (0..self.config.population)
            .into_par_iter()
            .map(|i| self.factory.create(PersonId::from(i)))
            .collect();
        tracing::debug!(people = people.len(), "phase 1 joined");
        people
    }

    /// Phase 2. One task per source person.
    fn connect(&self, graph: &SocialGraph, seed: u64) -> EdgeReport {
        let n = graph.len();
        if n == 0 {
            return EdgeReport::default();
        }
        let range = self.config.friends.clone();

        let report = (0..n)
            .into_par_iter()
            .map(|i| {
                let source_id = PersonId::from(i);
                let mut rng = StdRng::seed_from_u64(derive_seed(seed, source_id, EDGE_STREAM));
                let k = rng.gen_range(range.clone());
                let candidates: Vec<PersonRef<'_>> = (0..k)
                    .filter_map(|_| graph.person(PersonId::from(rng.gen_range(0..n))))
                    .collect();
                match graph.person(source_id) {
                    Some(source) => offer_friends(source, candidates),
                    None => EdgeReport::default(),
                }
            })
            .reduce(EdgeReport::default, EdgeReport::merge);

        tracing::debug!(
            attempted = report.attempted,
            added = report.added,
            self_skipped = report.self_skipped,
            duplicates = report.duplicates,
            "phase 2 joined"
        );
        report
    }
}
