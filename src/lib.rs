//! # social-graph — Concurrent In-Memory Social Network
//!
//! Builds a population of people with random profiles, wires a directed
//! friendship relation between them in parallel, aggregates statistics over
//! the result, and round-trips the whole graph through a JSON snapshot.
//!
//! ## Design Principles
//!
//! 1. **Arena, not pointers**: people live in one `Vec` indexed by `PersonId`;
//!    friendship is a list of ids, so cycles are free and serialization is flat.
//! 2. **Locks beside the data**: each friend list has its own `RwLock` in a
//!    table owned by the graph; `Person` stays plain data.
//! 3. **Two lock sizes, one order**: graph lock (statistics) before any
//!    per-person lock, never two per-person locks at once.
//! 4. **Thread-confined randomness**: every generation task seeds its own RNG.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use social_graph::{BuildConfig, GraphBuilder, RandomPersonFactory, SnapshotCodec};
//!
//! # fn example() -> social_graph::Result<()> {
//! let config = BuildConfig { population: 50, seed: Some(7), ..BuildConfig::default() };
//! let graph = GraphBuilder::new(config, RandomPersonFactory::new(7)).build()?;
//!
//! let stats = graph.recompute_statistics();
//! println!("{} connections", stats.total_connections);
//!
//! SnapshotCodec::save_to_file(&graph, "social_network.json")?;
//! let restored = SnapshotCodec::load_from_file("social_network.json")?;
//! assert_eq!(restored.len(), 50);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod factory;
pub mod builder;
pub mod stats;
pub mod snapshot;
pub mod render;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Person, PersonId, Pet, Education, SocialMedia, NetworkStats,
};
pub use graph::{SocialGraph, PersonRef, Profile};
pub use factory::{PersonFactory, RandomPersonFactory};
pub use builder::{BuildConfig, GraphBuilder, EdgeReport, offer_friends};
pub use stats::StatisticsEngine;
pub use snapshot::SnapshotCodec;
pub use render::{FriendsView, StatsReport};
pub use config::NetworkConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Person at index {index} has id {id}")]
    IdMismatch { index: usize, id: PersonId },

    #[error("Person {person} lists unknown friend {friend}")]
    UnknownFriend { person: PersonId, friend: PersonId },

    #[error("Person {person} lists friend {friend} more than once")]
    DuplicateFriend { person: PersonId, friend: PersonId },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
