//! # Social Graph Model
//!
//! Plain DTOs shared by the builder, the statistics pass, the snapshot codec
//! and the renderers.
//!
//! Design rule: NO locks, NO references between people here. Friendship is
//! kept by id in the graph's friend table. This module is pure data.

pub mod person;
pub mod stats;

pub use person::{Person, PersonId, Pet, Education, SocialMedia};
pub use stats::NetworkStats;
