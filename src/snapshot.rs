//! JSON snapshot of a social graph.
//!
//! ```text
//! { "People": [ { "ID": 0, "Name": ..., "Friends": [3, 7] }, ... ],
//!   "Statistics": { "TotalConnections": .., "AverageAge": .. | null, ... } }
//! ```
//!
//! Friends are written as ids, never as nested people, so cycles in the
//! friend relation cost nothing. Locks are not part of the document; a
//! loaded graph gets fresh ones.
//!
//! Loading is all-or-nothing: the whole document is decoded and checked
//! before a graph is assembled.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::graph::SocialGraph;
use crate::model::{NetworkStats, Person, PersonId};
use crate::{Error, Result};

#[derive(Debug, Serialize, Deserialize)]
struct NetworkDocument {
    #[serde(rename = "People")]
    people: Vec<PersonRecord>,
    #[serde(rename = "Statistics", default)]
    statistics: NetworkStats,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersonRecord {
    #[serde(flatten)]
    person: Person,
    #[serde(rename = "Friends", default)]
    friends: Vec<PersonId>,
}

/// Saves and loads `SocialGraph` snapshots.
pub struct SnapshotCodec;

impl SnapshotCodec {
    /// Write `graph` as pretty-printed JSON.
    ///
    /// The cached statistics are written as they are; a graph that never
    /// ran a pass writes an empty block with a `null` average age.
    pub fn save<W: Write>(graph: &SocialGraph, mut writer: W) -> Result<()> {
        let document = NetworkDocument {
            people: graph
                .people()
                .map(|p| PersonRecord {
                    person: p.person().clone(),
                    friends: p.friend_ids(),
                })
                .collect(),
            statistics: graph.statistics().unwrap_or_default(),
        };
        // Encode fully first so a failing writer surfaces as `Error::Io`.
        let bytes = serde_json::to_vec_pretty(&document)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Read a snapshot written by `save`.
    pub fn load<R: Read>(mut reader: R) -> Result<SocialGraph> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes)
    }

    pub fn to_vec(graph: &SocialGraph) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Self::save(graph, &mut bytes)?;
        Ok(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<SocialGraph> {
        let document: NetworkDocument = serde_json::from_slice(bytes)?;
        Self::assemble(document)
    }

    /// Write to a temporary file beside `path`, then rename it over `path`.
    /// An existing snapshot survives a failed save.
    pub fn save_to_file(graph: &SocialGraph, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            Self::save(graph, &mut writer)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        tracing::info!(path = %path.display(), people = graph.len(), "snapshot saved");
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SocialGraph> {
        let path = path.as_ref();
        let graph = Self::load(BufReader::new(File::open(path)?))?;
        tracing::info!(path = %path.display(), people = graph.len(), "snapshot loaded");
        Ok(graph)
    }

    fn assemble(document: NetworkDocument) -> Result<SocialGraph> {
        let NetworkDocument { people, statistics } = document;
        let population = people.len();

        let mut persons = Vec::with_capacity(population);
        let mut friend_lists = Vec::with_capacity(population);
        for record in people {
            let owner = record.person.id;
            let mut seen = HashSet::with_capacity(record.friends.len());
            for &friend in &record.friends {
                if friend.index() >= population {
                    return Err(Error::UnknownFriend { person: owner, friend });
                }
                if !seen.insert(friend) {
                    return Err(Error::DuplicateFriend { person: owner, friend });
                }
            }
            persons.push(record.person);
            friend_lists.push(record.friends);
        }

        let graph = SocialGraph::from_people(persons)?;
        for (owner, friends) in graph.people().zip(friend_lists) {
            for friend in friends.into_iter().filter_map(|id| graph.person(id)) {
                owner.add_friend(friend);
            }
        }
        *graph.statistics_lock().write() = Some(statistics);
        Ok(graph)
    }
}
