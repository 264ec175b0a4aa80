//! # Social Graph
//!
//! The person arena plus the two lock granularities that guard it:
//!
//! | Lock | Scope | Taken by |
//! |------|-------|----------|
//! | per-person `RwLock` | one friend list | `add_friend` / `remove_friend` (write), readers (read) |
//! | graph `RwLock` | the statistics cache | `StatisticsEngine::recompute` (write), `statistics()` (read) |
//!
//! The `people` arena itself is fixed once the graph exists and is read
//! without locking. Lock order is always graph lock first, then one person
//! lock at a time; friend mutations never touch the graph lock.

mod friends;

use parking_lot::RwLock;

use crate::model::{NetworkStats, Person, PersonId};
use crate::{Error, Result};
use friends::FriendTable;

// ============================================================================
// SocialGraph
// ============================================================================

/// People, their friend lists, and the cached statistics of the last pass.
#[derive(Debug, Default)]
pub struct SocialGraph {
    people: Vec<Person>,
    friends: FriendTable,
    statistics: RwLock<Option<NetworkStats>>,
}

impl SocialGraph {
    /// A graph with no people.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an ordered population. Every person's id must equal its index.
    pub fn from_people(people: Vec<Person>) -> Result<Self> {
        if let Some((index, person)) = people
            .iter()
            .enumerate()
            .find(|(index, person)| person.id.index() != *index)
        {
            return Err(Error::IdMismatch { index, id: person.id });
        }
        let friends = FriendTable::with_len(people.len());
        Ok(Self {
            people,
            friends,
            statistics: RwLock::new(None),
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Handle to one person, or `None` if the id is outside the population.
    pub fn person(&self, id: PersonId) -> Option<PersonRef<'_>> {
        (id.index() < self.people.len()).then_some(PersonRef { graph: self, id })
    }

    /// All people in build order.
    pub fn people(&self) -> impl ExactSizeIterator<Item = PersonRef<'_>> + '_ {
        (0..self.people.len()).map(move |i| PersonRef { graph: self, id: PersonId::from(i) })
    }

    /// Friend ids of `id` at this instant, or `None` if `id` is unknown.
    pub fn friend_ids(&self, id: PersonId) -> Option<Vec<PersonId>> {
        self.person(id).map(|p| p.friend_ids())
    }

    /// Read-only profile of every person, in build order.
    pub fn profiles(&self) -> Vec<Profile> {
        self.people().map(|p| p.profile()).collect()
    }

    /// The snapshot installed by the most recent statistics pass.
    ///
    /// `None` until the first pass. Between passes the value may be stale.
    pub fn statistics(&self) -> Option<NetworkStats> {
        self.statistics.read().clone()
    }

    /// Run a statistics pass and install its result.
    pub fn recompute_statistics(&self) -> NetworkStats {
        crate::stats::StatisticsEngine::recompute(self)
    }

    pub(crate) fn attributes(&self) -> &[Person] {
        &self.people
    }

    pub(crate) fn statistics_lock(&self) -> &RwLock<Option<NetworkStats>> {
        &self.statistics
    }

    pub(crate) fn friend_count(&self, id: PersonId) -> usize {
        self.friends.count(id)
    }
}

// ============================================================================
// PersonRef
// ============================================================================

/// A person inside a particular graph.
///
/// Holding a `PersonRef` proves the id is in range, which is what keeps
/// `add_friend` and `remove_friend` total.
#[derive(Debug, Clone, Copy)]
pub struct PersonRef<'g> {
    graph: &'g SocialGraph,
    id: PersonId,
}

impl<'g> PersonRef<'g> {
    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn person(&self) -> &'g Person {
        &self.graph.people[self.id.index()]
    }

    /// Add `other` to this person's friend list unless already present.
    ///
    /// Locks only this person's list. Self references are not filtered here;
    /// the builder skips them. A handle from another graph is ignored.
    /// Returns `true` if the list changed.
    pub fn add_friend(&self, other: PersonRef<'_>) -> bool {
        if !std::ptr::eq(self.graph, other.graph) {
            tracing::debug!(person = %self.id, friend = %other.id, "friend from another graph ignored");
            return false;
        }
        let added = self.graph.friends.insert(self.id, other.id);
        if added {
            tracing::trace!(person = %self.id, friend = %other.id, "friend added");
        }
        added
    }

    /// Remove the first friend entry with `id`. No-op if absent.
    pub fn remove_friend(&self, id: PersonId) -> bool {
        let removed = self.graph.friends.remove(self.id, id);
        if removed {
            tracing::trace!(person = %self.id, friend = %id, "friend removed");
        }
        removed
    }

    pub fn is_friend(&self, id: PersonId) -> bool {
        self.graph.friends.contains(self.id, id)
    }

    pub fn friend_ids(&self) -> Vec<PersonId> {
        self.graph.friends.snapshot(self.id)
    }

    pub fn friend_count(&self) -> usize {
        self.graph.friend_count(self.id)
    }

    /// Friends resolved back to handles in the same graph.
    pub fn friends(&self) -> Vec<PersonRef<'g>> {
        self.friend_ids()
            .into_iter()
            .filter_map(|id| self.graph.person(id))
            .collect()
    }

    pub fn profile(&self) -> Profile {
        Profile {
            person: self.person().clone(),
            friends: self.friend_ids(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Detached view of one person: attributes plus friend ids at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub person: Person,
    pub friends: Vec<PersonId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(n: usize) -> SocialGraph {
        let people = (0..n)
            .map(|i| Person::new(PersonId::from(i), format!("P{i}")))
            .collect();
        SocialGraph::from_people(people).unwrap()
    }

    #[test]
    fn test_from_people_rejects_misplaced_id() {
        let people = vec![Person::new(PersonId(0), "A"), Person::new(PersonId(5), "B")];
        let err = SocialGraph::from_people(people).unwrap_err();
        assert!(matches!(err, Error::IdMismatch { index: 1, id: PersonId(5) }));
    }

    #[test]
    fn test_person_lookup_bounds() {
        let graph = graph_of(2);
        assert!(graph.person(PersonId(1)).is_some());
        assert!(graph.person(PersonId(2)).is_none());
        assert_eq!(graph.people().len(), 2);
    }

    #[test]
    fn test_add_friend_twice_keeps_one_entry() {
        let graph = graph_of(3);
        let a = graph.person(PersonId(0)).unwrap();
        let b = graph.person(PersonId(1)).unwrap();

        assert!(a.add_friend(b));
        assert!(!a.add_friend(b));
        assert_eq!(a.friend_ids(), vec![PersonId(1)]);
        // Friendship is directed.
        assert!(!b.is_friend(PersonId(0)));
    }

    #[test]
    fn test_remove_missing_friend_is_noop() {
        let graph = graph_of(3);
        let a = graph.person(PersonId(0)).unwrap();
        a.add_friend(graph.person(PersonId(2)).unwrap());

        assert!(!a.remove_friend(PersonId(1)));
        assert_eq!(a.friend_ids(), vec![PersonId(2)]);
    }

    #[test]
    fn test_friends_resolve_to_people() {
        let graph = graph_of(3);
        let a = graph.person(PersonId(0)).unwrap();
        a.add_friend(graph.person(PersonId(2)).unwrap());

        let names: Vec<&str> = a.friends().iter().map(|f| f.person().name.as_str()).collect();
        assert_eq!(names, vec!["P2"]);
        assert_eq!(a.profile().friends, vec![PersonId(2)]);
    }

    #[test]
    fn test_add_friend_from_other_graph_is_ignored() {
        let small = graph_of(2);
        let big = graph_of(10);
        let a = small.person(PersonId(0)).unwrap();

        assert!(!a.add_friend(big.person(PersonId(9)).unwrap()));
        assert!(!a.add_friend(big.person(PersonId(1)).unwrap()));
        assert!(a.friend_ids().is_empty());

        let bytes = crate::SnapshotCodec::to_vec(&small).unwrap();
        assert_eq!(crate::SnapshotCodec::from_slice(&bytes).unwrap().len(), 2);
    }

    #[test]
    fn test_statistics_absent_before_first_pass() {
        let graph = graph_of(1);
        assert!(graph.statistics().is_none());
    }
}
