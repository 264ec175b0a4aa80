//! Friend table: the outbound friend lists, one lock per person.
//!
//! The locks live here, outside the `Person` data, so the attribute arena
//! stays plain data and never has to skip a lock when serialized.
//!
//! ## Locking
//!
//! - Mutation of a list takes that list's write lock and nothing else.
//! - Reads (statistics, profiles, snapshots) take the read lock of one list
//!   at a time and release it before touching the next.
//!
//! Because no operation ever holds two list locks at once, two people adding
//! each other concurrently cannot deadlock.

use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::model::PersonId;

/// Most people end up with a handful of friends; keep those inline.
type FriendList = SmallVec<[PersonId; 8]>;

#[derive(Debug, Default)]
pub(crate) struct FriendTable {
    slots: Vec<RwLock<FriendList>>,
}

impl FriendTable {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| RwLock::new(FriendList::new())).collect(),
        }
    }

    /// Append `friend` to `owner`'s list unless an entry with that id exists.
    /// Returns `true` if the list changed.
    pub(crate) fn insert(&self, owner: PersonId, friend: PersonId) -> bool {
        let mut list = self.slots[owner.index()].write();
        if list.contains(&friend) {
            return false;
        }
        list.push(friend);
        true
    }

    /// Remove the first entry equal to `friend`, keeping the order of the rest.
    /// Returns `true` if an entry was removed.
    pub(crate) fn remove(&self, owner: PersonId, friend: PersonId) -> bool {
        let mut list = self.slots[owner.index()].write();
        match list.iter().position(|f| *f == friend) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn snapshot(&self, owner: PersonId) -> Vec<PersonId> {
        self.slots[owner.index()].read().to_vec()
    }

    pub(crate) fn count(&self, owner: PersonId) -> usize {
        self.slots[owner.index()].read().len()
    }

    pub(crate) fn contains(&self, owner: PersonId, friend: PersonId) -> bool {
        self.slots[owner.index()].read().contains(&friend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let table = FriendTable::with_len(3);
        assert!(table.insert(PersonId(0), PersonId(1)));
        assert!(!table.insert(PersonId(0), PersonId(1)));
        assert_eq!(table.snapshot(PersonId(0)), vec![PersonId(1)]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let table = FriendTable::with_len(5);
        for f in [1, 2, 3, 4] {
            table.insert(PersonId(0), PersonId(f));
        }
        assert!(table.remove(PersonId(0), PersonId(2)));
        assert_eq!(
            table.snapshot(PersonId(0)),
            vec![PersonId(1), PersonId(3), PersonId(4)]
        );
        assert!(!table.remove(PersonId(0), PersonId(2)));
        assert_eq!(table.count(PersonId(0)), 3);
    }

    #[test]
    fn test_lists_are_independent() {
        let table = FriendTable::with_len(2);
        table.insert(PersonId(0), PersonId(1));
        assert!(table.contains(PersonId(0), PersonId(1)));
        assert!(!table.contains(PersonId(1), PersonId(0)));
        assert_eq!(table.count(PersonId(1)), 0);
    }
}
