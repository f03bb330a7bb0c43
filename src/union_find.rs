use crate::cells::RoomCoordinate;
use crate::utils;
use crate::utils::FnvHashMap;

/// Disjoint sets of rooms, used to stop Kruskal's algorithm from carving cycles.
///
/// `find` compresses paths; `union` always hangs the first set's root under the second's,
/// there is no union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: FnvHashMap<RoomCoordinate, RoomCoordinate>,
}

impl UnionFind {
    /// Every room starts as its own singleton set.
    pub fn new<I>(rooms: I) -> UnionFind
        where I: ExactSizeIterator<Item = RoomCoordinate>
    {
        let mut parents = utils::fnv_hashmap(rooms.len());
        for room in rooms {
            parents.insert(room, room);
        }
        UnionFind { parents }
    }

    /// Representative of the set holding `room`.
    ///
    /// Panics if `room` was never registered.
    pub fn find(&mut self, room: RoomCoordinate) -> RoomCoordinate {
        let mut root = room;
        loop {
            let parent = self.parents[&root];
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = room;
        while current != root {
            let next = self.parents[&current];
            self.parents.insert(current, root);
            current = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already the same set.
    pub fn union(&mut self, a: RoomCoordinate, b: RoomCoordinate) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parents.insert(root_a, root_b);
        true
    }
}
