//! Generational slot arena
//!
//! Slots are addressed by [`NodeId`], a slot index paired with the slot's
//! generation. Freeing a slot bumps its generation, so every id issued before
//! the free stops resolving. Freed slots are reused most-recently-freed first.

use std::fmt;

/// Handle to a slot in an [`Arena`]
///
/// Only valid while the slot is alive and its generation matches. Ids are
/// plain data: they can be copied, compared and hashed freely, and checked
/// with [`Arena::contains`] at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub index: u32,
    pub generation: u32,
}

impl NodeId {
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// Indices of dead slots, most recently freed last
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a value, reusing the most recently freed slot if there is one
    ///
    /// A reused slot keeps the generation it was given when it was freed.
    pub fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none(), "free list points at a live slot");
            slot.value = Some(value);
            return NodeId::new(index, slot.generation);
        }

        let index = u32::try_from(self.slots.len()).expect("arena exceeded u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        NodeId::new(index, 0)
    }

    /// Free the slot behind `id` and return its value
    ///
    /// Returns `None` (and changes nothing) if `id` is stale or out of range.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Check that `id` is in range, alive and of the current generation
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of living values
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated, alive or dead
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Free every living slot
    ///
    /// Generations are bumped as with [`Arena::remove`], so all outstanding
    /// ids become invalid.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }

    /// Iterate over living values in slot order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|value| (NodeId::new(index as u32, slot.generation), value))
        })
    }
}

impl<T> std::ops::Index<NodeId> for Arena<T> {
    type Output = T;

    /// Panics on an invalid id. Only for ids known to be alive.
    fn index(&self, id: NodeId) -> &T {
        self.get(id).expect("dangling NodeId")
    }
}

impl<T> std::ops::IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.get_mut(id).expect("dangling NodeId")
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(a, NodeId::new(0, 0));
        assert_eq!(b, NodeId::new(1, 0));
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena[b], "b");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_invalidates() {
        let mut arena = Arena::new();
        let a = arena.insert(1);

        assert_eq!(arena.remove(a), Some(1));
        assert!(!arena.contains(a));
        assert!(arena.get(a).is_none());
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_reuse_is_lifo_with_bumped_generation() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let _c = arena.insert(3);

        arena.remove(a);
        arena.remove(b);

        let d = arena.insert(4);
        assert_eq!(d.index, b.index);
        assert!(d.generation > b.generation);

        let e = arena.insert(5);
        assert_eq!(e.index, a.index);
        assert!(e.generation > a.generation);

        // Free list exhausted, so the next insert grows the backing store
        let f = arena.insert(6);
        assert_eq!(f.index, 3);
        assert_eq!(arena.slot_count(), 4);
    }

    #[test]
    fn test_out_of_range_id() {
        let arena: Arena<u8> = Arena::new();
        let bogus = NodeId::new(999, 0);
        assert!(!arena.contains(bogus));
        assert!(arena.get(bogus).is_none());
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);

        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));

        let c = arena.insert(3);
        assert!(c.generation > 0);
        assert_eq!(arena.iter().count(), 1);
    }
}
