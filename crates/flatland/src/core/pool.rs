use crate::api::types::EntityId;

/// Maximum number of live sprites.
pub const SPRITE_LIMIT: usize = 1000;
/// Maximum number of live text labels.
pub const TEXT_LIMIT: usize = 1000;
/// Maximum number of live sounds.
pub const SOUND_LIMIT: usize = 100;

/// An occupied pool entry.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    pub id: EntityId,
    pub value: T,
}

/// Bounded slot storage with hole reuse.
///
/// Removing an entry leaves an empty slot behind. `create` fills the first
/// empty slot before it grows the slot list, and refuses to grow past
/// `limit`. Lookups are linear scans; pools are capped at a few hundred to a
/// thousand entries.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<Slot<T>>>,
    limit: usize,
}

impl<T> Pool<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            limit,
        }
    }

    /// Store `value` under `id`. Returns `None` when every slot is taken and
    /// the pool is at its limit.
    pub fn create(&mut self, id: EntityId, value: T) -> Option<EntityId> {
        if let Some(hole) = self.slots.iter().position(Option::is_none) {
            log::debug!("pool: reusing slot {} for {:?}", hole, id);
            self.slots[hole] = Some(Slot { id, value });
            return Some(id);
        }

        if self.slots.len() < self.limit {
            self.slots.push(Some(Slot { id, value }));
            return Some(id);
        }

        log::warn!("pool: limit of {} reached, dropping {:?}", self.limit, id);
        None
    }

    /// Clear the slot holding `id` and hand back its payload.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let idx = self.slot_of(id)?;
        self.slots[idx].take().map(|slot| slot.value)
    }

    /// Index of the slot currently holding `id`.
    pub fn slot_of(&self, id: EntityId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| s.id == id))
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slots
            .iter()
            .flatten()
            .find(|s| s.id == id)
            .map(|s| &s.value)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|s| s.id == id)
            .map(|s| &mut s.value)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Iterate over occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter().flatten().map(|s| (s.id, &s.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.slots.iter_mut().flatten().map(|s| (s.id, &mut s.value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten().map(|s| &mut s.value)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots ever allocated, holes included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the next `create` would fail.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.limit && self.slots.iter().all(Option::is_some)
    }

    /// Drop every entry and release all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fill(pool: &mut Pool<u32>, n: u64) {
        for i in 0..n {
            assert!(pool.create(EntityId(i), i as u32).is_some());
        }
    }

    #[test]
    fn create_up_to_limit_then_refuse() {
        let mut pool = Pool::new(SPRITE_LIMIT);
        fill(&mut pool, SPRITE_LIMIT as u64);

        let ids: HashSet<EntityId> = pool.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), SPRITE_LIMIT);
        assert!(pool.is_full());
        assert!(pool.create(EntityId(5000), 0).is_none());
        assert_eq!(pool.slot_count(), SPRITE_LIMIT);
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut pool = Pool::new(SPRITE_LIMIT);
        fill(&mut pool, SPRITE_LIMIT as u64);

        let victim = EntityId(417);
        let slot = pool.slot_of(victim).unwrap();
        assert_eq!(pool.remove(victim), Some(417));
        assert!(!pool.is_full());

        let fresh = pool.create(EntityId(9999), 1).unwrap();
        assert_eq!(pool.slot_of(fresh), Some(slot));
        assert_eq!(pool.slot_count(), SPRITE_LIMIT);
    }

    #[test]
    fn lowest_hole_is_filled_first() {
        let mut pool = Pool::new(10);
        fill(&mut pool, 5);
        pool.remove(EntityId(3));
        pool.remove(EntityId(1));

        pool.create(EntityId(10), 10);
        assert_eq!(pool.slot_of(EntityId(10)), Some(1));
        pool.create(EntityId(11), 11);
        assert_eq!(pool.slot_of(EntityId(11)), Some(3));
        pool.create(EntityId(12), 12);
        assert_eq!(pool.slot_of(EntityId(12)), Some(5));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut pool = Pool::new(SOUND_LIMIT);
        fill(&mut pool, 3);
        assert_eq!(pool.remove(EntityId(77)), None);
        assert_eq!(pool.len(), 3);

        pool.remove(EntityId(1));
        assert_eq!(pool.remove(EntityId(1)), None);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut pool = Pool::new(TEXT_LIMIT);
        pool.create(EntityId(1), 10u32);
        *pool.get_mut(EntityId(1)).unwrap() += 5;
        assert_eq!(pool.get(EntityId(1)), Some(&15));
    }

    #[test]
    fn clear_empties_pool() {
        let mut pool = Pool::new(4);
        fill(&mut pool, 4);
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.slot_count(), 0);
    }
}
