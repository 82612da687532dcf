//! Generational object pool.

use crate::pool::config::PoolConfig;
use crate::pool::error::PoolError;
use crate::pool::handle::Handle;
use std::any::type_name;
use std::fmt;

/// Arena of values addressed by generational [`Handle`]s.
///
/// Values live in one contiguous `Vec` of slots. Destroyed slots go on a free
/// list and are reused by later creations; every reuse bumps the slot's
/// generation, so handles issued before the destroy stay invalid forever.
/// Slot indices never change, including when the storage grows.
///
/// Dropping the pool drops every live value exactly once, in index order.
///
/// # Example
///
/// ```rust
/// use autonex::pool::ObjectPool;
///
/// let mut pool = ObjectPool::with_capacity(2);
/// let a = pool.create(42);
/// let b = pool.create(100);
/// let _c = pool.create(256);
/// assert_eq!(pool.size(), 3);
///
/// assert!(pool.destroy(b));
/// assert_eq!(pool.size(), 2);
/// assert_eq!(pool.get(b), None);
///
/// let d = pool.create(7);
/// assert_eq!(d.index(), b.index());
/// assert!(!pool.validate(b));
/// assert_eq!(pool.get(a), Some(&42));
/// ```
pub struct ObjectPool<T> {
    slots: Vec<Slot<T>>,

    /// Indices of dead slots, reused most-recently-freed first.
    free_list: Vec<u32>,

    /// Dead slots whose generation counter is exhausted. They are never reused.
    retired: usize,

    max_slots: Option<u32>,
}

struct Slot<T> {
    /// `Some` while the slot is alive.
    value: Option<T>,
    generation: u64,
}

impl<T> Slot<T> {
    fn is_live_at(&self, generation: u64) -> bool {
        self.value.is_some() && self.generation == generation
    }
}

impl<T> ObjectPool<T> {
    /// Create an empty pool without reserving storage.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty pool with room for `capacity` values before the slot
    /// storage has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            retired: 0,
            max_slots: None,
        }
    }

    /// Create an empty pool sized and limited by `config`.
    pub fn with_config(config: &PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;

        let mut pool = Self::with_capacity(config.initial_capacity);
        pool.max_slots = config.max_slots;
        Ok(pool)
    }

    /// Store `value` and return a handle to it.
    ///
    /// # Panics
    ///
    /// Panics if the pool has reached its configured slot limit or the `u32`
    /// index space. Use [`try_create`](Self::try_create) to handle that case.
    pub fn create(&mut self, value: T) -> Handle {
        match self.try_create(value) {
            Ok(handle) => handle,
            Err(err) => panic!("cannot create {} in pool: {err}", type_name::<T>()),
        }
    }

    /// Construct a value with `constructor` and store it.
    ///
    /// # Panics
    ///
    /// Same conditions as [`create`](Self::create).
    pub fn create_with<F>(&mut self, constructor: F) -> Handle
    where
        F: FnOnce() -> T,
    {
        self.create(constructor())
    }

    /// Construct a value with a fallible `constructor` and store it.
    ///
    /// The constructor runs before a slot is claimed, so an error leaves the
    /// pool exactly as it was.
    ///
    /// # Panics
    ///
    /// Same conditions as [`create`](Self::create).
    pub fn try_create_with<F, E>(&mut self, constructor: F) -> Result<Handle, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = constructor()?;
        Ok(self.create(value))
    }

    /// Store `value`, reusing a dead slot if one is available.
    ///
    /// Fails if a new slot is needed and the configured limit or the `u32`
    /// index space has been reached. `value` is dropped in that case.
    pub fn try_create(&mut self, value: T) -> Result<Handle, PoolError> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            // Free slots always sit below u64::MAX, see `release`.
            slot.generation += 1;
            slot.value = Some(value);
            tracing::trace!(index, generation = slot.generation, "reused pool slot");
            return Ok(Handle::new(index, slot.generation));
        }

        let index = self.next_slot_index()?;
        if self.slots.len() == self.slots.capacity() {
            tracing::debug!(
                capacity = self.slots.capacity(),
                "growing pool storage for {}",
                type_name::<T>()
            );
        }
        self.slots.push(Slot {
            value: Some(value),
            generation: 0,
        });
        tracing::trace!(index, "allocated pool slot");
        Ok(Handle::new(index, 0))
    }

    fn next_slot_index(&self) -> Result<u32, PoolError> {
        let index =
            u32::try_from(self.slots.len()).map_err(|_| PoolError::IndexSpaceExhausted)?;

        match self.max_slots {
            Some(max_slots) if index >= max_slots => Err(PoolError::Full { max_slots }),
            _ => Ok(index),
        }
    }

    /// Drop the value behind `handle`.
    ///
    /// Returns `false` without doing anything if the handle is not valid, so a
    /// second destroy through the same handle is a no-op.
    pub fn destroy(&mut self, handle: Handle) -> bool {
        self.remove(handle).is_some()
    }

    /// Move the value behind `handle` out of the pool, freeing its slot.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let value = self.live_slot_mut(handle)?.value.take();
        self.release(handle.index());
        tracing::trace!(%handle, "released pool slot");
        value
    }

    /// Mark a slot that was just emptied as dead and seal its old handles.
    fn release(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];

        // Keep one generation of headroom so reuse can bump it again.
        match slot.generation.checked_add(1).filter(|&g| g < u64::MAX) {
            Some(generation) => {
                slot.generation = generation;
                self.free_list.push(index);
            }
            None => {
                slot.generation = u64::MAX;
                self.retired += 1;
                tracing::warn!(index, "retiring pool slot with exhausted generation counter");
            }
        }
    }

    /// Whether `handle` refers to a live value in this pool.
    pub fn validate(&self, handle: Handle) -> bool {
        self.live_slot(handle).is_some()
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.live_slot(handle)?.value.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.live_slot_mut(handle)?.value.as_mut()
    }

    fn live_slot(&self, handle: Handle) -> Option<&Slot<T>> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.is_live_at(handle.generation()))
    }

    fn live_slot_mut(&mut self, handle: Handle) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.is_live_at(handle.generation()))
    }

    /// Number of live values.
    pub fn size(&self) -> usize {
        self.slots.len() - self.free_list.len() - self.retired
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of slots ever allocated, live or dead.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots the storage can hold without growing.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drop every live value in index order and invalidate all handles.
    ///
    /// Slots stay allocated and are reused by later creations.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].value.take().is_some() {
                self.release(index as u32);
            }
        }
    }

    /// Live values and their handles, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let value = slot.value.as_ref()?;
            Some((Handle::new(index as u32, slot.generation), value))
        })
    }

    /// Live values and their handles, in index order, with mutable access.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            let value = slot.value.as_mut()?;
            Some((Handle::new(index as u32, generation), value))
        })
    }
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("type", &type_name::<T>())
            .field("size", &self.size())
            .field("slots", &self.slots.len())
            .field("free", &self.free_list.len())
            .field("retired", &self.retired)
            .field("max_slots", &self.max_slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records its id into a shared log when dropped.
    struct DropProbe {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for DropProbe {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn probe(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> DropProbe {
        DropProbe {
            id,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn reserved_pool_grows_and_reuses_freed_slot() {
        let mut pool = ObjectPool::with_capacity(2);
        assert!(pool.capacity() >= 2);

        let first = pool.create(42);
        let second = pool.create(100);
        let third = pool.create(256);
        assert_eq!(pool.size(), 3);
        assert_eq!(pool.slot_count(), 3);
        assert!(pool.capacity() >= 3);

        assert!(pool.destroy(second));
        assert_eq!(pool.size(), 2);
        assert_eq!(pool.get(second), None);

        let fourth = pool.create(512);
        assert_eq!(fourth.index(), second.index());
        assert_ne!(fourth.generation(), second.generation());
        assert!(!pool.validate(second));
        assert_eq!(pool.get(fourth), Some(&512));
        assert_eq!(pool.get(first), Some(&42));
        assert_eq!(pool.get(third), Some(&256));
        assert_eq!(pool.slot_count(), 3);
    }

    #[test]
    fn new_handle_is_valid() {
        let mut pool = ObjectPool::new();
        let handle = pool.create("value");

        assert!(pool.validate(handle));
        assert_eq!(handle.index(), 0);
        assert_eq!(handle.generation(), 0);
    }

    #[test]
    fn handle_outside_pool_is_invalid() {
        let mut pool = ObjectPool::new();
        pool.create(1_u8);

        let foreign = Handle::new(5, 0);
        assert!(!pool.validate(foreign));
        assert_eq!(pool.get(foreign), None);
        assert!(!pool.destroy(foreign));
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn handle_with_wrong_generation_is_invalid() {
        let mut pool = ObjectPool::new();
        let handle = pool.create(1_u8);

        let stale = Handle::new(handle.index(), handle.generation() + 1);
        assert!(!pool.validate(stale));
        assert_eq!(pool.get(stale), None);
    }

    #[test]
    fn double_destroy_drops_value_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pool = ObjectPool::new();
        let handle = pool.create(probe(1, &log));

        assert!(pool.destroy(handle));
        assert!(!pool.destroy(handle));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(pool.is_empty());
    }

    #[test]
    fn reused_slot_holds_only_new_value() {
        let mut pool = ObjectPool::new();
        let old = pool.create(vec![1, 2, 3]);
        pool.destroy(old);

        let new = pool.create(vec![9]);
        assert_eq!(new.index(), old.index());
        assert_eq!(pool.get(new), Some(&vec![9]));
    }

    #[test]
    fn generation_increases_every_cycle() {
        let mut pool = ObjectPool::new();
        let mut previous = pool.create(0);

        for cycle in 1..10 {
            assert!(pool.destroy(previous));
            let next = pool.create(cycle);
            assert_eq!(next.index(), previous.index());
            assert!(next.generation() > previous.generation());
            assert!(!pool.validate(previous));
            previous = next;
        }
    }

    #[test]
    fn free_slots_are_reused_last_freed_first() {
        let mut pool = ObjectPool::new();
        let a = pool.create('a');
        let b = pool.create('b');
        pool.create('c');

        pool.destroy(a);
        pool.destroy(b);

        assert_eq!(pool.create('x').index(), b.index());
        assert_eq!(pool.create('y').index(), a.index());
        assert_eq!(pool.create('z').index(), 3);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut pool = ObjectPool::new();
        let handle = pool.create(10);

        *pool.get_mut(handle).unwrap() += 5;

        assert_eq!(pool.get(handle), Some(&15));
    }

    #[test]
    fn remove_returns_value_without_dropping() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pool = ObjectPool::new();
        let handle = pool.create(probe(7, &log));

        let value = pool.remove(handle).unwrap();
        assert!(log.borrow().is_empty());
        assert!(!pool.validate(handle));
        assert!(pool.remove(handle).is_none());

        drop(value);
        assert_eq!(*log.borrow(), vec![7]);
    }

    #[test]
    fn create_with_runs_constructor() {
        let mut pool = ObjectPool::new();
        let handle = pool.create_with(|| String::from("built"));

        assert_eq!(pool.get(handle).map(String::as_str), Some("built"));
    }

    #[test]
    fn failing_constructor_leaves_pool_untouched() {
        let mut pool: ObjectPool<u32> = ObjectPool::new();
        let freed = pool.create(1);
        pool.destroy(freed);

        let result: Result<Handle, &str> = pool.try_create_with(|| Err("broken"));
        assert_eq!(result, Err("broken"));
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.slot_count(), 1);

        let handle = pool.try_create_with::<_, &str>(|| Ok(2)).unwrap();
        assert_eq!(handle.index(), freed.index());
        assert_eq!(handle.generation(), freed.generation() + 2);
    }

    #[test]
    fn pool_drops_live_values_in_index_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut pool = ObjectPool::new();
            let handles: Vec<Handle> = (0..5).map(|id| pool.create(probe(id, &log))).collect();
            pool.destroy(handles[1]);
            pool.destroy(handles[3]);
            log.borrow_mut().clear();
        }

        assert_eq!(*log.borrow(), vec![0, 2, 4]);
    }

    #[test]
    fn clear_drops_everything_and_invalidates_handles() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pool = ObjectPool::new();
        let handles: Vec<Handle> = (0..3).map(|id| pool.create(probe(id, &log))).collect();

        pool.clear();

        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(pool.is_empty());
        assert_eq!(pool.slot_count(), 3);
        assert!(handles.iter().all(|&h| !pool.validate(h)));

        let reused = pool.create(probe(9, &log));
        assert!(reused.index() < 3);
    }

    #[test]
    fn iter_visits_live_values_in_index_order() {
        let mut pool = ObjectPool::new();
        let a = pool.create(1);
        let b = pool.create(2);
        let c = pool.create(3);
        pool.destroy(b);

        let seen: Vec<(Handle, i32)> = pool.iter().map(|(h, v)| (h, *v)).collect();
        assert_eq!(seen, vec![(a, 1), (c, 3)]);
    }

    #[test]
    fn iter_mut_handles_are_valid() {
        let mut pool = ObjectPool::new();
        pool.create(1);
        pool.create(2);

        let mut handles = Vec::new();
        for (handle, value) in pool.iter_mut() {
            *value *= 10;
            handles.push(handle);
        }

        let values: Vec<i32> = handles.iter().map(|&h| *pool.get(h).unwrap()).collect();
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn configured_limit_is_enforced() {
        let config = PoolConfig::default().with_max_slots(2);
        let mut pool = ObjectPool::with_config(&config).unwrap();
        let first = pool.try_create(1).unwrap();
        pool.try_create(2).unwrap();

        assert_eq!(pool.try_create(3), Err(PoolError::Full { max_slots: 2 }));

        pool.destroy(first);
        assert!(pool.try_create(4).is_ok());
    }

    #[test]
    #[should_panic(expected = "Pool is full")]
    fn create_panics_past_limit() {
        let config = PoolConfig::default().with_max_slots(1);
        let mut pool = ObjectPool::with_config(&config).unwrap();
        pool.create(1);
        pool.create(2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PoolConfig::default()
            .with_initial_capacity(8)
            .with_max_slots(2);

        assert!(matches!(
            ObjectPool::<u8>::with_config(&config),
            Err(PoolError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut pool = ObjectPool::new();
        let handle = pool.create(1);
        pool.slots[0].generation = u64::MAX - 1;
        let handle = Handle::new(handle.index(), u64::MAX - 1);
        assert!(pool.validate(handle));

        assert!(pool.destroy(handle));
        assert!(!pool.validate(handle));
        assert_eq!(pool.size(), 0);

        let next = pool.create(2);
        assert_ne!(next.index(), handle.index());
        assert_eq!(pool.size(), 1);
        assert_eq!(pool.slot_count(), 2);
    }

    #[test]
    fn generation_one_below_limit_is_still_reusable() {
        let mut pool = ObjectPool::new();
        pool.create(1);
        pool.slots[0].generation = u64::MAX - 3;

        assert!(pool.destroy(Handle::new(0, u64::MAX - 3)));
        let reused = pool.create(2);

        assert_eq!(reused.index(), 0);
        assert_eq!(reused.generation(), u64::MAX - 1);
    }

    #[test]
    fn drop_counter_matches_creations() {
        let drops = Rc::new(Cell::new(0));

        struct Counted(Rc<Cell<u32>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        {
            let mut pool = ObjectPool::new();
            let handles: Vec<Handle> = (0..6)
                .map(|_| pool.create(Counted(Rc::clone(&drops))))
                .collect();
            for handle in handles.iter().step_by(2) {
                pool.destroy(*handle);
            }
            assert_eq!(drops.get(), 3);
        }

        assert_eq!(drops.get(), 6);
    }
}
