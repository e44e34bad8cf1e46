use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed, generational index into an [`Arena`].
///
/// A handle stays valid until its value is removed; a new value stored in the same slot gets
/// a new generation, so stale handles never alias it.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

// manual impls, derives would require `T` to implement the traits too
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

struct Entry<T, O> {
    value: T,
    owner: Option<O>,
}

struct Slot<T, O> {
    generation: u32,
    entry: Option<Entry<T, O>>,
}

/// Slot storage with an owner recorded next to every value.
///
/// The arena owns the values; "ownership" in the `O` sense is the logical parent collection,
/// tracked here so that a value can be in at most one collection at a time.
pub(crate) struct Arena<T, O> {
    slots: Vec<Slot<T, O>>,
    free: Vec<u32>,
    len: usize,
}

impl<T, O: Copy> Arena<T, O> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> Handle<T> {
        let entry = Entry {
            value,
            owner: None,
        };
        self.len += 1;

        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(entry);
                Handle::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                Handle::new(index, 0)
            }
        }
    }

    fn entry(&self, handle: Handle<T>) -> Option<&Entry<T, O>> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut(&mut self, handle: Handle<T>) -> Option<&mut Entry<T, O>> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.entry(handle).is_some()
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.entry(handle)
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.entry_mut(handle)
            .map(|entry| &mut entry.value)
    }

    /// Swaps in a new value, keeping handle and owner.
    pub fn replace(&mut self, handle: Handle<T>, value: T) -> Option<T> {
        self.entry_mut(handle)
            .map(|entry| std::mem::replace(&mut entry.value, value))
    }

    pub fn owner(&self, handle: Handle<T>) -> Option<O> {
        self.entry(handle)
            .and_then(|entry| entry.owner)
    }

    /// Returns `false` when the handle is stale.
    pub fn set_owner(&mut self, handle: Handle<T>, owner: Option<O>) -> bool {
        match self.entry_mut(handle) {
            Some(entry) => {
                entry.owner = owner;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let entry = slot.entry.take()?;

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(entry.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.entry
                    .as_ref()
                    .map(|entry| (Handle::new(index as u32, slot.generation), &entry.value))
            })
    }
}
