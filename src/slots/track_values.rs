//! Insertion-ordered slot map

use super::entry::SlotEntry;
use super::MAX_SLOTS;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key used for a slot in the `.cki` document
pub fn slot_key(slot: u32) -> String {
    format!("slot_{}", slot)
}

/// Ordered mapping from slot index to entry
///
/// Iteration follows insertion order. Re-inserting an existing slot replaces
/// its entry without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackValues {
    entries: IndexMap<u32, SlotEntry>,
}

impl TrackValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous occupant of the slot
    pub fn insert(&mut self, slot: u32, entry: SlotEntry) -> Option<SlotEntry> {
        self.entries.insert(slot, entry)
    }

    pub fn get(&self, slot: u32) -> Option<&SlotEntry> {
        self.entries.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &SlotEntry)> {
        self.entries.iter().map(|(slot, entry)| (*slot, entry))
    }

    /// Slot indices in iteration order
    pub fn slots(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    /// Redirect every slot above [`MAX_SLOTS`] onto the last addressable slot.
    ///
    /// Entries are replayed in order, so whichever entry lands on the last
    /// slot latest wins. Returns the number of entries that were aliased.
    pub fn alias_overflow(&mut self) -> usize {
        if self.entries.keys().all(|slot| *slot <= MAX_SLOTS) {
            return 0;
        }

        let mut aliased = 0;
        let old = std::mem::take(&mut self.entries);
        for (slot, entry) in old {
            let target = if slot > MAX_SLOTS {
                aliased += 1;
                MAX_SLOTS
            } else {
                slot
            };
            self.entries.insert(target, entry);
        }

        tracing::warn!(
            aliased,
            "slots above {} aliased onto {}",
            MAX_SLOTS,
            slot_key(MAX_SLOTS)
        );
        aliased
    }
}

impl Serialize for TrackValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (slot, entry) in self.iter() {
            map.serialize_entry(&slot_key(slot), entry)?;
        }
        map.end()
    }
}
