//! Slot mapping: turns input rows into numbered slot entries

pub mod entry;
pub mod mapper;
pub mod track_values;

pub use entry::{SlotEntry, TrackControl};
pub use mapper::{SlotMapper, SlotMapping, SlotMode, SlotRow};
pub use track_values::{slot_key, TrackValues};

/// Number of slot keys the Cirklon can address
pub const MAX_SLOTS: u32 = 96;

/// Control identifier that consumes a slot without assigning it
pub const SKIP_TOKEN: &str = "skip";
