//! Row-to-slot mapping

use super::entry::{SlotEntry, TrackControl};
use super::track_values::{slot_key, TrackValues};
use super::SKIP_TOKEN;
use crate::error::{Error, Result};
use tracing::debug;

/// How slot indices are derived from the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotMode {
    /// Running counter over all rows; the skip token leaves a gap
    #[default]
    Counter,
    /// Next index is the number of entries stored so far plus one.
    /// There is no skip token in this mode.
    Derived,
}

/// One input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    /// Row number in the input, reported in errors
    pub row: u64,
    /// Track control name, skip token or MIDI CC number
    pub control: String,
    pub label: String,
}

impl SlotRow {
    pub fn new(row: u64, control: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            row,
            control: control.into(),
            label: label.into(),
        }
    }
}

/// Result of mapping a row sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMapping {
    pub track_values: TrackValues,
    /// Highest slot index reached (including trailing skips)
    pub last_index: u32,
}

impl SlotMapping {
    /// Apply the slot ceiling to the mapped entries
    pub fn into_aliased(mut self) -> TrackValues {
        self.track_values.alias_overflow();
        self.track_values
    }
}

/// Incremental slot mapper
#[derive(Debug, Clone)]
pub struct SlotMapper {
    mode: SlotMode,
    track_values: TrackValues,
    counter: u32,
}

impl SlotMapper {
    pub fn new(mode: SlotMode) -> Self {
        Self {
            mode,
            track_values: TrackValues::new(),
            counter: 0,
        }
    }

    /// Map a whole row sequence, stopping at the first malformed row
    pub fn map_rows<I>(mode: SlotMode, rows: I) -> Result<SlotMapping>
    where
        I: IntoIterator<Item = SlotRow>,
    {
        let mut mapper = Self::new(mode);
        for row in rows {
            mapper.push(&row)?;
        }
        Ok(mapper.finish())
    }

    /// Process the next row
    pub fn push(&mut self, row: &SlotRow) -> Result<()> {
        match self.mode {
            SlotMode::Counter => {
                let slot = self.counter + 1;
                if row.control == SKIP_TOKEN {
                    debug!(row = row.row, slot, "skipped");
                } else {
                    let entry = classify(row)?;
                    debug!(row = row.row, key = %slot_key(slot), ?entry, "mapped");
                    self.track_values.insert(slot, entry);
                }
                self.counter = slot;
            }
            SlotMode::Derived => {
                let slot = self.track_values.len() as u32 + 1;
                let entry = classify(row)?;
                debug!(row = row.row, key = %slot_key(slot), ?entry, "mapped");
                self.track_values.insert(slot, entry);
                self.counter = slot;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> SlotMapping {
        SlotMapping {
            track_values: self.track_values,
            last_index: self.counter,
        }
    }
}

/// Classify a non-skip row as a track control or a CC assignment
fn classify(row: &SlotRow) -> Result<SlotEntry> {
    if let Some(control) = TrackControl::from_name(&row.control) {
        return Ok(SlotEntry::track_control(control));
    }

    let cc_number = row.control.trim().parse::<i64>().map_err(|e| Error::Parse {
        row: row.row,
        message: format!("invalid MIDI CC number '{}': {}", row.control, e),
    })?;

    Ok(SlotEntry::cc(cc_number, &row.label))
}
