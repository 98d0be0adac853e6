//! Slot entry types

use serde::Serialize;

/// Built-in Cirklon track controls that can be placed in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrackControl {
    #[serde(rename = "pgm")]
    Program,
    #[serde(rename = "quant%")]
    QuantizePercent,
    #[serde(rename = "note%")]
    NotePercent,
    #[serde(rename = "noteC")]
    NoteChance,
    #[serde(rename = "velo%")]
    VelocityPercent,
    #[serde(rename = "veloC")]
    VelocityChance,
    #[serde(rename = "leng%")]
    LengthPercent,
    #[serde(rename = "tbase")]
    TimeBase,
    #[serde(rename = "octave")]
    Octave,
    #[serde(rename = "knob1")]
    Knob1,
    #[serde(rename = "knob2")]
    Knob2,
}

impl TrackControl {
    pub const ALL: [TrackControl; 11] = [
        TrackControl::Program,
        TrackControl::QuantizePercent,
        TrackControl::NotePercent,
        TrackControl::NoteChance,
        TrackControl::VelocityPercent,
        TrackControl::VelocityChance,
        TrackControl::LengthPercent,
        TrackControl::TimeBase,
        TrackControl::Octave,
        TrackControl::Knob1,
        TrackControl::Knob2,
    ];

    /// Name as written in the input table and in the `.cki` document
    pub fn as_str(self) -> &'static str {
        match self {
            TrackControl::Program => "pgm",
            TrackControl::QuantizePercent => "quant%",
            TrackControl::NotePercent => "note%",
            TrackControl::NoteChance => "noteC",
            TrackControl::VelocityPercent => "velo%",
            TrackControl::VelocityChance => "veloC",
            TrackControl::LengthPercent => "leng%",
            TrackControl::TimeBase => "tbase",
            TrackControl::Octave => "octave",
            TrackControl::Knob1 => "knob1",
            TrackControl::Knob2 => "knob2",
        }
    }

    /// Look up a track control by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tc| tc.as_str() == name)
    }
}

impl std::fmt::Display for TrackControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of one addressable slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SlotEntry {
    /// Generic MIDI CC assignment
    CcAssignment {
        #[serde(rename = "MIDI_CC")]
        cc_number: i64,
        /// Display label, at most 6 characters
        label: String,
    },
    /// Reference to a built-in track control
    TrackControlRef {
        #[serde(rename = "track_control")]
        control_name: TrackControl,
    },
}

impl SlotEntry {
    /// Create a CC assignment, truncating the label to the display width
    pub fn cc(cc_number: i64, label: &str) -> Self {
        SlotEntry::CcAssignment {
            cc_number,
            label: crate::label::truncate_label(label),
        }
    }

    pub fn track_control(control_name: TrackControl) -> Self {
        SlotEntry::TrackControlRef { control_name }
    }
}
