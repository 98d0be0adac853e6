//! Instrument records and the `.cki` document

pub mod definition;
pub mod json;

pub use definition::InstrumentDefinition;
pub use json::{sort_keys, write_document, JsonStyle};

use crate::label::{truncate_name, NAME_MAX_LEN};
use crate::slots::TrackValues;
use serde::Serialize;
use tracing::warn;

/// Default MIDI port and channel of a new instrument
pub const DEFAULT_PORT: i64 = 1;
pub const DEFAULT_CHANNEL: i64 = 1;

/// Device-level parameters of one instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentMetadata {
    pub midi_port: i64,
    #[serde(rename = "midi_chan")]
    pub midi_channel: i64,
    /// Multi-timbral
    pub multi: bool,
    #[serde(rename = "no_xpose", skip_serializing_if = "is_false")]
    pub disable_transpose: bool,
    #[serde(rename = "no_fts", skip_serializing_if = "is_false")]
    pub disable_force_to_scale: bool,
    pub track_values: TrackValues,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A named instrument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub name: String,
    pub metadata: InstrumentMetadata,
}

/// Builder for [`Instrument`]
#[derive(Debug, Clone)]
pub struct InstrumentBuilder {
    name: String,
    port: i64,
    channel: i64,
    multi: bool,
    disable_transpose: bool,
    disable_force_to_scale: bool,
    track_values: TrackValues,
}

impl InstrumentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: DEFAULT_PORT,
            channel: DEFAULT_CHANNEL,
            multi: false,
            disable_transpose: false,
            disable_force_to_scale: false,
            track_values: TrackValues::new(),
        }
    }

    pub fn port(mut self, port: i64) -> Self {
        self.port = port;
        self
    }

    pub fn channel(mut self, channel: i64) -> Self {
        self.channel = channel;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn disable_transpose(mut self, disable: bool) -> Self {
        self.disable_transpose = disable;
        self
    }

    pub fn disable_force_to_scale(mut self, disable: bool) -> Self {
        self.disable_force_to_scale = disable;
        self
    }

    pub fn track_values(mut self, track_values: TrackValues) -> Self {
        self.track_values = track_values;
        self
    }

    /// Finish the instrument.
    ///
    /// Truncates the name to the display width and folds slots past the
    /// device ceiling onto the last slot.
    pub fn build(self) -> Instrument {
        let name = truncate_name(&self.name);
        if name != self.name {
            warn!(
                original = %self.name,
                truncated = %name,
                "instrument name longer than {} characters",
                NAME_MAX_LEN
            );
        }

        let mut track_values = self.track_values;
        track_values.alias_overflow();

        Instrument {
            name,
            metadata: InstrumentMetadata {
                midi_port: self.port,
                midi_channel: self.channel,
                multi: self.multi,
                disable_transpose: self.disable_transpose,
                disable_force_to_scale: self.disable_force_to_scale,
                track_values,
            },
        }
    }
}
