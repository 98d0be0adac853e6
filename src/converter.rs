//! CSV to instrument conversion pipeline

use crate::error::Result;
use crate::input::RowReader;
use crate::instrument::{Instrument, InstrumentBuilder, DEFAULT_CHANNEL, DEFAULT_PORT};
use crate::slots::{SlotMapper, SlotMode};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Name used when none is given and the input has no file name
pub const DEFAULT_NAME: &str = "instrument";

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub name: String,
    pub port: i64,
    pub channel: i64,
    pub multi: bool,
    pub disable_transpose: bool,
    pub disable_force_to_scale: bool,
    /// Drop the first input row
    pub has_header: bool,
    pub slot_mode: SlotMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            port: DEFAULT_PORT,
            channel: DEFAULT_CHANNEL,
            multi: false,
            disable_transpose: false,
            disable_force_to_scale: false,
            has_header: true,
            slot_mode: SlotMode::default(),
        }
    }
}

/// Converts CSV slot tables into instruments
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert CSV input to an instrument.
    ///
    /// Fails on the first malformed row; nothing is returned for a partial
    /// table.
    pub fn convert<R: Read>(&self, input: R) -> Result<Instrument> {
        let mut mapper = SlotMapper::new(self.options.slot_mode);
        for row in RowReader::new(input, self.options.has_header) {
            mapper.push(&row?)?;
        }
        let mapping = mapper.finish();

        let instrument = InstrumentBuilder::new(self.options.name.as_str())
            .port(self.options.port)
            .channel(self.options.channel)
            .multi(self.options.multi)
            .disable_transpose(self.options.disable_transpose)
            .disable_force_to_scale(self.options.disable_force_to_scale)
            .track_values(mapping.track_values)
            .build();

        info!(
            name = %instrument.name,
            slots = instrument.metadata.track_values.len(),
            "converted instrument"
        );
        Ok(instrument)
    }

    /// Convert a CSV file
    pub fn convert_file(&self, path: &Path) -> Result<Instrument> {
        let file = File::open(path)?;
        self.convert(BufReader::new(file))
    }
}
