pub mod converter;
pub mod error;
pub mod input;
pub mod instrument;
pub mod label;
pub mod slots;

pub use converter::{ConvertOptions, Converter};
pub use error::Error;
pub use instrument::{Instrument, InstrumentBuilder, InstrumentDefinition};
pub use slots::{SlotEntry, SlotMapper, SlotMode, TrackControl};
