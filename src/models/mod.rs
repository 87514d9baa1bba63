//! Score vocabulary shared by the export builder and the part registry.

pub mod attributes;
pub mod duration;
pub mod pitch;

pub use attributes::{Clef, KeySignature, Mode, TimeSignature};
pub use duration::DurationType;
pub use pitch::{Pitch, Step};
