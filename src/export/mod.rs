//! MusicXML export module
//!
//! Accumulates a score into an in-memory XML element tree matching the
//! MusicXML 3.0 `score-partwise` schema subset, then serializes it.
//!
//! # Module Structure
//!
//! - **builder**: `MusicXmlBuilder`, the stateful score-partwise builder
//! - **tree**: arena-held XML element tree and serializer
//! - **errors**: export error types
//! - **helpers**: divisions arithmetic (GCD/LCM, divisions suggestion)

pub mod builder;
pub mod errors;
pub mod helpers;
pub mod tree;

pub use builder::{MusicXmlBuilder, TupletType};
pub use errors::ExportError;
pub use helpers::{gcd, lcm, suggest_divisions};
pub use tree::{NodeId, XmlTree};
