//! GS1 scan domain types
//!
//! The decoded record handed to callers, the application identifiers the
//! decoder understands, and the symbology/encoding markers reported by
//! analysis.

mod ai;
mod element;
mod record;
mod symbology;

pub use ai::*;
pub use element::*;
pub use record::*;
pub use symbology::*;
