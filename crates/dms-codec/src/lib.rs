//! Text <-> structured XML codec for data modules.
//!
//! Maps a module identity plus plain-text content to a minimal structured
//! wrapper and back. The wrapper is an internal working representation for
//! the authoring workbench, not a persisted interchange format.

mod error;
mod xml;

pub use error::CodecError;
pub use xml::{ModuleIdentity, decode, encode};
