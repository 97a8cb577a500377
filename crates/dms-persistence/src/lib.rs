//! Persistent module library for Data Module Studio.
//!
//! A library file (`*.dml.json`) holds the documents and data modules of one
//! authoring workspace as versioned JSON. Saves are atomic (temp file +
//! rename) so a crash never leaves a half-written library behind.
//!
//! [`Library`] implements the workbench's `PersistenceGateway`, so a save
//! from an edit session patches the matching record in place; writing the
//! file back to disk is a separate, explicit step.

mod error;
mod io;
mod library;

pub use error::{PersistenceError, Result};
pub use io::{load_library, save_library};
pub use library::{CURRENT_SCHEMA_VERSION, IngestOutcome, Library};
