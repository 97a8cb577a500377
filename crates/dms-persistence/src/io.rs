//! Library file I/O.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::library::{CURRENT_SCHEMA_VERSION, Library};

/// Load a library from disk.
pub fn load_library(path: &Path) -> Result<Library> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let library: Library =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if library.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: library.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        documents = library.documents().len(),
        modules = library.modules().len(),
        "loaded library"
    );
    Ok(library)
}

/// Save a library to disk.
///
/// Writes to a temp file in the same directory, syncs, then renames over the
/// target so a crash never corrupts an existing library.
pub fn save_library(library: &Library, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(library)
        .map_err(|e| PersistenceError::Serialization { source: e })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    fs::rename(&temp_path, path).map_err(|e| PersistenceError::Io {
        operation: "rename",
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "saved library");
    Ok(())
}
