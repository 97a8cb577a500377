//! Persistence seam for module saves.

use dms_model::{ModuleKey, ModulePatch};
use thiserror::Error;

/// Errors surfaced by a persistence backend.
///
/// The workbench does not interpret these beyond success/failure; it never
/// retries and never drops unsaved buffers on failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no data module stored for {key}")]
    UnknownModule { key: ModuleKey },
    #[error("persistence backend failure: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GatewayError {
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend {
            source: Box::new(source),
        }
    }
}

/// Accepts a save request per variant.
///
/// Implementations persist the patched record; the core treats the call as
/// fire-and-forget and continues editing without awaiting durability.
pub trait PersistenceGateway {
    fn update_data_module(
        &mut self,
        key: &ModuleKey,
        patch: ModulePatch,
    ) -> Result<(), GatewayError>;
}
