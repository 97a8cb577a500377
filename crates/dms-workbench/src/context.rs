//! The owned workbench context: snapshots, selection, sessions, progress.

use dms_codec::CodecError;
use dms_model::{Document, DocumentId, InfoVariant, ModuleKey};

use crate::{
    GatewayError, ModuleSet, PersistenceGateway, ProcessingProgress, VariantSessions,
};

/// All state of one open workbench.
///
/// Created when the workbench opens, dropped when it closes; nothing here is
/// global. The document and module snapshots are read-only from the core's
/// perspective and replaced wholesale by external refreshes.
#[derive(Debug, Default)]
pub struct Workbench {
    documents: Vec<Document>,
    modules: ModuleSet,
    current_document: Option<DocumentId>,
    current_module: Option<ModuleKey>,
    sessions: VariantSessions,
    progress: ProcessingProgress,
}

impl Workbench {
    pub fn new(documents: Vec<Document>, modules: ModuleSet) -> Self {
        Self {
            documents,
            modules,
            ..Self::default()
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn modules(&self) -> &ModuleSet {
        &self.modules
    }

    /// The currently displayed source document, if any.
    pub fn current_document(&self) -> Option<&Document> {
        let id = self.current_document.as_ref()?;
        self.documents.iter().find(|doc| &doc.id == id)
    }

    pub fn current_module(&self) -> Option<&ModuleKey> {
        self.current_module.as_ref()
    }

    pub fn sessions(&self) -> &VariantSessions {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut VariantSessions {
        &mut self.sessions
    }

    /// Select a data module from the list.
    ///
    /// Resolves the variant pair and seeds fresh edit sessions when the
    /// selection moves to a different DMC; switching between the two
    /// variants of the same DMC keeps the live buffers. If the record's
    /// source document is known it becomes the current document; a missing
    /// or stale back-reference leaves the current document unchanged.
    pub fn select_data_module(&mut self, key: &ModuleKey) -> Result<(), CodecError> {
        let dmc_changed = self
            .current_module
            .as_ref()
            .is_none_or(|current| current.dmc != key.dmc);
        self.current_module = Some(key.clone());

        if dmc_changed || self.sessions.is_empty() {
            let pair = self.modules.resolve(self.current_module.as_ref());
            self.sessions = VariantSessions::seed_from(&pair)?;
        }

        if let Some(record) = self.modules.get(key)
            && let Some(doc_id) = record.source_document_id
        {
            if self.documents.iter().any(|doc| doc.id == doc_id) {
                self.current_document = Some(doc_id);
            } else {
                tracing::debug!(%key, document = %doc_id, "stale document back-reference");
            }
        }
        Ok(())
    }

    /// Select a source document directly.
    ///
    /// Does not touch the current data module; callers resolve a new module
    /// through the module set if they want one.
    pub fn select_document(&mut self, id: DocumentId) {
        self.current_document = Some(id);
    }

    /// Replace the module snapshot (external refresh).
    ///
    /// Sessions for the still-selected DMC are re-seeded from the new
    /// records, since the underlying record identity may have changed.
    pub fn refresh_modules(&mut self, modules: ModuleSet) -> Result<(), CodecError> {
        self.modules = modules;
        let pair = self.modules.resolve(self.current_module.as_ref());
        self.sessions = VariantSessions::seed_from(&pair)?;
        Ok(())
    }

    /// Replace the document snapshot (external refresh).
    pub fn refresh_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    /// Save one variant's current buffers through the gateway.
    ///
    /// Sends `{content, xml_content}` for that variant only; the other
    /// variant's session is untouched. Session state is never mutated by a
    /// save, so unsaved edits survive a gateway failure.
    pub fn save_variant(
        &self,
        variant: InfoVariant,
        gateway: &mut dyn PersistenceGateway,
    ) -> Result<(), GatewayError> {
        let Some(session) = self.sessions.session(variant) else {
            tracing::warn!(variant = variant.code(), "no session to save");
            return Ok(());
        };
        let key = session.key();
        gateway.update_data_module(&key, session.save_patch())?;
        tracing::info!(%key, "saved data module variant");
        Ok(())
    }

    /// Record the latest pipeline progress value (clamped, last value wins).
    pub fn set_progress(&mut self, percent: f32) {
        self.progress = ProcessingProgress::new(percent);
    }

    pub fn progress(&self) -> ProcessingProgress {
        self.progress
    }
}
