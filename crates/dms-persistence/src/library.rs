//! The in-memory library and its gateway implementation.

use serde::{Deserialize, Serialize};

use dms_model::{
    DataModule, DmType, DmcDefaults, Document, DocumentId, InfoVariant, ModuleKey, ModulePatch,
    ProcessingStatus, generate_dmc,
};
use dms_workbench::{GatewayError, ModuleSet, PersistenceGateway};

/// Schema version written to new library files.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// One authoring workspace's documents and data modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    pub schema_version: u32,
    #[serde(default)]
    pub dmc_defaults: DmcDefaults,
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    data_modules: Vec<DataModule>,
}

/// What an ingestion created.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub document_id: DocumentId,
    pub verbatim: ModuleKey,
    pub simplified: ModuleKey,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            dmc_defaults: DmcDefaults::default(),
            documents: Vec::new(),
            data_modules: Vec::new(),
        }
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn modules(&self) -> &[DataModule] {
        &self.data_modules
    }

    pub fn module(&self, key: &ModuleKey) -> Option<&DataModule> {
        self.data_modules.iter().find(|m| &m.key() == key)
    }

    /// Snapshot the modules as a keyed set for the workbench.
    pub fn module_set(&self) -> ModuleSet {
        ModuleSet::from_modules(self.data_modules.iter().cloned())
    }

    /// Register a plain-text source document and create its module pair.
    ///
    /// The document id is derived from the content, the DMC from the
    /// library's configured defaults. The verbatim (`00`) record takes the
    /// text as content; the simplified (`01`) record starts empty, to be
    /// filled by the rewrite pipeline. Re-ingesting under the same defaults
    /// replaces the records with the same keys.
    pub fn ingest_text(&mut self, filename: &str, text: &str, title: Option<&str>) -> IngestOutcome {
        let document_id = DocumentId::from_content(text.as_bytes());
        let mut document = Document::new(document_id, filename, "text/plain");
        document.processing_status = Some(ProcessingStatus::Completed);
        self.documents.retain(|d| d.id != document_id);
        self.documents.push(document);

        let dmc = generate_dmc(&self.dmc_defaults);
        let title = title.unwrap_or(filename);

        let mut verbatim =
            DataModule::new(dmc.clone(), InfoVariant::Verbatim, title, DmType::Gen);
        verbatim.content = text.to_string();
        verbatim.source_document_id = Some(document_id);
        verbatim.processing_status = Some(ProcessingStatus::Completed);

        let mut simplified =
            DataModule::new(dmc.clone(), InfoVariant::Simplified, title, DmType::Gen);
        simplified.source_document_id = Some(document_id);
        simplified.processing_status = Some(ProcessingStatus::Pending);

        let outcome = IngestOutcome {
            document_id,
            verbatim: verbatim.key(),
            simplified: simplified.key(),
        };
        self.upsert(verbatim);
        self.upsert(simplified);
        tracing::info!(dmc = %dmc, file = filename, "ingested source document");
        outcome
    }

    /// Insert a record, replacing any record with the same key.
    pub fn upsert(&mut self, module: DataModule) {
        let key = module.key();
        self.data_modules.retain(|m| m.key() != key);
        self.data_modules.push(module);
    }
}

impl PersistenceGateway for Library {
    fn update_data_module(
        &mut self,
        key: &ModuleKey,
        patch: ModulePatch,
    ) -> Result<(), GatewayError> {
        let record = self
            .data_modules
            .iter_mut()
            .find(|m| &m.key() == key)
            .ok_or_else(|| GatewayError::UnknownModule { key: key.clone() })?;
        record.apply_patch(patch);
        Ok(())
    }
}
