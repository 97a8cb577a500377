//! Data module records and their keys.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Dmc, DocumentId, ModelError};

/// One of the two fixed information variants of a data module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InfoVariant {
    /// Verbatim transcription of the source document (`00`).
    #[serde(rename = "00")]
    Verbatim,
    /// Simplified, standardized-English rewrite (`01`).
    #[serde(rename = "01")]
    Simplified,
}

impl InfoVariant {
    /// The two-digit wire code (`"00"` / `"01"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Verbatim => "00",
            Self::Simplified => "01",
        }
    }

    /// Human-readable name for panel headers and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::Simplified => "simplified",
        }
    }

    /// Both variants in code order.
    pub fn all() -> &'static [InfoVariant] {
        &[Self::Verbatim, Self::Simplified]
    }
}

impl std::str::FromStr for InfoVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(Self::Verbatim),
            "01" => Ok(Self::Simplified),
            other => Err(ModelError::InvalidInfoVariant(other.to_string())),
        }
    }
}

impl fmt::Display for InfoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Data module type codes per the source standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DmType {
    /// Procedures
    #[serde(rename = "PROC")]
    Proc,
    /// Descriptions
    #[serde(rename = "DESC")]
    Desc,
    /// Illustrated parts data
    #[serde(rename = "IPD")]
    Ipd,
    /// Circuits
    #[serde(rename = "CIR")]
    Cir,
    /// Service notices
    #[serde(rename = "SNS")]
    Sns,
    /// Wiring
    #[serde(rename = "WIR")]
    Wir,
    /// General
    #[serde(rename = "GEN")]
    Gen,
}

impl DmType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proc => "PROC",
            Self::Desc => "DESC",
            Self::Ipd => "IPD",
            Self::Cir => "CIR",
            Self::Sns => "SNS",
            Self::Wir => "WIR",
            Self::Gen => "GEN",
        }
    }
}

impl fmt::Display for DmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline status of an externally processed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

/// The unique key of a stored module record: `(dmc, info_variant)`.
///
/// At most one record exists per key; the `00` and `01` records sharing a DMC
/// are the two variants of that data module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleKey {
    pub dmc: Dmc,
    pub info_variant: InfoVariant,
}

impl ModuleKey {
    pub fn new(dmc: Dmc, info_variant: InfoVariant) -> Self {
        Self { dmc, info_variant }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.dmc, self.info_variant)
    }
}

/// One information variant of one data module.
///
/// Created and refreshed by the ingestion pipeline; mutated locally only
/// through an explicit save that replaces `content` and `xml_content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataModule {
    pub dmc: Dmc,
    pub info_variant: InfoVariant,
    pub title: String,
    pub dm_type: DmType,
    /// Plain-text body. May be empty.
    #[serde(default)]
    pub content: String,
    /// Structured-markup body. May be empty.
    #[serde(default)]
    pub xml_content: String,
    /// Back-reference to the originating document. Lookup only, not
    /// ownership; a dangling reference is tolerated.
    #[serde(default)]
    pub source_document_id: Option<DocumentId>,
    #[serde(default)]
    pub processing_status: Option<ProcessingStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DataModule {
    pub fn new(
        dmc: Dmc,
        info_variant: InfoVariant,
        title: impl Into<String>,
        dm_type: DmType,
    ) -> Self {
        let now = Utc::now();
        Self {
            dmc,
            info_variant,
            title: title.into(),
            dm_type,
            content: String::new(),
            xml_content: String::new(),
            source_document_id: None,
            processing_status: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> ModuleKey {
        ModuleKey::new(self.dmc.clone(), self.info_variant)
    }

    /// Apply a save patch, replacing the persisted bodies.
    pub fn apply_patch(&mut self, patch: ModulePatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(xml_content) = patch.xml_content {
            self.xml_content = xml_content;
        }
        self.updated_at = Utc::now();
    }
}

/// Save payload for a single module record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_content: Option<String>,
}

impl ModulePatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.xml_content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dmc() -> Dmc {
        Dmc::new("DMC-TEST-A-00").expect("valid dmc")
    }

    #[test]
    fn info_variant_codes_are_closed() {
        assert_eq!("00".parse::<InfoVariant>().ok(), Some(InfoVariant::Verbatim));
        assert_eq!(
            "01".parse::<InfoVariant>().ok(),
            Some(InfoVariant::Simplified)
        );
        assert!("02".parse::<InfoVariant>().is_err());
        assert!("0".parse::<InfoVariant>().is_err());
        assert_eq!(InfoVariant::all().len(), 2);
    }

    #[test]
    fn module_key_display_matches_list_rows() {
        let key = ModuleKey::new(dmc(), InfoVariant::Simplified);
        assert_eq!(key.to_string(), "DMC-TEST-A-00 (01)");
    }

    #[test]
    fn apply_patch_replaces_only_given_fields() {
        let mut module = DataModule::new(dmc(), InfoVariant::Verbatim, "Title", DmType::Gen);
        module.content = "old text".to_string();
        module.xml_content = "<old/>".to_string();

        module.apply_patch(ModulePatch {
            content: Some("new text".to_string()),
            xml_content: None,
        });
        assert_eq!(module.content, "new text");
        assert_eq!(module.xml_content, "<old/>");
    }
}
